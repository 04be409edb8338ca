use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Neither a configuration nor a key was specified")]
    ConfigurationMissing,

    #[error("Could not resolve the absolute path of {}", .path.display())]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not create folder {}", .path.display())]
    CreateFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read configuration file {}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not parse configuration: {0}")]
    ParseConfig(#[from] serde_yaml::Error),
}
