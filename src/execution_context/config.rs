use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::prelude::*;

pub const DEFAULT_CONFIG_FOLDER: &str = "./config";
pub const DEFAULT_OUTPUT_FOLDER: &str = "./output";

/// Parameters of an [`ExecutionContext`](super::ExecutionContext).
///
/// Relative folder paths are resolved against the current working directory when the
/// context is created.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExecutionContextConfig {
    /// Identifies the run. Only used to build the default configuration.
    pub key: String,

    #[serde(default = "default_output_folder_path")]
    pub output_folder_path: PathBuf,

    #[serde(default = "default_config_folder_path")]
    pub config_folder_path: PathBuf,

    /// Append a per-run timestamp folder to `output_folder_path`
    #[serde(default = "default_ensure_unique_output_folder")]
    pub ensure_unique_output_folder: bool,
}

fn default_output_folder_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FOLDER)
}

fn default_config_folder_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FOLDER)
}

fn default_ensure_unique_output_folder() -> bool {
    true
}

impl ExecutionContextConfig {
    /// Default configuration: `./config`, `./output` and a unique output folder per run.
    pub fn with_key(key: impl Into<String>) -> Self {
        ExecutionContextConfig {
            key: key.into(),
            output_folder_path: default_output_folder_path(),
            config_folder_path: default_config_folder_path(),
            ensure_unique_output_folder: default_ensure_unique_output_folder(),
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        debug!("Loaded execution context configuration from {}", path.display());
        Self::from_yaml_str(&content)
    }
}
