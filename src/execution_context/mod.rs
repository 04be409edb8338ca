mod config;
pub mod helpers;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::prelude::*;
use crate::sink::{OutputSink, StdoutSink};
use crate::styled_logger::{Logging, StyledLogger};
use helpers::folder::{ensure_folder, resolve_absolute, unique_folder_name};

pub use config::{DEFAULT_CONFIG_FOLDER, DEFAULT_OUTPUT_FOLDER, ExecutionContextConfig};

/// Resolved config and output folders for a run, plus the logger shared with callers.
///
/// Both folders exist once construction succeeds. They are not checked again afterwards.
#[derive(Debug)]
pub struct ExecutionContext {
    config: ExecutionContextConfig,
    logger: StyledLogger,
    /// Absolute path of the configuration folder
    resolved_config_path: PathBuf,
    /// Absolute path of the output folder, including the unique run folder if requested
    resolved_output_path: PathBuf,
}

impl ExecutionContext {
    /// Build a context from a configuration, or from a key when no configuration is given.
    ///
    /// A configuration always wins over the key. Fails with
    /// [`Error::ConfigurationMissing`] when neither is provided.
    pub fn new(config: Option<ExecutionContextConfig>, key: Option<&str>) -> Result<Self> {
        Self::with_sink(config, key, Arc::new(StdoutSink))
    }

    pub fn from_key(key: &str) -> Result<Self> {
        Self::new(None, Some(key))
    }

    pub fn from_config(config: ExecutionContextConfig) -> Result<Self> {
        Self::new(Some(config), None)
    }

    /// Same as [`ExecutionContext::new`], with the owned logger writing to `sink`.
    pub fn with_sink(
        config: Option<ExecutionContextConfig>,
        key: Option<&str>,
        sink: Arc<dyn OutputSink>,
    ) -> Result<Self> {
        let logger = StyledLogger::with_sink(false, sink);

        let config = match (config, key) {
            (Some(config), _) => config,
            (None, Some(key)) if !key.is_empty() => ExecutionContextConfig::with_key(key),
            _ => {
                // The logger is still disabled here, the log facade is what surfaces it
                logger.write_error("You need to specify a configuration or a key");
                error!("You need to specify a configuration or a key");
                return Err(Error::ConfigurationMissing);
            }
        };

        let resolved_config_path = resolve_absolute(&config.config_folder_path)?;
        let output_folder = resolve_absolute(&config.output_folder_path)?;
        let resolved_output_path = if config.ensure_unique_output_folder {
            output_folder.join(unique_folder_name(Utc::now()))
        } else {
            output_folder
        };

        // Path announcements go through the error style
        logger.write_error(&format!(
            "Ensuring config path: {}",
            resolved_config_path.display()
        ));
        ensure_folder(&resolved_config_path)?;
        logger.write_error(&format!(
            "Ensuring output path: {}",
            resolved_output_path.display()
        ));
        ensure_folder(&resolved_output_path)?;

        debug!(
            "Execution context '{}' ready (config: {}, output: {})",
            config.key,
            resolved_config_path.display(),
            resolved_output_path.display()
        );

        Ok(ExecutionContext {
            config,
            logger,
            resolved_config_path,
            resolved_output_path,
        })
    }

    pub fn configuration(&self) -> &ExecutionContextConfig {
        &self.config
    }

    pub fn key(&self) -> &str {
        &self.config.key
    }

    pub fn resolved_config_path(&self) -> &Path {
        &self.resolved_config_path
    }

    pub fn resolved_output_path(&self) -> &Path {
        &self.resolved_output_path
    }

    /// Path of `file_name` inside the config folder. The file does not need to exist.
    pub fn configuration_file_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.resolved_config_path.join(file_name)
    }

    /// Path of `file_name` inside the output folder. The file does not need to exist.
    pub fn output_file_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.resolved_output_path.join(file_name)
    }
}

impl Logging for ExecutionContext {
    fn logger(&self) -> &StyledLogger {
        &self.logger
    }

    fn set_logging(&mut self, enabled: bool) {
        self.logger.set_enabled(enabled);
    }
}
