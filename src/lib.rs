//! Run-scoped config and output folders with a styled console logger.
//!
//! An [`ExecutionContext`] resolves a configuration folder and an output folder
//! (optionally unique per run), creates them, and hands out file paths inside them.

mod error;
mod execution_context;
mod local_logger;
mod prelude;
mod sink;
mod styled_logger;

pub use error::{Error, Result};
pub use execution_context::helpers::folder::unique_folder_name;
pub use execution_context::{
    DEFAULT_CONFIG_FOLDER, DEFAULT_OUTPUT_FOLDER, ExecutionContext, ExecutionContextConfig,
};
pub use local_logger::{ConsoleLogger, LOG_LEVEL_ENV, get_console_logger, init_console_logger};
pub use sink::{MemorySink, OutputSink, StderrSink, StdoutSink};
pub use styled_logger::{GRAY_U8_COLOR_CODE, LogStyle, Logging, StyledLogger};
