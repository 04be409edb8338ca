use std::env;
use std::sync::Arc;

use log::Log;
use simplelog::{CombinedLogger, SharedLogger};

use crate::sink::{OutputSink, StderrSink};
use crate::styled_logger::{LogStyle, StyledLogger};

/// Environment variable holding the level filter of the console logger.
pub const LOG_LEVEL_ENV: &str = "RUN_CONTEXT_LOG";

/// `log` backend printing records with the [`StyledLogger`] styles.
pub struct ConsoleLogger {
    log_level: log::LevelFilter,
    logger: StyledLogger,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StderrSink))
    }

    pub fn with_sink(sink: Arc<dyn OutputSink>) -> Self {
        let log_level = env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|log_level| log_level.parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Info);

        ConsoleLogger {
            log_level,
            logger: StyledLogger::with_sink(true, sink),
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

fn style_for_level(level: log::Level) -> LogStyle {
    match level {
        log::Level::Error => LogStyle::Error,
        log::Level::Warn => LogStyle::Warning,
        log::Level::Info => LogStyle::Start,
        log::Level::Debug | log::Level::Trace => LogStyle::Default,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.log_level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = match record.level() {
            log::Level::Trace => format!("[TRACE::{}] {}", record.target(), record.args()),
            _ => record.args().to_string(),
        };
        self.logger.write(&message, style_for_level(record.level()));
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

impl SharedLogger for ConsoleLogger {
    fn level(&self) -> log::LevelFilter {
        self.log_level
    }

    fn config(&self) -> Option<&simplelog::Config> {
        None
    }

    fn as_log(self: Box<Self>) -> Box<dyn Log> {
        Box::new(*self)
    }
}

pub fn get_console_logger() -> Box<dyn SharedLogger> {
    Box::new(ConsoleLogger::new())
}

/// Install the console logger as the global `log` backend.
pub fn init_console_logger() -> anyhow::Result<()> {
    let logger = get_console_logger();
    CombinedLogger::init(vec![logger])?;
    Ok(())
}
