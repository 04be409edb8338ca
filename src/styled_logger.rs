use std::fmt;
use std::sync::Arc;

use console::Style;

use crate::sink::{OutputSink, StdoutSink};

/// 256-color code for the gray used by [`LogStyle::Default`].
pub const GRAY_U8_COLOR_CODE: u8 = 245;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogStyle {
    #[default]
    Default,
    Start,
    Warning,
    Error,
    Success,
}

impl LogStyle {
    pub fn style(&self) -> Style {
        match self {
            LogStyle::Start => Style::new().white().bold(),
            LogStyle::Warning => Style::new().yellow().bold(),
            LogStyle::Error => Style::new().red().bold(),
            LogStyle::Success => Style::new().green().bold(),
            LogStyle::Default => Style::new().color256(GRAY_U8_COLOR_CODE),
        }
    }
}

/// Console logger that only prints while enabled.
///
/// Every call is a direct synchronous write to the sink, or nothing at all when the
/// logger is disabled. Loggers start disabled.
#[derive(Clone)]
pub struct StyledLogger {
    enabled: bool,
    sink: Arc<dyn OutputSink>,
}

impl StyledLogger {
    pub fn new(enabled: bool) -> Self {
        Self::with_sink(enabled, Arc::new(StdoutSink))
    }

    pub fn with_sink(enabled: bool, sink: Arc<dyn OutputSink>) -> Self {
        StyledLogger { enabled, sink }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn write(&self, message: &str, style: LogStyle) {
        if !self.enabled {
            return;
        }
        let line = style.style().apply_to(message);
        self.sink.write_line(&line.to_string());
    }

    pub fn flush(&self) {
        self.sink.flush();
    }

    pub fn write_default(&self, message: &str) {
        self.write(message, LogStyle::Default);
    }

    pub fn write_start(&self, message: &str) {
        self.write(message, LogStyle::Start);
    }

    pub fn write_warning(&self, message: &str) {
        self.write(message, LogStyle::Warning);
    }

    pub fn write_error(&self, message: &str) {
        self.write(message, LogStyle::Error);
    }

    pub fn write_success(&self, message: &str) {
        self.write(message, LogStyle::Success);
    }
}

impl Default for StyledLogger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for StyledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledLogger")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Something that owns a [`StyledLogger`] shared with its callers.
pub trait Logging {
    fn logger(&self) -> &StyledLogger;

    fn set_logging(&mut self, enabled: bool);
}
