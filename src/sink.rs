use std::io::Write;
use std::sync::{Arc, Mutex};

/// Destination for rendered log lines.
///
/// The logger hands over one fully styled line per call and expects the sink to
/// terminate it.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str);

    fn flush(&self) {}
}

/// Writes to the process standard output.
///
/// Panics if stdout cannot be written to, like `println!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Writes to the process standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl OutputSink for StderrSink {
    fn write_line(&self, line: &str) {
        eprintln!("{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Keeps every written line in memory.
///
/// Clones share the same buffer, so a handle can be kept to inspect what a logger wrote.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, styling included.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Lines written so far with ANSI escape codes stripped.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines()
            .iter()
            .map(|line| console::strip_ansi_codes(line).into_owned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(line.to_owned());
    }
}
