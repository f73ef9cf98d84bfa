//! Named loggers with per-instance emission counters.
//!
//! A `Logger` holds a name fixed at construction and counts how many lines
//! it has emitted. The registry owning the loggers is created by the process
//! entry point and passed down explicitly, so independent instances can
//! coexist (notably in tests).

use std::collections::BTreeMap;

/// A named logger. Each `log` call bumps the counter and prints one line to
/// stdout in the form `[<name>] <message> count:<count>`.
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    count: u64,
}

impl Logger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of lines emitted so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Emits one line to stdout. The message is opaque text; the counter is
    /// bumped before the line is rendered, so the first call prints `count:1`.
    /// The `&mut self` borrow keeps increment and emission inseparable.
    pub fn log(&mut self, message: &str) {
        let line = self.next_line(message);
        println!("{line}");
    }

    fn next_line(&mut self, message: &str) -> String {
        self.count += 1;
        format!("[{}] {} count:{}", self.name, message, self.count)
    }
}

/// Registry of named loggers, owned by the entry point and passed down.
///
/// Lookups create a logger on first use (counter at 0) and return the same
/// instance afterwards, so counts accumulate per name for the process
/// lifetime.
#[derive(Debug)]
pub struct LoggerRegistry {
    default_name: String,
    loggers: BTreeMap<String, Logger>,
}

impl LoggerRegistry {
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            default_name: default_name.into(),
            loggers: BTreeMap::new(),
        }
    }

    /// Returns the logger for `name`, creating it on first use.
    pub fn logger(&mut self, name: &str) -> &mut Logger {
        self.loggers
            .entry(name.to_string())
            .or_insert_with(|| Logger::new(name))
    }

    /// The shared default-named logger (name comes from configuration).
    pub fn default_logger(&mut self) -> &mut Logger {
        let name = self.default_name.clone();
        self.logger(&name)
    }
}
