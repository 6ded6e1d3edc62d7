//! Output formatting for the CLI.

use console::style;
use decibel_commerce::{Notifier, Severity};

/// Output handler for CLI messages.
///
/// Also the CLI's [`Notifier`]: engine outcomes land in the terminal
/// with the same styling as the CLI's own messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("i").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("ok").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("!").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("x").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            eprintln!("{} {}", style("-").dim(), style(msg).dim());
        }
    }

    /// Print a section header.
    pub fn header(&self, msg: &str) {
        println!("{}", style(msg).bold().underlined());
    }

    /// Print an aligned key/value line.
    pub fn kv(&self, key: &str, value: &str) {
        println!("  {:<14} {}", style(key).dim(), value);
    }

    /// Print a blank line.
    pub fn blank(&self) {
        println!();
    }
}

impl Notifier for Output {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => self.info(message),
            Severity::Success => self.success(message),
            Severity::Warning => self.warn(message),
            Severity::Error => self.error(message),
        }
    }
}
