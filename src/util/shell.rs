//! Centralized shell output for the CLI.
//!
//! All user-facing status reporting goes through [`Shell`] so that commands
//! never manage alignment or colors themselves. Status lines are written to
//! stderr; stdout is reserved for replayed toolchain output.

use std::fmt::Display;
use std::io::{self, IsTerminal};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Right-alignment width for status prefixes, matching cargo's own output.
const STATUS_WIDTH: usize = 12;

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Semantic status of a line; the shell owns the text and color it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success (green)
    Finished,
    Removed,

    // In progress (cyan)
    Building,
    Installing,

    // Diagnostics (yellow / red)
    Warning,
    Error,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Finished => "Finished",
            Status::Removed => "Removed",
            Status::Building => "Building",
            Status::Installing => "Installing",
            Status::Warning => "Warning",
            Status::Error => "error",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            // bold green
            Status::Finished | Status::Removed => "\x1b[1;32m",
            // bold cyan
            Status::Building | Status::Installing => "\x1b[1;36m",
            // bold yellow
            Status::Warning => "\x1b[1;33m",
            // bold red
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// Central shell for all CLI output.
#[derive(Debug)]
pub struct Shell {
    verbose: bool,
    use_color: bool,
}

impl Shell {
    pub fn new(verbose: bool, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell { verbose, use_color }
    }

    /// Print a `{status:>12} {message}` line to stderr.
    pub fn status(&self, status: Status, msg: impl Display) {
        let prefix = self.format_status(status);
        eprintln!("{} {}", prefix, msg);
    }

    pub fn warn(&self, msg: impl Display) {
        self.status(Status::Warning, msg);
    }

    pub fn error(&self, msg: impl Display) {
        self.status(Status::Error, msg);
    }

    /// Create a spinner shown while an external process runs with captured
    /// output.
    ///
    /// Hidden when stderr is not a terminal and in verbose mode, where the
    /// echoed command lines already show progress.
    pub fn spinner(&self, msg: impl Display) -> ProgressBar {
        if self.verbose || !io::stderr().is_terminal() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();

        if self.use_color {
            let color = status.color_code();
            format!("{}{:>width$}\x1b[0m", color, text, width = STATUS_WIDTH)
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(false, ColorChoice::Auto)
    }
}
