//! Stderr reporting for reversal runs.
//!
//! A successful run is silent by default; progress lines about the link
//! being collapsed appear only when verbose output is requested. The
//! `DELINK_LOG_MODE` environment variable provides a default level and
//! the CLI flags override it.

use std::env;
use std::path::Path;

/// Output verbosity for a reversal run.
///
/// Levels are ordered from least verbose (Quiet) to most verbose
/// (Verbose).
///
/// # Examples
///
/// ```
/// use delink::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress everything, including failure reports.
    Quiet,
    /// Report failures only; successful runs stay silent.
    Normal,
    /// Additionally narrate each stage of the reversal.
    Verbose,
}

impl LogLevel {
    /// Parses a level name as used by `DELINK_LOG_MODE`.
    ///
    /// Recognizes "quiet", "normal", and "verbose", ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error for any other name.
    pub fn parse(s: &str) -> Result<Self, String> {
        if s.eq_ignore_ascii_case("quiet") {
            Ok(Self::Quiet)
        } else if s.eq_ignore_ascii_case("normal") {
            Ok(Self::Normal)
        } else if s.eq_ignore_ascii_case("verbose") {
            Ok(Self::Verbose)
        } else {
            Err(format!("invalid log level: {s}"))
        }
    }
}

/// Stderr reporter for the stages of a link reversal.
///
/// The reporter speaks in terms of the operation itself: which link is
/// being reversed and where the resolved file ended up. Messages below
/// the configured level are dropped.
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a reporter with the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Announces the link about to be reversed. Verbose only.
    pub fn reversing(&self, link: &Path) {
        if self.level >= LogLevel::Verbose {
            eprintln!("reversing link: {}", link.display());
        }
    }

    /// Reports the resolved file that now occupies the link path.
    /// Verbose only.
    pub fn reversed(&self, resolved: &Path, link: &Path) {
        if self.level >= LogLevel::Verbose {
            eprintln!(
                "moved {} into place at {}",
                resolved.display(),
                link.display()
            );
        }
    }

    /// Reports a failed run. Dropped when the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("Error: {message}");
        }
    }
}

/// Builds the reporter from CLI flags and the environment.
///
/// `--verbose` wins over `--quiet`, both win over `DELINK_LOG_MODE`,
/// and an unset or unrecognized variable leaves the level at Normal.
///
/// # Examples
///
/// ```
/// use delink::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var("DELINK_LOG_MODE")
            .ok()
            .and_then(|mode| LogLevel::parse(&mode).ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}
