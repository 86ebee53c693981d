//! Construction collaborator: resolves logging options into an open `Logger`
//!
//! The logger core never touches paths or configuration; this builder owns
//! the file-open mechanics and hands the core an already-resolved
//! `{threshold, file-or-none, console}` triple.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::level::LogLevel;
use crate::logger::Logger;

/// Errors that can occur while resolving logger options.
///
/// These are configuration errors, surfaced immediately at construction
/// time; the logger itself never returns them.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type OptionsResult<T> = Result<T, OptionsError>;

/// Options for constructing a [`Logger`].
///
/// Defaults: level `Debug` (0), stdout echo off, no log file.
///
/// # Example
///
/// ```no_run
/// use splog::LoggerOptions;
///
/// let logger = LoggerOptions::new()
///     .set_log_level(2)
///     .enable_stdout_logging(true)
///     .set_log_file("service.log")
///     .build()
///     .expect("open log file");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerOptions {
    log_level: i32,
    stdout_logging: bool,
    log_file: PathBuf,
}

impl LoggerOptions {
    /// Create options with all defaults.
    pub fn new() -> LoggerOptions {
        LoggerOptions::default()
    }

    /// Set the minimum severity. Out-of-range values saturate into the
    /// configurable `0..=3` (Debug..Error) range.
    pub fn set_log_level(mut self, value: i32) -> Self {
        self.log_level = value.clamp(
            LogLevel::Debug.value(),
            LogLevel::Error.value(),
        );
        self
    }

    /// Enable or disable the colorized echo to stdout.
    pub fn enable_stdout_logging(mut self, enabled: bool) -> Self {
        self.stdout_logging = enabled;
        self
    }

    /// Set the log file path. An empty path means no file sink.
    pub fn set_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Resolve the options into a [`Logger`].
    ///
    /// A non-empty path is opened for append, created if absent; a failure
    /// to open is a fatal configuration error returned here, never deferred
    /// to logging time.
    pub fn build(self) -> OptionsResult<Logger> {
        let file = if self.log_file.as_os_str().is_empty() {
            None
        } else {
            Some(self.open_log_file()?)
        };
        Ok(Logger::new(self.threshold(), self.stdout_logging, file))
    }

    fn threshold(&self) -> LogLevel {
        // log_level is kept clamped to 0..=3 by set_log_level.
        match self.log_level {
            i32::MIN..=0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    fn open_log_file(&self) -> OptionsResult<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .map_err(|source| OptionsError::OpenLogFile {
                path: self.log_file.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = LoggerOptions::new();
        assert_eq!(opts.log_level, 0);
        assert!(!opts.stdout_logging);
        assert!(opts.log_file.as_os_str().is_empty());
    }

    #[test]
    fn test_log_level_saturates_into_range() {
        assert_eq!(LoggerOptions::new().set_log_level(-5).log_level, 0);
        assert_eq!(LoggerOptions::new().set_log_level(0).log_level, 0);
        assert_eq!(LoggerOptions::new().set_log_level(2).log_level, 2);
        assert_eq!(LoggerOptions::new().set_log_level(3).log_level, 3);
        assert_eq!(LoggerOptions::new().set_log_level(99).log_level, 3);
    }

    #[test]
    fn test_threshold_mapping() {
        assert_eq!(LoggerOptions::new().set_log_level(0).threshold(), LogLevel::Debug);
        assert_eq!(LoggerOptions::new().set_log_level(1).threshold(), LogLevel::Info);
        assert_eq!(LoggerOptions::new().set_log_level(2).threshold(), LogLevel::Warn);
        assert_eq!(LoggerOptions::new().set_log_level(3).threshold(), LogLevel::Error);
    }

    #[test]
    fn test_empty_path_means_no_file_sink() {
        let logger = LoggerOptions::new().build().unwrap();
        // No file to write to; must still be safe to use and close.
        logger.info("nowhere");
        logger.close();
    }

    #[test]
    fn test_build_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let logger = LoggerOptions::new().set_log_file(&path).build().unwrap();
        assert!(path.exists());
        logger.close();
    }

    #[test]
    fn test_build_fails_on_unopenable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.log");
        let err = LoggerOptions::new().set_log_file(&path).build().unwrap_err();
        match err {
            OptionsError::OpenLogFile { path: p, .. } => assert_eq!(p, path),
        }
    }

    #[test]
    fn test_options_round_trip_through_serde() {
        let opts = LoggerOptions::new()
            .set_log_level(2)
            .enable_stdout_logging(true)
            .set_log_file("svc.log");
        let json = serde_json::to_string(&opts).unwrap();
        let parsed: LoggerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.log_level, 2);
        assert!(parsed.stdout_logging);
        assert_eq!(parsed.log_file, PathBuf::from("svc.log"));
    }
}
