//! splog
//!
//! A leveled, dual-sink logger for embedding inside other services. Each
//! event is gated against a configured minimum severity, decorated with a
//! severity color, label, and the caller's file/line, then written twice:
//! a colorized line to stdout (optional) and an escape-free copy of the
//! same line to an append-only file (optional).
//!
//! Everything runs synchronously on the calling thread; writes to the two
//! sinks are serialized per logger, and sink failures are silently
//! discarded so logging can never crash the host.
//!
//! ```no_run
//! use splog::{splog_warn, LoggerOptions};
//!
//! let logger = LoggerOptions::new()
//!     .set_log_level(1)
//!     .enable_stdout_logging(true)
//!     .set_log_file("service.log")
//!     .build()?;
//!
//! logger.info("service started");
//! splog_warn!(logger, "disk ", 93, "% full");
//! logger.close();
//! # Ok::<(), splog::OptionsError>(())
//! ```

pub mod level;
pub mod logger;
pub mod options;
pub mod render;

// Re-export commonly used types
pub use level::{decoration, should_emit, Decoration, LogLevel};
pub use logger::Logger;
pub use options::{LoggerOptions, OptionsError, OptionsResult};
pub use render::{strip_ansi, CallerFrame, Rendered};
