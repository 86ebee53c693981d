//! The `Logger` entity and its dual-sink write path
//!
//! Every call runs synchronously through gate, renderer, and sink writer on
//! the calling thread. The sink-writer step holds a single mutex so that
//! concurrent callers never interleave bytes within a line and a racing
//! `close` never frees the file handle out from under a write.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, Write};
use std::panic::Location;

use parking_lot::Mutex;

use crate::level::{should_emit, LogLevel};
use crate::render::{render, CallerFrame};

/// A leveled logger writing a colorized line to stdout and an escape-free
/// copy of the same line to an optional append-only file.
///
/// Construction is normally done through [`LoggerOptions`], which resolves
/// the file path into an open handle; the logger itself only consumes the
/// already-resolved `{threshold, file-or-none, console}` triple.
///
/// The threshold is immutable for the lifetime of the logger. The file sink
/// is exclusively owned and released by [`Logger::close`]; it is never
/// reopened or rotated here.
///
/// [`LoggerOptions`]: crate::LoggerOptions
#[derive(Debug)]
pub struct Logger {
    threshold: LogLevel,
    console: bool,
    sink: Mutex<Option<File>>,
}

impl Logger {
    /// Create a logger from an already-resolved configuration triple.
    pub fn new(threshold: LogLevel, console: bool, file: Option<File>) -> Logger {
        Logger {
            threshold,
            console,
            sink: Mutex::new(file),
        }
    }

    /// A logger with no sinks at all.
    ///
    /// Every call gates and renders as usual but writes nowhere. Useful as
    /// a silent stand-in for tests and for hosts that want logging off.
    pub fn disabled() -> Logger {
        Logger::new(LogLevel::Debug, false, None)
    }

    /// The configured minimum severity.
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Generic entry point: log `message` at a raw severity value.
    ///
    /// Values 0..=4 select the known levels; anything else is rendered with
    /// the "UNKNOWN LEVEL" decoration. Never panics on out-of-range values.
    /// A value of 4 renders with the `FATAL` decoration but does not
    /// terminate the process; only [`Logger::fatal`] does that.
    #[track_caller]
    pub fn log(&self, value: i32, message: impl Display) {
        let frame = CallerFrame::from_location(Location::caller());
        self.emit(value, &frame, &message.to_string());
    }

    /// Log at `Debug` severity, subject to the threshold gate.
    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        let frame = CallerFrame::from_location(Location::caller());
        self.emit(LogLevel::Debug.value(), &frame, &message.to_string());
    }

    /// Log at `Info` severity, subject to the threshold gate.
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        let frame = CallerFrame::from_location(Location::caller());
        self.emit(LogLevel::Info.value(), &frame, &message.to_string());
    }

    /// Log at `Warn` severity, subject to the threshold gate.
    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        let frame = CallerFrame::from_location(Location::caller());
        self.emit(LogLevel::Warn.value(), &frame, &message.to_string());
    }

    /// Log at `Error` severity. Emitted unconditionally, regardless of the
    /// threshold.
    #[track_caller]
    pub fn error(&self, message: impl Display) {
        let frame = CallerFrame::from_location(Location::caller());
        self.emit(LogLevel::Error.value(), &frame, &message.to_string());
    }

    /// Log at `Fatal` severity, then terminate the process with exit
    /// status 1.
    ///
    /// Emitted unconditionally. Termination happens strictly after both
    /// sink writes have completed; it is the entire point of this method,
    /// not an error path.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) -> ! {
        let frame = CallerFrame::from_location(Location::caller());
        self.emit(LogLevel::Fatal.value(), &frame, &message.to_string());
        std::process::exit(1);
    }

    /// Release the file sink. Idempotent; safe to call concurrently with
    /// in-flight writes.
    ///
    /// Subsequent logging calls skip the file silently; the console echo,
    /// if enabled, keeps working.
    pub fn close(&self) {
        let mut sink = self.sink.lock();
        // Dropping the handle flushes and closes it.
        *sink = None;
    }

    /// Gate, render, and write one event. Both sink writes happen under one
    /// lock acquisition; write errors are discarded so logging can never
    /// crash the host.
    fn emit(&self, value: i32, frame: &CallerFrame, message: &str) {
        if !should_emit(value, self.threshold) {
            return;
        }
        let rendered = render(value, frame, message);

        let mut sink = self.sink.lock();
        if self.console {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{}", rendered.decorated);
        }
        if let Some(file) = sink.as_mut() {
            let _ = writeln!(file, "{}", rendered.plain);
            let _ = file.flush();
        }
    }
}

/// Log at a raw severity value, print-concatenating any number of values.
///
/// Arguments after the severity are joined with their `Display` form and no
/// injected separators, mirroring print-concatenate semantics:
/// `splog!(logger, 2, "disk", " ", "low")` logs the message `disk low`.
#[macro_export]
macro_rules! splog {
    ($logger:expr, $value:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut __message = ::std::string::String::new();
        $(
            __message.push_str(&::std::string::ToString::to_string(&$arg));
        )*
        $logger.log($value, __message)
    }};
}

/// Log at `Debug` severity, print-concatenating any number of values.
#[macro_export]
macro_rules! splog_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut __message = ::std::string::String::new();
        $(
            __message.push_str(&::std::string::ToString::to_string(&$arg));
        )*
        $logger.debug(__message)
    }};
}

/// Log at `Info` severity, print-concatenating any number of values.
#[macro_export]
macro_rules! splog_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut __message = ::std::string::String::new();
        $(
            __message.push_str(&::std::string::ToString::to_string(&$arg));
        )*
        $logger.info(__message)
    }};
}

/// Log at `Warn` severity, print-concatenating any number of values.
#[macro_export]
macro_rules! splog_warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut __message = ::std::string::String::new();
        $(
            __message.push_str(&::std::string::ToString::to_string(&$arg));
        )*
        $logger.warn(__message)
    }};
}

/// Log at `Error` severity, print-concatenating any number of values.
#[macro_export]
macro_rules! splog_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut __message = ::std::string::String::new();
        $(
            __message.push_str(&::std::string::ToString::to_string(&$arg));
        )*
        $logger.error(__message)
    }};
}

/// Log at `Fatal` severity, print-concatenating any number of values, then
/// terminate the process.
#[macro_export]
macro_rules! splog_fatal {
    ($logger:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut __message = ::std::string::String::new();
        $(
            __message.push_str(&::std::string::ToString::to_string(&$arg));
        )*
        $logger.fatal(__message)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn file_logger(threshold: LogLevel) -> (Logger, tempfile::NamedTempFile) {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let file = tmp.reopen().unwrap();
        (Logger::new(threshold, false, Some(file)), tmp)
    }

    fn read_lines(tmp: &tempfile::NamedTempFile) -> Vec<String> {
        let mut contents = String::new();
        tmp.reopen().unwrap().read_to_string(&mut contents).unwrap();
        contents.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_disabled_logger_never_panics() {
        let logger = Logger::disabled();
        logger.debug("a");
        logger.info("b");
        logger.warn("c");
        logger.error("d");
        logger.log(99, "e");
        logger.close();
    }

    #[test]
    fn test_gated_event_leaves_file_untouched() {
        let (logger, tmp) = file_logger(LogLevel::Warn);
        logger.info("hello");
        assert!(read_lines(&tmp).is_empty());
    }

    #[test]
    fn test_emitted_event_appends_plain_line() {
        let (logger, tmp) = file_logger(LogLevel::Debug);
        logger.warn("disk low");
        let lines = read_lines(&tmp);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN["));
        assert!(lines[0].ends_with("] disk low"));
        assert!(!lines[0].contains('\x1b'));
    }

    #[test]
    fn test_error_bypasses_threshold() {
        let (logger, tmp) = file_logger(LogLevel::Fatal);
        logger.error("boom");
        assert_eq!(read_lines(&tmp).len(), 1);
    }

    #[test]
    fn test_close_is_idempotent_and_stops_file_writes() {
        let (logger, tmp) = file_logger(LogLevel::Debug);
        logger.info("before");
        logger.close();
        logger.close();
        logger.info("after");
        let lines = read_lines(&tmp);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("] before"));
    }

    #[test]
    fn test_append_preserves_existing_content() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let append = || {
            std::fs::OpenOptions::new()
                .append(true)
                .open(tmp.path())
                .unwrap()
        };
        let logger = Logger::new(LogLevel::Debug, false, Some(append()));
        logger.info("first");
        logger.close();
        let logger = Logger::new(LogLevel::Debug, false, Some(append()));
        logger.info("second");
        logger.close();
        let lines = read_lines(&tmp);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
    }

    #[test]
    fn test_concat_macros_join_without_separators() {
        let (logger, tmp) = file_logger(LogLevel::Debug);
        splog_warn!(logger, "disk", " ", "low");
        splog_info!(logger, "answer=", 42);
        splog_info!(logger);
        let lines = read_lines(&tmp);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("] disk low"));
        assert!(lines[1].ends_with("] answer=42"));
        assert!(lines[2].ends_with("] "));
    }

    #[test]
    fn test_generic_macro_with_raw_severity() {
        let (logger, tmp) = file_logger(LogLevel::Debug);
        splog!(logger, 7, "x");
        let lines = read_lines(&tmp);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("UNKNOWN LEVEL["));
    }
}
