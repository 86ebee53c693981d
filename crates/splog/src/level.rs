//! Severity levels, the decoration table, and the emission gate

use serde::{Deserialize, Serialize};

/// ANSI reset sequence appended after every colored label.
pub const RESET: &str = "\x1b[0m";

/// Log severity, ordered `Debug < Info < Warn < Error < Fatal`.
///
/// The numeric representation matches the generic [`Logger::log`] entry
/// point: values 0..=3 select `Debug`..`Error`, 4 is `Fatal`, and anything
/// outside that range is rendered with the "UNKNOWN LEVEL" fallback
/// decoration rather than rejected.
///
/// [`Logger::log`]: crate::Logger::log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    /// Map a raw severity value to a known level, `None` if out of range.
    pub fn from_value(value: i32) -> Option<LogLevel> {
        match value {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Error),
            4 => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    /// The numeric ordinal of this level.
    pub fn value(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(decoration(self.value()).label)
    }
}

/// Label and color-control sequence associated with a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub label: &'static str,
    pub color: &'static str,
}

/// Fallback decoration for severities outside the known enumeration.
pub const UNKNOWN: Decoration = Decoration {
    label: "UNKNOWN LEVEL",
    color: "\x1b[90m",
};

/// Look up the decoration for a raw severity value.
///
/// Total over all of `i32`: out-of-range values get [`UNKNOWN`].
pub fn decoration(value: i32) -> Decoration {
    match LogLevel::from_value(value) {
        Some(LogLevel::Debug) => Decoration { label: "DEBUG", color: "\x1b[36m" },
        Some(LogLevel::Info) => Decoration { label: "INFO", color: "\x1b[34m" },
        Some(LogLevel::Warn) => Decoration { label: "WARN", color: "\x1b[93m" },
        Some(LogLevel::Error) => Decoration { label: "ERROR", color: "\x1b[91m" },
        Some(LogLevel::Fatal) => Decoration { label: "FATAL", color: "\x1b[95m" },
        None => UNKNOWN,
    }
}

/// Decide whether an event with raw severity `value` passes the gate.
///
/// `Error` and `Fatal` always pass: `fatal` carries a process-termination
/// side effect and must not be filterable, and errors are persisted
/// unconditionally. Every other value (known or not) is compared against
/// the threshold by ordinal.
pub fn should_emit(value: i32, threshold: LogLevel) -> bool {
    if value == LogLevel::Error.value() || value == LogLevel::Fatal.value() {
        return true;
    }
    value >= threshold.value()
}
