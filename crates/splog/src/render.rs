//! Event rendering: timestamping, caller frames, and ANSI stripping
//!
//! Every log call produces two textual forms of the same logical line: a
//! decorated one (color sequences around the label) for the console, and a
//! plain one with every escape sequence removed for the durable file record.

use std::panic::Location;
use std::path::Path;

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::level::{decoration, RESET};

/// Matches a complete ANSI/VT control escape: ESC, `[`, digits/semicolons,
/// one trailing letter.
static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap());

/// Remove every ANSI escape sequence from `input`.
///
/// Pure textual transform, applied uniformly to the whole decorated line so
/// escape-like bytes inside message arguments are stripped too.
pub fn strip_ansi(input: &str) -> String {
    ANSI_ESCAPE.replace_all(input, "").into_owned()
}

/// Source location of the code that invoked a logging call.
///
/// Holds the file basename only; the directory is stripped at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerFrame {
    pub file: String,
    pub line: u32,
}

impl CallerFrame {
    /// Capture the frame from a [`Location`] produced by `#[track_caller]`.
    pub fn from_location(location: &Location<'_>) -> CallerFrame {
        let file = Path::new(location.file())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        CallerFrame {
            file,
            line: location.line(),
        }
    }

    /// Degraded frame for environments where no location is available.
    pub fn unknown() -> CallerFrame {
        CallerFrame {
            file: String::new(),
            line: 0,
        }
    }
}

/// The two renderings of one logical log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Colorized form for the interactive sink.
    pub decorated: String,
    /// Escape-free form for the file record.
    pub plain: String,
}

/// Render a log event into its decorated and plain forms.
///
/// Line shape: `[<timestamp>] <LABEL>[<file>:<line>] <message>`, with the
/// label wrapped in its color sequence in the decorated form. The plain form
/// is derived by stripping escapes from the decorated one, so the two always
/// carry identical informational content.
pub fn render(value: i32, frame: &CallerFrame, message: &str) -> Rendered {
    let deco = decoration(value);
    let decorated = format!(
        "[{}] {}{}{}[{}:{}] {}",
        timestamp(),
        deco.color,
        deco.label,
        RESET,
        frame.file,
        frame.line,
        message,
    );
    let plain = strip_ansi(&decorated);
    Rendered { decorated, plain }
}

/// Local wall-clock timestamp with a UTC-offset suffix,
/// e.g. `2026-08-28 14:03:51 UTC+0100`.
fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S UTC%z").to_string()
}
