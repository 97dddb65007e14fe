//! Raw log line handling: the marker and the reasons a marker line can be
//! rejected.

/// Channel tag that marks a delivery-timing line.
pub const MARKER: &str = "[NetStats]";

/// Why a single marker line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("no clock token before {MARKER}")]
    MissingClock,

    #[error("bad clock token {raw:?}, expected HH:MM:SS.mmm")]
    BadClock { raw: String },

    #[error("field {name:?} not present")]
    MissingField { name: &'static str },

    #[error("field {name:?} has no value")]
    MissingValue { name: &'static str },

    #[error("field {name:?} value {raw:?} is not an integer")]
    BadValue { name: &'static str, raw: String },
}

/// Split a line at the marker into its time prefix and data segment.
///
/// Returns `None` for lines that do not mention the marker; those carry no
/// delivery timing and are skipped wholesale.
pub fn split_marker(line: &str) -> Option<(&str, &str)> {
    let at = line.find(MARKER)?;
    Some((&line[..at], &line[at + MARKER.len()..]))
}
