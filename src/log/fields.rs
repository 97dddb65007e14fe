//! Delimited data-segment parsing.
//!
//! The data segment after the marker reads like:
//!
//! ```text
//! Bundle Arrived: from:b::to:a::creationTime:227462327::seqNum:0; Time (ms) since creation: 117; Size of bundle payload (bytes):88
//! ```
//!
//! Split on every `:` or `;` it becomes a flat field list. Sub-fields are
//! looked up by name and their value is the field that follows, so the layout
//! of the leading bundle info does not have to be known.

use super::line::LineError;

/// Name of the delay sub-field.
pub const DELAY_FIELD: &str = "Time (ms) since creation";
/// Name of the payload-size sub-field.
pub const PAYLOAD_FIELD: &str = "Size of bundle payload (bytes)";

/// Flat field list of one line's data segment.
#[derive(Debug)]
pub struct FieldList<'a> {
    fields: Vec<&'a str>,
}

impl<'a> FieldList<'a> {
    pub fn split(data: &'a str) -> Self {
        Self {
            fields: data.split([':', ';']).collect(),
        }
    }

    /// Two-word header of the first field, e.g. `("Bundle", "Arrived")`.
    pub fn header(&self) -> Option<(&'a str, &'a str)> {
        let mut words = self.fields.first()?.split_whitespace();
        Some((words.next()?, words.next()?))
    }

    /// Signed integer value following the named sub-field.
    pub fn named_i64(&self, name: &'static str) -> Result<i64, LineError> {
        let raw = self.named_raw(name)?;
        raw.trim()
            .parse()
            .map_err(|_| LineError::BadValue {
                name,
                raw: raw.to_string(),
            })
    }

    /// Unsigned integer value following the named sub-field.
    pub fn named_u64(&self, name: &'static str) -> Result<u64, LineError> {
        let raw = self.named_raw(name)?;
        raw.trim()
            .parse()
            .map_err(|_| LineError::BadValue {
                name,
                raw: raw.to_string(),
            })
    }

    fn named_raw(&self, name: &'static str) -> Result<&'a str, LineError> {
        let at = self
            .fields
            .iter()
            .position(|f| f.trim() == name)
            .ok_or(LineError::MissingField { name })?;
        self.fields
            .get(at + 1)
            .copied()
            .ok_or(LineError::MissingValue { name })
    }
}
