//! Testbed wall-clock parsing.

use super::line::LineError;

/// Parse the clock token out of a line's time prefix.
///
/// The clock is the second whitespace-delimited word of the prefix, e.g.
/// `2023-04-12 10:00:05.250 ` yields `10:00:05.250`.
pub fn prefix_seconds(prefix: &str) -> Result<f64, LineError> {
    let token = prefix
        .split_whitespace()
        .nth(1)
        .ok_or(LineError::MissingClock)?;
    clock_seconds(token)
}

/// Convert an `HH:MM:SS.mmm` clock token to seconds.
///
/// The hour component is ignored: the result is
/// `minutes * 60 + seconds + millis / 1000`, same as the testbed's existing
/// analysis scripts. Testbed runs stay within a single hour.
pub fn clock_seconds(token: &str) -> Result<f64, LineError> {
    let bad = || LineError::BadClock {
        raw: token.to_string(),
    };

    let (hms, millis) = token.split_once('.').ok_or_else(bad)?;
    let mut words = hms.split(':');
    let _hours: u32 = words.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let minutes: u32 = words.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let seconds: u32 = words.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    if words.next().is_some() {
        return Err(bad());
    }
    let millis: u32 = millis.parse().map_err(|_| bad())?;

    Ok(f64::from(minutes) * 60.0 + f64::from(seconds) + f64::from(millis) / 1000.0)
}
