//! Extracted per-bundle timing events.

/// One delivery (or in-transit deletion) record from a `[NetStats]` line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleEvent {
    /// Arrival wall clock in seconds (see [`crate::log::clock_seconds`]).
    pub arrival_secs: f64,
    /// Delay from bundle creation to this event, in milliseconds.
    pub delay_ms: i64,
    /// Payload size; used to tell status reports from data bundles.
    pub payload_bytes: u64,
}
