//! Simulation log ingestion.
//!
//! Testbed nodes report delivery timings on the `[NetStats]` channel; this
//! module filters those lines out of a log file and turns them into
//! [`BundleEvent`] values, partitioned into data bundles and status reports.

mod clock;
mod event;
mod extract;
mod fields;
mod line;

pub use clock::{clock_seconds, prefix_seconds};
pub use event::BundleEvent;
pub use extract::{ExtractError, Extraction, extract_file, extract_lines, parse_marker_line};
pub use fields::{DELAY_FIELD, FieldList, PAYLOAD_FIELD};
pub use line::{LineError, MARKER, split_marker};
