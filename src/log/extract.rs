//! Log ingestion: filter `[NetStats]` lines into delivery event buckets.

use super::clock;
use super::event::BundleEvent;
use super::fields::{DELAY_FIELD, FieldList, PAYLOAD_FIELD};
use super::line::{self, LineError};
use crate::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Events extracted from one simulation log, partitioned by payload size.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    /// Data bundles that arrived (or were deleted in transit).
    pub delivered: Vec<BundleEvent>,
    /// Pseudo-events whose payload matched the status-report size constant.
    pub status_reports: Vec<BundleEvent>,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.delivered.len() + self.status_reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty() && self.status_reports.is_empty()
    }
}

/// Parse failure at a specific (1-based) line of the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ExtractError {
    pub line: usize,
    #[source]
    pub source: LineError,
}

/// Parse one marker line's prefix and data segment into an event.
///
/// Returns `Ok(None)` when the header is not `Bundle Arrived` or
/// `Bundle Deleted`; `Sent`/`Received` lines (and anything else on the
/// channel) are not deliveries and are ignored.
pub fn parse_marker_line(prefix: &str, data: &str) -> Result<Option<BundleEvent>, LineError> {
    let fields = FieldList::split(data);
    match fields.header() {
        Some(("Bundle", "Arrived" | "Deleted")) => {}
        _ => return Ok(None),
    }

    let arrival_secs = clock::prefix_seconds(prefix)?;
    let delay_ms = fields.named_i64(DELAY_FIELD)?;
    let payload_bytes = fields.named_u64(PAYLOAD_FIELD)?;
    Ok(Some(BundleEvent {
        arrival_secs,
        delay_ms,
        payload_bytes,
    }))
}

/// Extract delivery events from a sequence of lines.
///
/// `status_report_payload` routes events with exactly that payload size into
/// the status-report bucket; `None` leaves everything in `delivered`. A
/// malformed marker line fails the whole extraction, there is no per-line
/// recovery.
pub fn extract_lines<'a, I>(
    lines: I,
    status_report_payload: Option<u64>,
) -> Result<Extraction, ExtractError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Extraction::default();
    for (idx, raw) in lines.into_iter().enumerate() {
        let Some((prefix, data)) = line::split_marker(raw) else {
            continue;
        };
        let event = parse_marker_line(prefix, data).map_err(|source| ExtractError {
            line: idx + 1,
            source,
        })?;
        let Some(event) = event else {
            continue;
        };
        trace!(
            arrival_secs = event.arrival_secs,
            delay_ms = event.delay_ms,
            payload_bytes = event.payload_bytes,
            "extracted delivery event"
        );
        if status_report_payload == Some(event.payload_bytes) {
            out.status_reports.push(event);
        } else {
            out.delivered.push(event);
        }
    }
    Ok(out)
}

/// Extract delivery events from a log file on disk.
///
/// The file is opened, fully consumed, and closed before returning.
pub fn extract_file(
    path: &Path,
    status_report_payload: Option<u64>,
) -> Result<Extraction, Error> {
    let file = File::open(path).map_err(|source| Error::OpenLog {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for read in BufReader::new(file).lines() {
        lines.push(read.map_err(|source| Error::ReadLog {
            path: path.to_path_buf(),
            source,
        })?);
    }

    let out = extract_lines(lines.iter().map(String::as_str), status_report_payload).map_err(
        |source| Error::Line {
            path: path.to_path_buf(),
            source,
        },
    )?;

    debug!(
        path = %path.display(),
        delivered = out.delivered.len(),
        status_reports = out.status_reports.len(),
        "extracted log file"
    );
    Ok(out)
}
