//! Per-simulation series construction.
//!
//! Each simulation is processed in isolation — open its log, extract, sort
//! and shift — and the results come back as explicit values for the caller to
//! compose, with no accumulator state shared across simulations.

use crate::Error;
use crate::chart::spec::{ChartSpec, SimulationSpec};
use crate::log;
use crate::series::{self, NormalizedSeries};
use std::path::Path;
use tracing::{info, warn};

/// One simulation's normalized series, keyed for the legend.
#[derive(Debug, Clone)]
pub struct LabeledSeries {
    pub label: String,
    pub bundles: NormalizedSeries,
    /// Status-report companion series, shifted by the bundles' origin.
    /// Present only when the spec asks for it and the log contained any.
    pub status_reports: Option<NormalizedSeries>,
}

/// Build the series for every simulation in the spec.
///
/// A simulation whose log yields no delivery events is reported and skipped;
/// a chart left with no series at all is an error.
pub fn build_series(spec: &ChartSpec, log_dir: &Path) -> Result<Vec<LabeledSeries>, Error> {
    let mut out = Vec::new();
    for sim in &spec.simulations {
        if let Some(series) = build_one(spec, log_dir, sim)? {
            out.push(series);
        }
    }
    if out.is_empty() {
        return Err(Error::EmptyChart {
            title: spec.title.clone(),
        });
    }
    Ok(out)
}

fn build_one(
    spec: &ChartSpec,
    log_dir: &Path,
    sim: &SimulationSpec,
) -> Result<Option<LabeledSeries>, Error> {
    let path = spec.log_path(log_dir, sim);
    let extraction = log::extract_file(&path, spec.status_report_payload_bytes)?;

    if extraction.delivered.is_empty() {
        warn!(
            sim = %sim.label,
            path = %path.display(),
            "log contains no delivery events, skipping simulation"
        );
        return Ok(None);
    }

    let pairs: Vec<(f64, i64)> = extraction
        .delivered
        .iter()
        .map(|ev| (ev.arrival_secs, ev.delay_ms))
        .collect();
    let bundles = series::normalize(&pairs, None, spec.max_gap_ms())?;

    let status_reports = if spec.render_status_reports && !extraction.status_reports.is_empty() {
        let pairs: Vec<(f64, i64)> = extraction
            .status_reports
            .iter()
            .map(|ev| (ev.arrival_secs, ev.delay_ms))
            .collect();
        Some(series::normalize(
            &pairs,
            Some(bundles.min_arrival_ms),
            spec.max_gap_ms(),
        )?)
    } else {
        None
    };

    info!(
        sim = %sim.label,
        bundles = bundles.points(),
        status_reports = status_reports.as_ref().map(|s| s.points()).unwrap_or(0),
        "built simulation series"
    );
    Ok(Some(LabeledSeries {
        label: sim.label.clone(),
        bundles,
        status_reports,
    }))
}
