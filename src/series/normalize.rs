//! Sort, zero-shift, and gap-mark a series of delivery events.

use crate::Error;
use std::cmp::Ordering;

/// Gap between consecutive arrivals (ms) above which the plotted line is
/// broken, unless the chart spec overrides it.
pub const DEFAULT_MAX_GAP_MS: f64 = 10_000.0;

/// A sorted, zero-shifted series ready for rendering.
///
/// `times_ms` and `delays_ms` run in lockstep. NaN pairs mark idle gaps; the
/// renderer splits the line there so points on either side of a long idle
/// period are not visually connected.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    /// Arrival times, ms since the series origin.
    pub times_ms: Vec<f64>,
    /// Delay from creation to arrival, ms.
    pub delays_ms: Vec<f64>,
    /// Origin subtracted from every arrival (ms). A companion series, e.g.
    /// status reports, passes this back in to share the same origin.
    pub min_arrival_ms: f64,
}

impl NormalizedSeries {
    /// Count of real (non-sentinel) points.
    pub fn points(&self) -> usize {
        self.times_ms.iter().filter(|t| t.is_finite()).count()
    }

    /// Contiguous runs of `(time, delay)` points, split at gap sentinels.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut runs = Vec::new();
        let mut run = Vec::new();
        for (&t, &d) in self.times_ms.iter().zip(&self.delays_ms) {
            if t.is_nan() || d.is_nan() {
                if !run.is_empty() {
                    runs.push(std::mem::take(&mut run));
                }
            } else {
                run.push((t, d));
            }
        }
        if !run.is_empty() {
            runs.push(run);
        }
        runs
    }
}

/// Normalize unordered `(arrival_secs, delay_ms)` pairs.
///
/// Pairs are stably sorted by arrival time, converted to milliseconds, and
/// shifted so the earliest arrival lands at zero (or at the distance from
/// `min_override_ms`, when a companion origin is supplied). Consecutive
/// arrivals further than `max_gap_ms` apart get a NaN sentinel pair inserted
/// between them.
///
/// An empty input is a configuration error, not an empty series.
pub fn normalize(
    pairs: &[(f64, i64)],
    min_override_ms: Option<f64>,
    max_gap_ms: f64,
) -> Result<NormalizedSeries, Error> {
    if pairs.is_empty() {
        return Err(Error::EmptySeries);
    }

    let mut sorted = pairs.to_vec();
    // Stable sort: ties keep their original (log) order.
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut times_ms: Vec<f64> = sorted.iter().map(|(secs, _)| secs * 1000.0).collect();
    let mut delays_ms: Vec<f64> = sorted.iter().map(|(_, delay)| *delay as f64).collect();

    let min_arrival_ms = min_override_ms.unwrap_or(times_ms[0]);
    for t in &mut times_ms {
        *t -= min_arrival_ms;
    }

    let gaps: Vec<usize> = times_ms
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[1] - w[0] > max_gap_ms)
        .map(|(i, _)| i + 1)
        .collect();
    // Back to front so earlier insertion points stay valid.
    for &at in gaps.iter().rev() {
        times_ms.splice(at..at, [f64::NAN, f64::NAN]);
        delays_ms.splice(at..at, [f64::NAN, f64::NAN]);
    }

    Ok(NormalizedSeries {
        times_ms,
        delays_ms,
        min_arrival_ms,
    })
}
