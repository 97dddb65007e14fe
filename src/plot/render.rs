//! Draw labeled series onto a PNG chart.

use crate::Error;
use crate::chart::LabeledSeries;
use crate::series::NormalizedSeries;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::ops::Range;
use std::path::Path;

pub const X_LABEL: &str = "Time from first bundle arrival (ms)";
pub const Y_LABEL: &str = "Delay from creation to end (ms)";

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;

/// Render one chart: a line/marker series per simulation, grid, legend,
/// fixed axis labels, written to `path` as a PNG.
///
/// Gap sentinels split each series into segments so no line is drawn across
/// an idle period. Status-report companion series are drawn dashed in the
/// same color as their simulation.
pub fn render_chart(path: &Path, title: &str, series: &[LabeledSeries]) -> Result<(), Error> {
    if series.is_empty() {
        return Err(Error::EmptyChart {
            title: title.to_string(),
        });
    }
    let (x_range, y_range) = axis_ranges(series);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| render_err(path, e))?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(|e| render_err(path, e))?;

    for (idx, sim) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        let mut labeled = false;
        for run in sim.bundles.segments() {
            let anno = chart
                .draw_series(LineSeries::new(run.iter().copied(), color.stroke_width(2)))
                .map_err(|e| render_err(path, e))?;
            // One legend entry per simulation, not per segment.
            if !labeled {
                anno.label(sim.label.clone()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });
                labeled = true;
            }
            chart
                .draw_series(
                    run.iter()
                        .map(|&(x, y)| Circle::new((x, y), 2, color.filled())),
                )
                .map_err(|e| render_err(path, e))?;
        }

        if let Some(reports) = &sim.status_reports {
            for run in reports.segments() {
                chart
                    .draw_series(DashedLineSeries::new(
                        run.iter().copied(),
                        6,
                        4,
                        color.stroke_width(1),
                    ))
                    .map_err(|e| render_err(path, e))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.5))
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| render_err(path, e))?;

    root.present().map_err(|e| render_err(path, e))
}

/// Axis ranges covering every finite point, with headroom for markers. A
/// degenerate range (single point) is widened so the chart stays drawable.
fn axis_ranges(series: &[LabeledSeries]) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    let mut scan = |s: &NormalizedSeries| {
        for (&t, &d) in s.times_ms.iter().zip(&s.delays_ms) {
            if t.is_finite() && d.is_finite() {
                x_min = x_min.min(t);
                x_max = x_max.max(t);
                y_min = y_min.min(d);
                y_max = y_max.max(d);
            }
        }
    };
    for sim in series {
        scan(&sim.bundles);
        if let Some(reports) = &sim.status_reports {
            scan(reports);
        }
    }

    (pad(x_min, x_max), pad(y_min, y_max))
}

fn pad(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span <= 0.0 {
        return (min - 1.0)..(max + 1.0);
    }
    min..(max + span * 0.05)
}

fn render_err(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Render {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
