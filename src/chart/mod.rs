//! Chart configuration and composition.
//!
//! A chart is described by a JSON spec file (which simulations to read, how
//! to bucket and break the series, where the PNG goes); `build_series` turns
//! that description into renderable series.

mod build;
mod spec;

pub use build::{LabeledSeries, build_series};
pub use spec::{ChartLayout, ChartSpec, DEFAULT_LOG_TEMPLATE, SimulationSpec};
