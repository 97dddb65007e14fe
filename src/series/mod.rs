//! Time-series reconstruction.
//!
//! Turns the unordered event pairs pulled out of a log into sorted,
//! zero-shifted, gap-aware series suitable for plotting.

mod normalize;

pub use normalize::{DEFAULT_MAX_GAP_MS, NormalizedSeries, normalize};
