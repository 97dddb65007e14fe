//! Chart rendering (PNG output).

mod render;

pub use render::{X_LABEL, Y_LABEL, render_chart};
