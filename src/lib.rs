pub mod chart;
pub mod log;
pub mod plot;
pub mod series;

mod error;
pub use error::Error;

#[cfg(test)]
mod test;
