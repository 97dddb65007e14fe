use crate::log::ExtractError;
use std::path::PathBuf;

/// Crate-level error type. All fallible paths in the library funnel into this;
/// the binary reports it and aborts (batch tool, no recovery).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("open log file {}: {source}", path.display())]
    OpenLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read {}: {source}", path.display())]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Line {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },

    #[error("read chart spec {}: {source}", path.display())]
    OpenSpec {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse chart spec {}: {source}", path.display())]
    ParseSpec {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no points to normalize")]
    EmptySeries,

    #[error("chart {title:?} has no series to draw")]
    EmptyChart { title: String },

    #[error("render chart to {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}
