use crate::Error;
use crate::series::DEFAULT_MAX_GAP_MS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log filename template used when the spec does not name one.
pub const DEFAULT_LOG_TEMPLATE: &str = "logger_b.log.LONG.{id}";

/// Chart description, loaded from a JSON spec file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    /// Output PNG path. In `each` layout this is a template; `{label}` is
    /// replaced per simulation (appended before the extension if absent).
    pub output: PathBuf,
    pub simulations: Vec<SimulationSpec>,
    /// Log filename template; `{id}` is replaced by the simulation id.
    #[serde(default)]
    pub log_template: Option<String>,
    /// Payload size that identifies status-report pseudo-bundles. `None`
    /// leaves every event in the delivered bucket.
    #[serde(default)]
    pub status_report_payload_bytes: Option<u64>,
    /// Gap (ms) above which the plotted line is broken.
    #[serde(default)]
    pub max_gap_ms: Option<f64>,
    /// Also draw the status-report series (dashed).
    #[serde(default)]
    pub render_status_reports: bool,
    #[serde(default)]
    pub layout: Option<ChartLayout>,
}

/// One chart for all simulations, or one chart per simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartLayout {
    Combined,
    Each,
}

/// One simulation to chart: its log file id and its legend label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSpec {
    pub id: u32,
    pub label: String,
}

impl ChartSpec {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path).map_err(|source| Error::OpenSpec {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::ParseSpec {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn log_path(&self, log_dir: &Path, sim: &SimulationSpec) -> PathBuf {
        let template = self.log_template.as_deref().unwrap_or(DEFAULT_LOG_TEMPLATE);
        log_dir.join(template.replace("{id}", &sim.id.to_string()))
    }

    pub fn max_gap_ms(&self) -> f64 {
        self.max_gap_ms.unwrap_or(DEFAULT_MAX_GAP_MS)
    }

    pub fn layout(&self) -> ChartLayout {
        self.layout.unwrap_or(ChartLayout::Combined)
    }

    /// Output path for a per-simulation chart in `each` layout.
    pub fn output_for(&self, label: &str) -> PathBuf {
        let raw = self.output.to_string_lossy();
        if raw.contains("{label}") {
            return PathBuf::from(raw.replace("{label}", label));
        }
        let stem = self
            .output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = self
            .output
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "png".to_string());
        self.output.with_file_name(format!("{stem}{label}.{ext}"))
    }

    /// Title for a per-simulation chart in `each` layout.
    pub fn title_for(&self, label: &str) -> String {
        if self.title.contains("{label}") {
            self.title.replace("{label}", label)
        } else {
            format!("{} ({})", self.title, label)
        }
    }
}
