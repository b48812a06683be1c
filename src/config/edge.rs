//! JSON configuration for the `edge_detect` tool.
//!
//! ```json
//! {
//!   "input": "photo.jpg",
//!   "detector": { "gauss_size": 5, "sigma": 1.0 },
//!   "output": { "labels_image": "out/edges.jpg", "report_json": "out/report.json" }
//! }
//! ```
use crate::detector::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    /// Label map written as 8-bit grayscale; format from the extension.
    pub labels_image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// Optional dump of the normalized gradient magnitude.
    #[serde(default)]
    pub magnitude_image: Option<PathBuf>,
}

pub fn parse_config(json: &str) -> Result<EdgeToolConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
