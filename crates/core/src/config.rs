use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Read-only toolchain configuration consulted during resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Standard-library root override; its `src` subdirectory replaces
    /// the built-in bundle when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waroot: Option<PathBuf>,
}
