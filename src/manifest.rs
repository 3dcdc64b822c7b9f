//! Project manifest (tmm.yaml) parsing.
//!
//! The manifest supplies defaults for the merge command so a project can
//! keep its grid layout next to its tiles. Command-line flags always win.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TmmError};
use crate::types::RowPolicy;

pub const MANIFEST_FILENAME: &str = "tmm.yaml";

/// Project manifest loaded from tmm.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Output file for the tileset.
    pub out: Option<PathBuf>,

    /// Cells per row.
    pub columns: Option<u32>,

    /// Accept truncated or checksum-damaged inputs.
    pub force_truncated: Option<bool>,

    /// Row count rule.
    pub rows: Option<RowPolicy>,
}

impl Manifest {
    /// Load manifest from a tmm.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TmmError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TmmError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Load `tmm.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
