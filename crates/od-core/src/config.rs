//! Run configuration.

use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult};

// ── UnresolvedPolicy ──────────────────────────────────────────────────────────

/// What to do with a location-table row whose network location cannot be
/// resolved at all (neither placed nor unplaced, just missing).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnresolvedPolicy {
    /// Drop the row from the output and log a warning.
    #[default]
    Skip,
    /// Fail the whole run.
    Reject,
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one export run.
///
/// Built by the binary from command-line flags; the library crates only read
/// it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Path of the solved layer file to export.
    pub layer_path: PathBuf,

    /// Directory for the CSV files.  `None` writes next to the layer file.
    pub output_dir: Option<PathBuf>,

    /// Handling of location rows with no resolvable network location.
    pub unresolved: UnresolvedPolicy,
}

impl RunConfig {
    pub fn new(layer_path: impl Into<PathBuf>) -> Self {
        Self {
            layer_path: layer_path.into(),
            output_dir: None,
            unresolved: UnresolvedPolicy::default(),
        }
    }

    /// Check the configuration before any file is opened.
    pub fn validate(&self) -> CoreResult<()> {
        if self.layer_path.as_os_str().is_empty() {
            return Err(CoreError::Config("layer path is empty".into()));
        }
        if let Some(dir) = &self.output_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(CoreError::OutputDirNotADirectory(dir.clone()));
            }
        }
        Ok(())
    }

    /// Directory the CSV files go to.
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .layer_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// File stem of the layer, used as the prefix of every output file name.
    pub fn layer_stem(&self) -> String {
        self.layer_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "layer".to_string())
    }
}
