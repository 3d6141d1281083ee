//! Scoped engine session.
//!
//! Acquire one [`EngineSession`] before touching any layer and let it drop
//! when the run ends; the release is logged whether the run succeeded or not.

use std::cell::Cell;
use std::path::Path;
use std::time::Instant;

use log::info;

use crate::{LayerError, LayerResult, SolvedLayer};

/// Process-level handle on the network engine.
///
/// Layers can only be opened through a live session.  The type is `!Sync`;
/// a run is single-threaded.
pub struct EngineSession {
    acquired_at:   Instant,
    layers_opened: Cell<usize>,
}

impl EngineSession {
    pub fn acquire() -> Self {
        info!("engine session acquired");
        Self {
            acquired_at:   Instant::now(),
            layers_opened: Cell::new(0),
        }
    }

    /// Open and check a solved layer file.
    ///
    /// # Errors
    ///
    /// [`LayerError::NotFound`] if `path` does not exist, otherwise any load
    /// error from the layer file.
    pub fn open_layer(&self, path: &Path) -> LayerResult<SolvedLayer> {
        if !path.exists() {
            return Err(LayerError::NotFound(path.to_path_buf()));
        }
        let layer = SolvedLayer::load(path)?;
        self.layers_opened.set(self.layers_opened.get() + 1);
        info!("opened layer {}", path.display());
        Ok(layer)
    }

    /// Number of layers opened successfully so far.
    pub fn layers_opened(&self) -> usize {
        self.layers_opened.get()
    }
}

impl Drop for EngineSession {
    fn drop(&mut self) {
        info!(
            "engine session released after {:.2?} ({} layer(s) opened)",
            self.acquired_at.elapsed(),
            self.layers_opened.get(),
        );
    }
}
