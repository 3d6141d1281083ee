//! Layer → expansion → CSV, one stage after another.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use od_core::{RunConfig, Role, UnresolvedPolicy};
use od_layer::{CostMatrixSource, EngineSession, LayerError, LocationSource};
use od_matrix::{ExpandedCosts, IndexLookup, build_mapping, expand};
use od_output::{CsvWriter, write_all};

/// Run one export and return the paths written, in write order.
///
/// Nothing is written unless the expansion succeeds.
pub fn run(config: &RunConfig) -> Result<Vec<PathBuf>> {
    config.validate().context("invalid configuration")?;

    // Checked before a session is acquired so a typo costs nothing.
    if !config.layer_path.exists() {
        return Err(LayerError::NotFound(config.layer_path.clone()).into());
    }

    let session = EngineSession::acquire();
    let layer = session
        .open_layer(&config.layer_path)
        .with_context(|| format!("failed to open layer {}", config.layer_path.display()))?;

    let costs = expand_layer(&layer, config.unresolved)?;

    let out_dir = config.resolved_output_dir();
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut writer = CsvWriter::new(&out_dir, &config.layer_stem());
    write_all(&mut writer, &costs).context("failed to write CSV output")?;

    info!("export of {} complete", config.layer_path.display());
    Ok(writer.written().to_vec())
}

/// Read costs and both location classes from `layer` and expand them to
/// one row per origin name and one column per destination name.
pub fn expand_layer<L>(layer: &L, policy: UnresolvedPolicy) -> Result<ExpandedCosts>
where
    L: CostMatrixSource + LocationSource + IndexLookup,
{
    let sparse = layer.cost_matrix().context("layer has no usable cost matrix")?;

    let origins = layer.locations(Role::Origin, policy).context("failed to read origins")?;
    let destinations = layer
        .locations(Role::Destination, policy)
        .context("failed to read destinations")?;
    debug!("{} origin row(s), {} destination row(s)", origins.len(), destinations.len());

    let origin_map = build_mapping(&origins, Role::Origin, layer).context("failed to map origins")?;
    let destination_map = build_mapping(&destinations, Role::Destination, layer)
        .context("failed to map destinations")?;

    let costs = expand(sparse, &origin_map, &destination_map).context("failed to expand cost matrix")?;
    Ok(costs)
}
