use std::path::Path;

use tracing::info;

use crate::depth::stats::DepthStats;
use crate::error::{Error, Result};

/// Write the depth statistics as a JSON sidecar next to the rendered charts.
pub fn write_stats_sidecar(path: &Path, stats: &DepthStats) -> Result<()> {
    let json_string =
        serde_json::to_string_pretty(stats).map_err(|e| Error::Processing(e.to_string()))?;
    std::fs::write(path, json_string)?;
    info!("Created depth stats sidecar: {:?}", path);
    Ok(())
}
