use std::fs;
use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::model::EnrichedMovie;

/// Persists the enriched records as a pretty-printed JSON array. An existing
/// file at `path` is silently overwritten.
pub fn write_movies(movies: &[EnrichedMovie], path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(movies)?;
    fs::write(path, bytes).map_err(|err| PipelineError::Output {
        path: path.to_path_buf(),
        source: err,
    })
}
