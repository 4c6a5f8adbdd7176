use serde::Serialize;

use crate::error::{PipelineError, Result};
use crate::model::EnrichedMovie;

pub const TOP_N: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub mean_rating: f64,
    pub top: Vec<RankedMovie>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMovie {
    pub title: String,
    pub rating: f64,
}

/// Computes summary statistics over the enriched records. Produces the
/// structured result only; turning it into text is the report module's job.
pub fn analyze_movies(movies: &[EnrichedMovie]) -> Result<AnalysisReport> {
    if movies.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let total: f64 = movies.iter().map(|movie| movie.rating).sum();
    let mean_rating = total / movies.len() as f64;

    let mut ranked: Vec<&EnrichedMovie> = movies.iter().collect();
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating)); // stable, ties keep input order
    let top = ranked
        .into_iter()
        .take(TOP_N)
        .map(|movie| RankedMovie {
            title: movie.title.clone(),
            rating: movie.rating,
        })
        .collect();

    Ok(AnalysisReport { mean_rating, top })
}
