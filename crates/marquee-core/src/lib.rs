pub mod analyzer;
pub mod converter;
pub mod enricher;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod seed;
pub mod writer;

pub use analyzer::{analyze_movies, AnalysisReport, RankedMovie, TOP_N};
pub use converter::{convert_movie, convert_movies, DATE_FORMAT};
pub use enricher::{enrich_movie, enrich_movies, CLASSIC_THRESHOLD};
pub use error::{PipelineError, Result};
pub use loader::load_movies;
pub use model::{EnrichedMovie, Movie, RatingCategory, RawMovie};
pub use pipeline::{run, RunOptions, RunSummary};
pub use report::render_report;
pub use seed::{ensure_input_file, SAMPLE_MOVIES};
pub use writer::write_movies;
