// crates/marquee-core/src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("load: cannot read {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("load: malformed delimited data in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("load: {} header row has no '{column}' column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("load: {} line {line} has an empty '{field}' field", .path.display())]
    EmptyField {
        path: PathBuf,
        line: usize,
        field: &'static str,
    },

    #[error("convert: field '{field}' of record '{title}' has invalid value '{value}': {reason}")]
    Format {
        title: String,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("analyze: input contains no records")]
    EmptyInput,

    #[error("analyze: failed to write the analysis report: {source}")]
    Report {
        #[source]
        source: io::Error,
    },

    #[error("write: JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write: cannot write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("seed: cannot create sample input {}: {message}", .path.display())]
    Seed { path: PathBuf, message: String },
}

impl PipelineError {
    /// Name of the pipeline stage the error originated in.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Input { .. }
            | Self::Csv { .. }
            | Self::MissingColumn { .. }
            | Self::EmptyField { .. } => "load",
            Self::Format { .. } => "convert",
            Self::EmptyInput | Self::Report { .. } => "analyze",
            Self::Json(_) | Self::Output { .. } => "write",
            Self::Seed { .. } => "seed",
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
