// crates/marquee-core/src/pipeline.rs

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzer::{self, AnalysisReport};
use crate::converter;
use crate::enricher;
use crate::error::Result;
use crate::loader;
use crate::report;
use crate::writer;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub reference_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub record_count: usize,
    pub report: AnalysisReport,
}

/// Runs the five stages in order, rendering the analysis report into `sink`
/// before the output file is written. The first failing stage aborts the
/// run; in particular an empty table never produces an output file.
pub fn run(opts: &RunOptions, sink: &mut impl Write) -> Result<RunSummary> {
    info!(stage = "load", path = %opts.input.display(), "Loading movie table");
    let raw = loader::load_movies(&opts.input)?;
    info!(stage = "load", records = raw.len(), "Loaded raw records");

    info!(stage = "convert", "Converting field types");
    let typed = converter::convert_movies(raw)?;
    if let Some(first) = typed.first() {
        debug!(stage = "convert", ?first, "First typed record");
    }

    info!(stage = "enrich", reference = %opts.reference_date, "Enriching records");
    let enriched = enricher::enrich_movies(typed, opts.reference_date);

    info!(stage = "analyze", "Analyzing ratings");
    let analysis = analyzer::analyze_movies(&enriched)?;
    report::render_report(&analysis, sink)?;

    info!(stage = "write", path = %opts.output.display(), "Writing enriched records");
    writer::write_movies(&enriched, &opts.output)?;

    Ok(RunSummary {
        record_count: enriched.len(),
        report: analysis,
    })
}
