// crates/marquee/src/main.rs

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use marquee_core::pipeline::{self, RunOptions};
use marquee_core::seed;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// A CLI for the movie table enrichment pipeline
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Movie table to process; seeded with the sample dataset when absent
    #[arg(long, default_value = "movies.csv")]
    input: PathBuf,

    /// Destination for the enriched JSON records
    #[arg(long, default_value = "processed_movies.json")]
    output: PathBuf,

    /// Date that "years since release" is measured against (YYYY-MM-DD).
    /// Defaults to today.
    #[arg(long)]
    reference_date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let opts = RunOptions {
        input: cli.input,
        output: cli.output,
        reference_date: cli
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive()),
    };

    if seed::ensure_input_file(&opts.input)? {
        println!(
            "Created '{}' with the sample movie table.",
            opts.input.display()
        );
    }

    let summary = match pipeline::run(&opts, &mut io::stdout()) {
        Ok(summary) => summary,
        Err(err) => {
            error!(stage = err.stage(), "Pipeline aborted");
            return Err(err.into());
        }
    };

    println!(
        "\n✅ Pipeline complete: {} records written to '{}'.",
        summary.record_count,
        opts.output.display()
    );
    Ok(())
}
