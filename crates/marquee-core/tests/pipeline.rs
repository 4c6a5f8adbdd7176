use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use tempfile::tempdir;

use marquee_core::error::PipelineError;
use marquee_core::model::{EnrichedMovie, RatingCategory};
use marquee_core::pipeline::{run, RunOptions};
use marquee_core::seed::ensure_input_file;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date")
}

fn options(dir: &Path) -> RunOptions {
    RunOptions {
        input: dir.join("movies.csv"),
        output: dir.join("processed_movies.json"),
        reference_date: reference(),
    }
}

#[test]
fn seeded_sample_runs_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let opts = options(dir.path());

    assert!(ensure_input_file(&opts.input)?);

    let mut sink = Vec::new();
    let summary = run(&opts, &mut sink)?;

    assert_eq!(summary.record_count, 5);
    assert!((summary.report.mean_rating - 9.04).abs() < 1e-9);
    assert_eq!(summary.report.top[0].title, "The Shawshank Redemption");

    let text = String::from_utf8(sink)?;
    assert!(text.contains("Average rating: 9.0/10"));
    assert!(text.contains("The Dark Knight"));

    let written: Vec<EnrichedMovie> = serde_json::from_str(&fs::read_to_string(&opts.output)?)?;
    assert_eq!(written.len(), 5);

    let shawshank = &written[0];
    assert_eq!(shawshank.title, "The Shawshank Redemption");
    assert_eq!(shawshank.decade, 1990);
    assert_eq!(shawshank.rating_category, RatingCategory::Classic);
    assert_eq!(shawshank.years_since_release, 32);

    let fight_club = &written[4];
    assert_eq!(fight_club.rating_category, RatingCategory::Excellent);
    assert_eq!(fight_club.years_since_release, 27);
    Ok(())
}

#[test]
fn seeding_never_touches_an_existing_file() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("movies.csv");
    fs::write(&input, "title,release_date,rating\nCustom Movie,2001-01-01,7.0\n")?;

    assert!(!ensure_input_file(&input)?);
    assert!(fs::read_to_string(&input)?.contains("Custom Movie"));
    Ok(())
}

#[test]
fn conversion_failure_leaves_no_output() -> Result<()> {
    let dir = tempdir()?;
    let opts = options(dir.path());
    fs::write(
        &opts.input,
        "title,release_date,rating\nPulp Fiction,1994/10/14,8.9\n",
    )?;

    let mut sink = Vec::new();
    let err = run(&opts, &mut sink).unwrap_err();

    assert_eq!(err.stage(), "convert");
    match err {
        PipelineError::Format { title, field, .. } => {
            assert_eq!(title, "Pulp Fiction");
            assert_eq!(field, "release_date");
        }
        other => panic!("expected format error, got {other:?}"),
    }
    assert!(!opts.output.exists());
    assert!(sink.is_empty()); // report never rendered
    Ok(())
}

#[test]
fn empty_table_aborts_before_writing() -> Result<()> {
    let dir = tempdir()?;
    let opts = options(dir.path());
    fs::write(&opts.input, "title,release_date,rating\n")?;

    let mut sink = Vec::new();
    let err = run(&opts, &mut sink).unwrap_err();

    assert_eq!(err.stage(), "analyze");
    match err {
        PipelineError::EmptyInput => {}
        other => panic!("expected empty input error, got {other:?}"),
    }
    assert!(!opts.output.exists());
    Ok(())
}

#[test]
fn missing_input_without_seeding_is_a_load_error() -> Result<()> {
    let dir = tempdir()?;
    let opts = options(dir.path());

    let mut sink = Vec::new();
    let err = run(&opts, &mut sink).unwrap_err();

    assert_eq!(err.stage(), "load");
    Ok(())
}
