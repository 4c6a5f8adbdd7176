use std::fs;
use std::path::Path;

use csv::StringRecord;

use crate::error::{PipelineError, Result};
use crate::model::RawMovie;

pub const TITLE_COLUMN: &str = "title";
pub const RELEASE_DATE_COLUMN: &str = "release_date";
pub const RATING_COLUMN: &str = "rating";

struct ColumnIndices {
    title: usize,
    release_date: usize,
    rating: usize,
}

/// Reads the movie table at `path` into raw string records, preserving row
/// order. Columns are located by header name, so column order in the file
/// does not matter.
pub fn load_movies(path: &Path) -> Result<Vec<RawMovie>> {
    let content = fs::read_to_string(path).map_err(|err| PipelineError::Input {
        path: path.to_path_buf(),
        source: err,
    })?;
    parse_movies(path, &content)
}

fn parse_movies(path: &Path, content: &str) -> Result<Vec<RawMovie>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|err| PipelineError::Csv {
            path: path.to_path_buf(),
            source: err,
        })?
        .clone();
    let indices = resolve_columns(path, &headers)?;

    let mut movies = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|err| PipelineError::Csv {
            path: path.to_path_buf(),
            source: err,
        })?;
        let line = row_idx + 2; // header occupies line 1
        movies.push(extract_movie(path, &indices, &record, line)?);
    }

    Ok(movies)
}

fn resolve_columns(path: &Path, headers: &StringRecord) -> Result<ColumnIndices> {
    Ok(ColumnIndices {
        title: find_column(path, headers, TITLE_COLUMN)?,
        release_date: find_column(path, headers, RELEASE_DATE_COLUMN)?,
        rating: find_column(path, headers, RATING_COLUMN)?,
    })
}

fn find_column(path: &Path, headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| PipelineError::MissingColumn {
            path: path.to_path_buf(),
            column: name,
        })
}

fn extract_movie(
    path: &Path,
    indices: &ColumnIndices,
    record: &StringRecord,
    line: usize,
) -> Result<RawMovie> {
    Ok(RawMovie {
        title: required_field(path, record, indices.title, TITLE_COLUMN, line)?,
        release_date: required_field(
            path,
            record,
            indices.release_date,
            RELEASE_DATE_COLUMN,
            line,
        )?,
        rating: required_field(path, record, indices.rating, RATING_COLUMN, line)?,
    })
}

fn required_field(
    path: &Path,
    record: &StringRecord,
    index: usize,
    field: &'static str,
    line: usize,
) -> Result<String> {
    let value = record.get(index).unwrap_or("");
    if value.trim().is_empty() {
        return Err(PipelineError::EmptyField {
            path: path.to_path_buf(),
            line,
            field,
        });
    }
    Ok(value.to_string())
}
