use chrono::NaiveDate;

use crate::error::{PipelineError, Result};
use crate::loader::{RATING_COLUMN, RELEASE_DATE_COLUMN};
use crate::model::{Movie, RawMovie};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a raw record into its typed form. Parse failures name the
/// offending field, its raw value, and the record's title.
pub fn convert_movie(raw: RawMovie) -> Result<Movie> {
    let release_date = parse_release_date(&raw)?;
    let rating = parse_rating(&raw)?;
    Ok(Movie {
        title: raw.title,
        release_date,
        rating,
    })
}

pub fn convert_movies(records: Vec<RawMovie>) -> Result<Vec<Movie>> {
    records.into_iter().map(convert_movie).collect()
}

fn parse_release_date(raw: &RawMovie) -> Result<NaiveDate> {
    let trimmed = raw.release_date.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|err| PipelineError::Format {
        title: raw.title.clone(),
        field: RELEASE_DATE_COLUMN,
        value: raw.release_date.clone(),
        reason: format!("expected a {DATE_FORMAT} date: {err}"),
    })
}

fn parse_rating(raw: &RawMovie) -> Result<f64> {
    let trimmed = raw.rating.trim();
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|err| PipelineError::Format {
            title: raw.title.clone(),
            field: RATING_COLUMN,
            value: raw.rating.clone(),
            reason: format!("failed to parse as float: {err}"),
        })?;
    if !parsed.is_finite() {
        return Err(PipelineError::Format {
            title: raw.title.clone(),
            field: RATING_COLUMN,
            value: raw.rating.clone(),
            reason: "rating must be a finite number".to_string(),
        });
    }
    Ok(parsed)
}
