use chrono::{Datelike, NaiveDate};

use crate::model::{EnrichedMovie, Movie, RatingCategory};

pub const CLASSIC_THRESHOLD: f64 = 9.0;

/// Derives the computed attributes for one record. `reference` is the date
/// that "years since release" is measured against; callers decide what that
/// is, the stage never consults the wall clock.
pub fn enrich_movie(movie: Movie, reference: NaiveDate) -> EnrichedMovie {
    let year = movie.release_date.year();
    let decade = year.div_euclid(10) * 10; // floor division, also for years before 1 AD
    let rating_category = categorize_rating(movie.rating);
    let years_since_release = reference.year() - year;

    EnrichedMovie {
        title: movie.title,
        release_date: movie.release_date,
        rating: movie.rating,
        decade,
        rating_category,
        years_since_release,
    }
}

pub fn enrich_movies(movies: Vec<Movie>, reference: NaiveDate) -> Vec<EnrichedMovie> {
    movies
        .into_iter()
        .map(|movie| enrich_movie(movie, reference))
        .collect()
}

fn categorize_rating(rating: f64) -> RatingCategory {
    if rating >= CLASSIC_THRESHOLD {
        RatingCategory::Classic
    } else {
        RatingCategory::Excellent
    }
}
