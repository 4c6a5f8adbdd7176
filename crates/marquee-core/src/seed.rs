use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PipelineError, Result};
use crate::loader::{RATING_COLUMN, RELEASE_DATE_COLUMN, TITLE_COLUMN};

#[derive(Debug)]
pub struct SampleMovie {
    pub title: &'static str,
    pub release_date: &'static str,
    pub rating: &'static str,
}

pub static SAMPLE_MOVIES: &[SampleMovie] = &[
    SampleMovie {
        title: "The Shawshank Redemption",
        release_date: "1994-09-23",
        rating: "9.3",
    },
    SampleMovie {
        title: "The Godfather",
        release_date: "1972-03-24",
        rating: "9.2",
    },
    SampleMovie {
        title: "The Dark Knight",
        release_date: "2008-07-18",
        rating: "9.0",
    },
    SampleMovie {
        title: "Pulp Fiction",
        release_date: "1994-10-14",
        rating: "8.9",
    },
    SampleMovie {
        title: "Fight Club",
        release_date: "1999-10-15",
        rating: "8.8",
    },
];

/// Writes the embedded sample table to `path` unless a file already exists
/// there. Returns whether it seeded.
pub fn ensure_input_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    let bytes = sample_csv(path)?;
    fs::write(path, bytes).map_err(|err| PipelineError::Seed {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    info!(
        path = %path.display(),
        movies = SAMPLE_MOVIES.len(),
        "Seeded sample movie table"
    );
    Ok(true)
}

fn sample_csv(path: &Path) -> Result<Vec<u8>> {
    let seed_err = |message: String| PipelineError::Seed {
        path: path.to_path_buf(),
        message,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([TITLE_COLUMN, RELEASE_DATE_COLUMN, RATING_COLUMN])
        .map_err(|err| seed_err(err.to_string()))?;
    for movie in SAMPLE_MOVIES {
        writer
            .write_record([movie.title, movie.release_date, movie.rating])
            .map_err(|err| seed_err(err.to_string()))?;
    }
    writer.into_inner().map_err(|err| seed_err(err.to_string()))
}
