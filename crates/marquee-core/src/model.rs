use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMovie {
    pub title: String,
    pub release_date: String,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub release_date: NaiveDate,
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingCategory {
    Classic,
    Excellent,
}

impl RatingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingCategory::Classic => "Classic",
            RatingCategory::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RatingCategory {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(RatingCategory::Classic),
            "excellent" => Ok(RatingCategory::Excellent),
            other => Err(format!("unknown rating category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMovie {
    pub title: String,
    pub release_date: NaiveDate,
    pub rating: f64,
    pub decade: i32,
    pub rating_category: RatingCategory,
    pub years_since_release: i32,
}
