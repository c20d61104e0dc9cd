use std::path::PathBuf;

use thiserror::Error;

use crate::models::{InterestCategory, PoolKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("location '{0}' is not a supported destination")]
    UnknownDestination(String),

    #[error("trip interest '{0}' is not supported")]
    UnknownInterest(String),

    #[error("trip length {requested} is invalid; expected 1..={max} days")]
    InvalidTripLength { requested: i64, max: u32 },

    #[error("no activities found for {destination} and interest {interest}")]
    NoActivitiesAvailable {
        destination: String,
        interest: InterestCategory,
    },

    #[error("{destination} has {available} {pool} options but the trip needs {requested}")]
    PoolExhausted {
        pool: PoolKind,
        destination: String,
        available: usize,
        requested: u32,
    },
}

impl PlannerError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownDestination(_) => "unknown_destination",
            Self::UnknownInterest(_) => "unknown_interest",
            Self::InvalidTripLength { .. } => "invalid_trip_length",
            Self::NoActivitiesAvailable { .. } => "no_activities_available",
            Self::PoolExhausted { .. } => "pool_exhausted",
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}
