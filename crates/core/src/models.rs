use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InterestCategory {
    #[serde(rename = "Sights & Landmarks")]
    SightsAndLandmarks,
    #[serde(rename = "History")]
    History,
    #[serde(rename = "Nature & Wildlife")]
    NatureAndWildlife,
    #[serde(rename = "Adventure")]
    Adventure,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; 4] = [
        Self::SightsAndLandmarks,
        Self::History,
        Self::NatureAndWildlife,
        Self::Adventure,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sights & landmarks" | "sights_landmarks" | "sights" | "landmarks" => {
                Some(Self::SightsAndLandmarks)
            }
            "history" => Some(Self::History),
            "nature & wildlife" | "nature_wildlife" | "nature" | "wildlife" => {
                Some(Self::NatureAndWildlife)
            }
            "adventure" => Some(Self::Adventure),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SightsAndLandmarks => "Sights & Landmarks",
            Self::History => "History",
            Self::NatureAndWildlife => "Nature & Wildlife",
            Self::Adventure => "Adventure",
        }
    }
}

impl fmt::Display for InterestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Hotel,
    Restaurant,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hotel => f.write_str("hotel"),
            Self::Restaurant => f.write_str("restaurant"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    #[default]
    Recycle,
    Fail,
}

impl ExhaustionPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "recycle" | "reset" | "repeat" => Some(Self::Recycle),
            "fail" | "strict" => Some(Self::Fail),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Recycle => "recycle",
            Self::Fail => "fail",
        }
    }
}

pub const DEFAULT_MAX_TRIP_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub exhaustion: ExhaustionPolicy,
    pub max_trip_days: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            exhaustion: ExhaustionPolicy::default(),
            max_trip_days: DEFAULT_MAX_TRIP_DAYS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryRequest {
    pub destination: String,
    pub trip_length: i64,
    pub interest: String,
}

impl ItineraryRequest {
    pub fn new(
        destination: impl Into<String>,
        trip_length: i64,
        interest: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            trip_length,
            interest: interest.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayPlan {
    pub day: u32,
    pub destination: String,
    pub hotel: String,
    pub restaurant: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub destination: String,
    pub interest: InterestCategory,
    pub trip_length: u32,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub name: String,
    pub hotels: usize,
    pub restaurants: usize,
    pub interests: Vec<InterestCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub destinations: Vec<DestinationSummary>,
    pub interests: Vec<InterestCategory>,
}
