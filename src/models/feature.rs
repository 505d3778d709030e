use serde::{Deserialize, Serialize};

use crate::models::point::Point;

/// A named point of interest. Immutable once loaded into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub location: Point,
}

impl Feature {
    pub fn new(name: impl Into<String>, location: Point) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// Final response of a RecordRoute call, produced once at stream close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub point_count: u32,
    /// Total traveled distance in whole meters, truncated.
    pub distance: i64,
    pub elapsed_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationMode {
    Nearest,
    Farthest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub point: Point,
    pub mode: RecommendationMode,
}
