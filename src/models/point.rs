use serde::{Deserialize, Serialize};

/// Geographic coordinate in fixed-point degrees, scaled by 1e7.
///
/// Equality is exact field-wise comparison; there is no floating tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub latitude: i32,
    pub longitude: i32,
}

impl Point {
    pub fn new(latitude: i32, longitude: i32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Axis-aligned bounding box given by two opposite corners.
///
/// The corners are not required to be in any canonical order; actual bounds
/// are derived by taking min/max of each axis independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub low: Point,
    pub high: Point,
}
