//! Per-call route reducer for the client-streaming pattern.

use std::time::Instant;

use crate::geo;
use crate::models::{Point, RouteSummary};

/// Folds a stream of points into a running count and traveled distance.
///
/// One accumulator exists per RecordRoute call and is never shared.
/// `finalize` consumes the accumulator, so a summary is produced at most once
/// and no point can be ingested afterwards.
pub struct RouteAccumulator {
    point_count: u32,
    distance: i64,
    previous: Option<Point>,
    started_at: Instant,
}

impl RouteAccumulator {
    pub fn new() -> Self {
        Self {
            point_count: 0,
            distance: 0,
            previous: None,
            started_at: Instant::now(),
        }
    }

    pub fn ingest(&mut self, point: Point) {
        self.point_count += 1;
        if let Some(previous) = self.previous {
            self.distance += geo::distance(previous, point);
        }
        self.previous = Some(point);
    }

    pub fn finalize(self) -> RouteSummary {
        RouteSummary {
            point_count: self.point_count,
            distance: self.distance,
            elapsed_seconds: self.started_at.elapsed().as_secs(),
        }
    }
}

impl Default for RouteAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
