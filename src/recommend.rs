//! Extremal-feature recommendation over the catalog.

use std::sync::Arc;

use crate::catalog::FeatureStore;
use crate::geo;
use crate::models::{Feature, RecommendationMode, RecommendationRequest};

pub struct RecommendationEngine {
    store: Arc<dyn FeatureStore>,
}

impl RecommendationEngine {
    pub fn new(store: Arc<dyn FeatureStore>) -> Self {
        Self { store }
    }

    /// Scans the catalog once and returns the nearest or farthest feature from
    /// the query point. Comparisons are strict, so on equal distances the
    /// earliest catalog entry wins. An empty catalog recommends nothing.
    pub fn recommend(&self, request: &RecommendationRequest) -> Option<Feature> {
        let mut nearest: Option<(Feature, i64)> = None;
        let mut farthest: Option<(Feature, i64)> = None;

        for feature in self.store.scan() {
            let distance = geo::distance(feature.location, request.point);
            let closer = nearest.as_ref().map_or(true, |(_, best)| distance < *best);
            if closer {
                nearest = Some((feature.clone(), distance));
            }
            let farther = farthest.as_ref().map_or(true, |(_, best)| distance > *best);
            if farther {
                farthest = Some((feature, distance));
            }
        }

        let winner = match request.mode {
            RecommendationMode::Nearest => nearest,
            RecommendationMode::Farthest => farthest,
        };
        winner.map(|(feature, _)| feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::models::Point;

    fn engine(features: Vec<Feature>) -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(InMemoryCatalog::new(features)))
    }

    fn request(point: Point, mode: RecommendationMode) -> RecommendationRequest {
        RecommendationRequest { point, mode }
    }

    #[test]
    fn nearest_and_farthest_pick_opposite_extremes() {
        let engine = engine(vec![
            Feature::new("A", Point::new(0, 0)),
            Feature::new("B", Point::new(100_000_000, 100_000_000)),
        ]);
        let query = Point::new(1, 1);

        let nearest = engine.recommend(&request(query, RecommendationMode::Nearest));
        assert_eq!(nearest.map(|f| f.name), Some("A".to_string()));

        let farthest = engine.recommend(&request(query, RecommendationMode::Farthest));
        assert_eq!(farthest.map(|f| f.name), Some("B".to_string()));
    }

    #[test]
    fn equal_distances_resolve_to_the_earliest_entry() {
        // Both features sit 1000 units east/west of the query point.
        let engine = engine(vec![
            Feature::new("east", Point::new(0, 1000)),
            Feature::new("west", Point::new(0, -1000)),
        ]);
        let query = Point::new(0, 0);

        for mode in [RecommendationMode::Nearest, RecommendationMode::Farthest] {
            let pick = engine.recommend(&request(query, mode));
            assert_eq!(pick.map(|f| f.name), Some("east".to_string()));
        }
    }

    #[test]
    fn empty_catalog_recommends_nothing() {
        let engine = engine(vec![]);
        let pick = engine.recommend(&request(Point::new(0, 0), RecommendationMode::Nearest));
        assert_eq!(pick, None);
    }

    #[test]
    fn single_entry_wins_both_modes() {
        let engine = engine(vec![Feature::new("only", Point::new(5, 5))]);
        for mode in [RecommendationMode::Nearest, RecommendationMode::Farthest] {
            let pick = engine.recommend(&request(Point::new(0, 0), mode));
            assert_eq!(pick.as_ref().map(|f| f.name.as_str()), Some("only"));
        }
    }
}
