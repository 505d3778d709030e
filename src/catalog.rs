//! Read-only feature catalog behind a lookup/range-query seam.

use crate::geo;
use crate::models::{Feature, Point, Rectangle};

/// Query interface of the feature catalog.
///
/// The service only ever reads, so implementations are shared across calls
/// without locking. A deployment can swap the in-memory catalog for a
/// persistent or indexed store without touching handler logic.
pub trait FeatureStore: Send + Sync {
    /// First feature whose location equals the query point exactly, if any.
    fn find_exact(&self, point: Point) -> Option<Feature>;

    /// Every feature inside the rectangle, lazily, in catalog order.
    fn features_within(&self, rect: Rectangle) -> Box<dyn Iterator<Item = Feature> + Send + '_>;

    /// Every feature in catalog order.
    fn scan(&self) -> Box<dyn Iterator<Item = Feature> + Send + '_>;
}

/// Catalog fixed at startup.
pub struct InMemoryCatalog {
    features: Vec<Feature>,
}

impl InMemoryCatalog {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

impl FeatureStore for InMemoryCatalog {
    fn find_exact(&self, point: Point) -> Option<Feature> {
        self.features
            .iter()
            .find(|feature| feature.location == point)
            .cloned()
    }

    fn features_within(&self, rect: Rectangle) -> Box<dyn Iterator<Item = Feature> + Send + '_> {
        Box::new(
            self.features
                .iter()
                .filter(move |feature| geo::in_range(feature.location, rect))
                .cloned(),
        )
    }

    fn scan(&self) -> Box<dyn Iterator<Item = Feature> + Send + '_> {
        Box::new(self.features.iter().cloned())
    }
}

/// The built-in landmark set served by the demo deployment.
pub fn default_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        Feature::new(
            "上海交通大学闵行校区 上海市闵行区东川路800号",
            Point::new(310235000, 121437403),
        ),
        Feature::new(
            "复旦大学 上海市杨浦区五角场邯郸路220号",
            Point::new(312978870, 121503457),
        ),
        Feature::new(
            "华东理工大学 上海市徐汇区梅陇路130号",
            Point::new(311416130, 121424904),
        ),
    ])
}
