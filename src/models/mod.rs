pub mod error;
pub mod feature;
pub mod point;

pub use error::CallError;
pub use feature::{Feature, RecommendationMode, RecommendationRequest, RouteSummary};
pub use point::{Point, Rectangle};
