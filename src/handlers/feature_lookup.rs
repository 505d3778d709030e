use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::FeatureStore;
use crate::handlers::call::{first_request, push, CallHandler, Inbound, Outbound};
use crate::models::{CallError, Feature, Point};

/// Unary GetFeature: one point in, the matching feature (or nothing) out.
pub struct FeatureLookup {
    store: Arc<dyn FeatureStore>,
}

impl FeatureLookup {
    pub fn new(store: Arc<dyn FeatureStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CallHandler for FeatureLookup {
    type Request = Point;
    type Response = Option<Feature>;

    fn name() -> &'static str {
        "get_feature"
    }

    async fn handle(
        &self,
        mut inbound: Inbound<Point>,
        outbound: Outbound<Option<Feature>>,
    ) -> Result<(), CallError> {
        let point = first_request(&mut inbound).await?;
        push(&outbound, self.store.find_exact(point)).await
    }
}
