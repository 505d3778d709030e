use async_trait::async_trait;

use crate::handlers::call::{push, CallHandler, Inbound, Outbound};
use crate::models::{CallError, Feature, RecommendationRequest};
use crate::recommend::RecommendationEngine;

/// Bidirectional Recommend: answers each request as it arrives.
///
/// The single receive-compute-send loop keeps responses in request arrival
/// order; nothing further is received until the previous response is queued.
pub struct RecommendSession {
    engine: RecommendationEngine,
}

impl RecommendSession {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl CallHandler for RecommendSession {
    type Request = RecommendationRequest;
    type Response = Option<Feature>;

    fn name() -> &'static str {
        "recommend"
    }

    async fn handle(
        &self,
        mut inbound: Inbound<RecommendationRequest>,
        outbound: Outbound<Option<Feature>>,
    ) -> Result<(), CallError> {
        while let Some(next) = inbound.recv().await {
            let request = next?;
            push(&outbound, self.engine.recommend(&request)).await?;
        }
        Ok(())
    }
}
