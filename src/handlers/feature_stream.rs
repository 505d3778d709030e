use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::FeatureStore;
use crate::handlers::call::{first_request, push, CallHandler, Inbound, Outbound};
use crate::models::{CallError, Feature, Rectangle};

/// Server-streaming ListFeatures: one rectangle in, every contained feature
/// out as its own message. Zero matches is an empty stream, not a failure.
pub struct FeatureStream {
    store: Arc<dyn FeatureStore>,
}

impl FeatureStream {
    pub fn new(store: Arc<dyn FeatureStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CallHandler for FeatureStream {
    type Request = Rectangle;
    type Response = Feature;

    fn name() -> &'static str {
        "list_features"
    }

    async fn handle(
        &self,
        mut inbound: Inbound<Rectangle>,
        outbound: Outbound<Feature>,
    ) -> Result<(), CallError> {
        let rect = first_request(&mut inbound).await?;
        for feature in self.store.features_within(rect) {
            push(&outbound, feature).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::models::Point;
    use tokio::sync::mpsc;

    fn stream_over(features: Vec<Feature>) -> FeatureStream {
        FeatureStream::new(Arc::new(InMemoryCatalog::new(features)))
    }

    #[tokio::test]
    async fn streams_each_contained_feature_then_finishes() {
        let handler = stream_over(vec![
            Feature::new("A", Point::new(0, 0)),
            Feature::new("B", Point::new(10, 10)),
        ]);
        let (request_tx, request_rx) = mpsc::channel(4);
        let (response_tx, mut response_rx) = mpsc::channel(4);

        let rect = Rectangle {
            low: Point::new(-5, -5),
            high: Point::new(5, 5),
        };
        request_tx.send(Ok(rect)).await.unwrap();
        drop(request_tx);

        handler.handle(request_rx, response_tx).await.unwrap();

        let mut names = Vec::new();
        while let Some(feature) = response_rx.recv().await {
            names.push(feature.name);
        }
        assert_eq!(names, vec!["A".to_string()]);
    }

    #[tokio::test]
    async fn an_empty_result_is_an_empty_stream() {
        let handler = stream_over(vec![Feature::new("far", Point::new(900, 900))]);
        let (request_tx, request_rx) = mpsc::channel(4);
        let (response_tx, mut response_rx) = mpsc::channel(4);

        let rect = Rectangle {
            low: Point::new(0, 0),
            high: Point::new(5, 5),
        };
        request_tx.send(Ok(rect)).await.unwrap();
        drop(request_tx);

        handler.handle(request_rx, response_tx).await.unwrap();
        assert_eq!(response_rx.recv().await, None);
    }

    #[tokio::test]
    async fn surfaces_a_transport_failure_before_the_request() {
        let handler = stream_over(vec![]);
        let (request_tx, request_rx) = mpsc::channel(4);
        let (response_tx, _response_rx) = mpsc::channel(4);

        request_tx
            .send(Err(CallError::Transport("connection reset".into())))
            .await
            .unwrap();
        drop(request_tx);

        let result = handler.handle(request_rx, response_tx).await;
        assert_eq!(
            result,
            Err(CallError::Transport("connection reset".into()))
        );
    }
}
