use async_trait::async_trait;

use crate::handlers::call::{push, CallHandler, Inbound, Outbound};
use crate::models::{CallError, Point, RouteSummary};
use crate::route::RouteAccumulator;

/// Client-streaming RecordRoute: ingests points until the client finishes its
/// stream, then answers with the single route summary. A mid-stream failure
/// aborts the call without producing a summary.
pub struct RouteRecorder;

#[async_trait]
impl CallHandler for RouteRecorder {
    type Request = Point;
    type Response = RouteSummary;

    fn name() -> &'static str {
        "record_route"
    }

    async fn handle(
        &self,
        mut inbound: Inbound<Point>,
        outbound: Outbound<RouteSummary>,
    ) -> Result<(), CallError> {
        let mut route = RouteAccumulator::new();
        while let Some(next) = inbound.recv().await {
            route.ingest(next?);
        }
        push(&outbound, route.finalize()).await
    }
}
