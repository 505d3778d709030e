//! The seam between call handlers and the transport.
//!
//! A call is a pair of bounded channels. The inbound side delivers decoded
//! requests; the channel closing is the normal end-of-input signal, while an
//! `Err` item is a hard transport or decode failure. Sending on a closed
//! outbound channel means the peer side of the call is gone.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::mpsc;

use crate::models::CallError;

pub type Inbound<T> = mpsc::Receiver<Result<T, CallError>>;
pub type Outbound<T> = mpsc::Sender<T>;

/// One of the four interaction patterns, driven to completion per call.
///
/// Handlers never see the socket; anything that can feed the channels can
/// drive them, which is also how the unit tests exercise each pattern.
#[async_trait]
pub trait CallHandler: Send + Sync + 'static {
    type Request: DeserializeOwned + Send + 'static;
    type Response: Serialize + Send + 'static;

    fn name() -> &'static str;

    async fn handle(
        &self,
        inbound: Inbound<Self::Request>,
        outbound: Outbound<Self::Response>,
    ) -> Result<(), CallError>;
}

/// Awaits the single leading request of a unary or server-streaming call.
pub(crate) async fn first_request<T>(inbound: &mut Inbound<T>) -> Result<T, CallError> {
    match inbound.recv().await {
        Some(Ok(request)) => Ok(request),
        Some(Err(e)) => Err(e),
        None => Err(CallError::UnexpectedEnd),
    }
}

/// Queues a response, mapping a hung-up peer to the call-level failure.
pub(crate) async fn push<T>(outbound: &Outbound<T>, response: T) -> Result<(), CallError> {
    outbound
        .send(response)
        .await
        .map_err(|_| CallError::UnexpectedEnd)
}
