//! WebSocket side of the call substrate.
//!
//! Each accepted socket is bridged into the typed channel pair a
//! [`CallHandler`] runs against: an inbound pump decodes JSON text frames into
//! requests, an outbound pump encodes responses back into frames. The pumps
//! and the handler together form one call; a failure tears down that call
//! only.

use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::handlers::call::CallHandler;
use crate::models::CallError;

/// In-band frame a client sends to finish its input stream while keeping the
/// socket open for responses. WebSocket has no half-close of its own: a Close
/// frame would forbid the server from sending the reply that client-streaming
/// and bidirectional calls still owe.
pub const END_OF_STREAM_FRAME: &str = "\"END_OF_STREAM\"";

struct AutoCancelTask<T>(JoinHandle<T>);

impl<T> Drop for AutoCancelTask<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Drives one call over an upgraded socket until the handler finishes.
///
/// Queued responses are flushed and the closing frame sent before the call is
/// torn down; the inbound pump is aborted on exit.
pub async fn serve_call<H: CallHandler>(handler: H, socket: WebSocket) {
    let (ws_sender, ws_receiver) = socket.split();
    let (request_tx, request_rx) = mpsc::channel(8);
    let (response_tx, response_rx) = mpsc::channel(8);

    let _inbound = AutoCancelTask(tokio::spawn(pump_inbound::<H::Request>(
        ws_receiver,
        request_tx,
    )));
    let outbound = tokio::spawn(pump_outbound::<H::Response>(response_rx, ws_sender));

    debug!("{} call opened", H::name());
    match handler.handle(request_rx, response_tx).await {
        Ok(()) => debug!("{} call completed", H::name()),
        Err(e) => error!("{} call aborted: {}", H::name(), e),
    }

    outbound.await.ok();
}

async fn pump_inbound<T>(
    mut ws_receiver: SplitStream<WebSocket>,
    requests: mpsc::Sender<Result<T, CallError>>,
) where
    T: DeserializeOwned + Send + 'static,
{
    while let Some(frame) = ws_receiver.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                if text == END_OF_STREAM_FRAME {
                    break;
                }
                match serde_json::from_str(&text) {
                    Ok(request) => {
                        if requests.send(Ok(request)).await.is_err() {
                            // handler already finished its contract
                            break;
                        }
                    }
                    Err(e) => {
                        requests
                            .send(Err(CallError::Decode(e.to_string())))
                            .await
                            .ok();
                        break;
                    }
                }
            }
            Ok(Message::Close(_)) => break,
            // ping/pong/binary frames are not part of the call
            Ok(_) => {}
            Err(e) => {
                requests
                    .send(Err(CallError::Transport(e.to_string())))
                    .await
                    .ok();
                break;
            }
        }
    }
}

async fn pump_outbound<T>(
    mut responses: mpsc::Receiver<T>,
    mut ws_sender: SplitSink<WebSocket, Message>,
) where
    T: Serialize + Send + 'static,
{
    while let Some(response) = responses.recv().await {
        let text = match serde_json::to_string(&response) {
            Ok(text) => text,
            Err(e) => {
                error!("response encoding failed: {}", e);
                break;
            }
        };
        if ws_sender.send(Message::Text(text)).await.is_err() {
            // peer is gone; the handler will observe the closed channel
            break;
        }
    }
    ws_sender.send(Message::Close(None)).await.ok();
}
