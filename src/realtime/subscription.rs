/**
 * Push-Channel Endpoint
 *
 * `GET /sse` registers a new subscriber with the change hub and streams
 * every published event as a Server-Sent Events frame until the client
 * disconnects. The connection is intentionally long-lived; no timeout is
 * imposed, and axum's keep-alive mechanism injects comment lines to hold
 * idle connections open.
 *
 * Dropping the connection drops the receiver, which deregisters the
 * subscriber; it has no effect on in-flight mutations or other subscribers.
 *
 * Whether this endpoint requires a session is a routing decision; see
 * `ServerConfig::open_push_channel`.
 */

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use tokio::sync::broadcast::error::RecvError;

use crate::realtime::broadcast::ChangeBroadcast;

/// Handle a push-channel subscription (GET /sse)
///
/// Each event is one `data:` frame carrying the JSON envelope
/// `{action, type, model}`.
pub async fn handle_push_channel(
    State(changes): State<ChangeBroadcast>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    let receiver = changes.subscribe();
    tracing::debug!("push channel subscriber connected");

    let stream = stream::unfold(receiver, |mut rx| async move {
        // Loop until an event can actually be framed
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("failed to serialize change event: {:?}", e);
                            continue;
                        }
                    };
                    return Some((Ok(Event::default().data(data)), rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    // A slow subscriber skips ahead instead of failing
                    tracing::warn!("push channel subscriber lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("change hub closed, ending push channel");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
