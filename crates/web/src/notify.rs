use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::state::AppState;

const CHANNEL_CAPACITY: usize = 64;

/// Refresh hint pushed to connected viewers. Carries just enough context
/// to know what to re-fetch; the payload is never authoritative data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Update {
    Connected,
    ResultAdded { event_id: i32 },
    ResultUpdated { event_id: i32 },
    ResultDeleted { event_id: i32 },
    MatchAdded { event_id: i32 },
    MatchUpdated { event_id: i32 },
    MatchDeleted { event_id: i32 },
    EventStatusChanged { event_id: i32 },
    VisibilityChanged { sport_id: i32 },
}

/// Fan-out handle for live update hints. Sends are fire-and-forget: a send
/// with no listeners is normal, and a slow listener that lags the channel
/// simply misses messages and catches up on its next poll.
#[derive(Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<Update>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn notify(&self, update: Update) {
        if self.tx.send(update).is_err() {
            tracing::debug!("update dropped: no connected clients");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Update> {
        self.tx.subscribe()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// `GET /api/sse`, the live update stream.
pub async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    let updates = BroadcastStream::new(state.notifier.subscribe()).filter_map(|update| {
        match update {
            Ok(update) => Some(Event::default().json_data(&update)),
            // Lagged receivers skip ahead; clients recover on their next poll
            Err(BroadcastStreamRecvError::Lagged(_)) => None,
        }
    });

    let hello = tokio_stream::once(Event::default().json_data(&Update::Connected));

    Sse::new(hello.chain(updates)).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_wire_format() {
        let json = serde_json::to_value(Update::ResultAdded { event_id: 7 }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "result_added", "event_id": 7})
        );
    }

    #[test]
    fn test_connected_wire_format() {
        let json = serde_json::to_value(Update::Connected).unwrap();
        assert_eq!(json, serde_json::json!({"type": "connected"}));
    }

    #[tokio::test]
    async fn test_subscribers_receive_updates() {
        let notifier = ChangeNotifier::new();
        let mut rx = notifier.subscribe();

        notifier.notify(Update::VisibilityChanged { sport_id: 3 });

        assert_eq!(
            rx.recv().await.unwrap(),
            Update::VisibilityChanged { sport_id: 3 }
        );
    }

    #[test]
    fn test_notify_without_subscribers_is_silent() {
        let notifier = ChangeNotifier::new();
        notifier.notify(Update::MatchDeleted { event_id: 1 });
    }
}
