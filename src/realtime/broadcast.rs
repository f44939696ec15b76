/**
 * Change Broadcasting
 *
 * Successful mutations publish a `ChangeEvent` envelope to every current
 * push-channel subscriber. Publishing is fire-and-forget: no subscribers is
 * not an error, and a broken subscriber never affects the publishing
 * request.
 */

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::boards::document::{Document, ResourceKind};

/// What happened to the resource
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Create,
    Update,
}

/// The envelope delivered to push-channel subscribers
///
/// Serialized shape:
///
/// ```json
/// { "action": "create", "type": "Board", "model": { "_id": "...", ... } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub action: ChangeAction,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub model: Document,
}

/// Handle to the change hub
///
/// Cloneable; carried in the application state and handed to every mutation
/// handler and to the push endpoint.
pub type ChangeBroadcast = broadcast::Sender<ChangeEvent>;

/// Publish a change to all current subscribers
///
/// Returns the number of subscribers that received the event (0 if none).
pub fn publish_change(
    changes: &ChangeBroadcast,
    action: ChangeAction,
    kind: ResourceKind,
    model: Document,
) -> usize {
    let event = ChangeEvent {
        action,
        kind,
        model,
    };

    match changes.send(event) {
        Ok(subscriber_count) => {
            tracing::debug!(
                "broadcast {:?} {} to {} subscribers",
                action,
                kind,
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::trace!("no subscribers for {:?} {}", action, kind);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::id;
    use crate::boards::Fields;
    use serde_json::json;

    fn board(title: &str) -> Document {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!(title));
        Document::new(id::generate(), fields)
    }

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let (changes, initial) = broadcast::channel::<ChangeEvent>(16);
        // Drop the initial receiver: publishing must not fail without one.
        drop(initial);
        let count = publish_change(
            &changes,
            ChangeAction::Create,
            ResourceKind::Board,
            board("Sprint 1"),
        );
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_publish_reaches_every_subscriber() {
        let (changes, mut first) = broadcast::channel::<ChangeEvent>(16);
        let mut second = changes.subscribe();

        let count = publish_change(
            &changes,
            ChangeAction::Update,
            ResourceKind::Postit,
            board("note"),
        );
        assert_eq!(count, 2);

        for rx in [&mut first, &mut second] {
            let event = rx.recv().await.unwrap();
            assert_eq!(event.action, ChangeAction::Update);
            assert_eq!(event.kind, ResourceKind::Postit);
        }
    }

    #[tokio::test]
    async fn test_disconnected_subscriber_receives_nothing() {
        let (changes, keeper) = broadcast::channel::<ChangeEvent>(16);
        let gone = changes.subscribe();
        drop(gone);

        let count = publish_change(
            &changes,
            ChangeAction::Create,
            ResourceKind::Line,
            board("stroke"),
        );
        assert_eq!(count, 1);
        drop(keeper);
    }

    #[tokio::test]
    async fn test_single_publisher_ordering() {
        let (changes, mut rx) = broadcast::channel::<ChangeEvent>(16);

        publish_change(
            &changes,
            ChangeAction::Create,
            ResourceKind::Board,
            board("first"),
        );
        publish_change(
            &changes,
            ChangeAction::Update,
            ResourceKind::Board,
            board("second"),
        );

        assert_eq!(rx.recv().await.unwrap().action, ChangeAction::Create);
        assert_eq!(rx.recv().await.unwrap().action, ChangeAction::Update);
    }

    #[test]
    fn test_envelope_shape() {
        let model = board("Sprint 1");
        let event = ChangeEvent {
            action: ChangeAction::Create,
            kind: ResourceKind::Board,
            model: model.clone(),
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["action"], json!("create"));
        assert_eq!(value["type"], json!("Board"));
        assert_eq!(value["model"]["_id"], json!(model.id));
        assert_eq!(value["model"]["title"], json!("Sprint 1"));
    }
}
