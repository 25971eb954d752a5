//! Event bus for dialog lifecycle events.
//!
//! Typed pub/sub so the presentation layer and observers stay decoupled from
//! whoever raises dialogs. Publishing is synchronous: dialog events are
//! raised from the single UI task and never need to await.

use crate::descriptor::DialogDescriptor;
use crate::dispatch::Choice;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Channel capacity per event type.
const DEFAULT_CAPACITY: usize = 64;

/// Trait for events that can be published on the bus.
pub trait Event: Clone + Send + Sync + 'static {
    /// Event type name for the wildcard stream and logging.
    fn event_type() -> &'static str;
}

/// A serialized event for wildcard subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusEvent {
    /// Event type name.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event payload as JSON.
    pub payload: serde_json::Value,
}

/// The event bus.
#[derive(Clone)]
pub struct Bus {
    inner: Arc<BusInner>,
}

struct BusInner {
    /// Typed channels by TypeId.
    channels: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
    /// Wildcard subscribers (receive all events as JSON).
    wildcard: broadcast::Sender<BusEvent>,
}

impl Bus {
    pub fn new() -> Self {
        let (wildcard, _) = broadcast::channel(DEFAULT_CAPACITY);
        Self {
            inner: Arc::new(BusInner {
                channels: RwLock::new(HashMap::new()),
                wildcard,
            }),
        }
    }

    /// Publish an event to all subscribers.
    pub fn publish<E: Event + Serialize>(&self, event: E) {
        let type_id = TypeId::of::<E>();

        if let Ok(channels) = self.inner.channels.read() {
            if let Some(sender) = channels.get(&type_id) {
                if let Some(tx) = sender.downcast_ref::<broadcast::Sender<E>>() {
                    // Ignore send errors (no receivers).
                    let _ = tx.send(event.clone());
                }
            }
        }

        if let Ok(payload) = serde_json::to_value(&event) {
            let bus_event = BusEvent {
                event_type: E::event_type().to_string(),
                payload,
            };
            let _ = self.inner.wildcard.send(bus_event);
        }
    }

    /// Subscribe to events of type `E`.
    pub fn subscribe<E: Event>(&self) -> broadcast::Receiver<E> {
        let type_id = TypeId::of::<E>();

        if let Ok(channels) = self.inner.channels.read() {
            if let Some(sender) = channels.get(&type_id) {
                if let Some(tx) = sender.downcast_ref::<broadcast::Sender<E>>() {
                    return tx.subscribe();
                }
            }
        }

        let (tx, rx) = broadcast::channel::<E>(DEFAULT_CAPACITY);
        if let Ok(mut channels) = self.inner.channels.write() {
            channels.insert(type_id, Box::new(tx));
        }
        rx
    }

    /// Subscribe to all events (wildcard).
    pub fn subscribe_all(&self) -> broadcast::Receiver<BusEvent> {
        self.inner.wildcard.subscribe()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Event Types
// ============================================================================

/// A descriptor was handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogRequested {
    pub descriptor: DialogDescriptor,
}

impl Event for DialogRequested {
    fn event_type() -> &'static str {
        "dialog.requested"
    }
}

/// A choice was delivered for a presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceDelivered {
    pub presentation_id: String,
    pub choice: Choice,
}

impl Event for ChoiceDelivered {
    fn event_type() -> &'static str {
        "dialog.choice"
    }
}

/// A presentation left the screen, with or without a decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogDismissed {
    pub presentation_id: String,
    /// False when the presentation was abandoned without a choice.
    pub delivered: bool,
}

impl Event for DialogDismissed {
    fn event_type() -> &'static str {
        "dialog.dismissed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::list::ActionList;

    fn descriptor() -> DialogDescriptor {
        DialogDescriptor::alert(
            "t",
            "m",
            ActionList::build(vec![Action::new("OK")]).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_publish_subscribe() {
        let bus = Bus::new();
        let mut rx = bus.subscribe::<DialogRequested>();

        let d = descriptor();
        let id = d.id().to_string();
        bus.publish(DialogRequested { descriptor: d });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.descriptor.id(), id);
    }

    #[tokio::test]
    async fn test_wildcard_subscribe() {
        let bus = Bus::new();
        let mut rx = bus.subscribe_all();

        bus.publish(ChoiceDelivered {
            presentation_id: "prs_x".to_string(),
            choice: Choice::Cancel,
        });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type, "dialog.choice");
        assert_eq!(event.payload["presentation_id"], "prs_x");
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = Bus::new();
        let mut rx1 = bus.subscribe::<DialogDismissed>();
        let mut rx2 = bus.subscribe::<DialogDismissed>();

        bus.publish(DialogDismissed {
            presentation_id: "prs_x".to_string(),
            delivered: false,
        });

        assert!(!rx1.recv().await.unwrap().delivered);
        assert_eq!(rx2.recv().await.unwrap().presentation_id, "prs_x");
    }
}
