//! Async presentation service.
//!
//! For hosts whose dialog-raising code is async (a tool loop, a server task),
//! the manager turns the callback contract into an awaitable: `present` parks
//! a oneshot sender keyed by presentation id and resolves when the UI side
//! reports the choice. Removing the pending entry on first response is what
//! makes redundant responses no-ops.

use crate::bus::{Bus, ChoiceDelivered, DialogDismissed, DialogRequested};
use crate::descriptor::DialogDescriptor;
use crate::dispatch::Choice;
use std::collections::HashMap;
use tokio::sync::{oneshot, RwLock};

/// Coordinates pending presentations between async callers and the UI task.
pub struct DialogManager {
    /// Pending presentations awaiting a choice.
    pending: RwLock<HashMap<String, oneshot::Sender<Choice>>>,
    /// Event bus for dialog lifecycle events.
    bus: Bus,
}

impl DialogManager {
    pub fn new(bus: Bus) -> Self {
        Self {
            pending: RwLock::new(HashMap::new()),
            bus,
        }
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Publish the dialog to the presentation layer and wait for its single
    /// choice. Resolves to `None` if the presentation was abandoned without a
    /// decision (fire-or-never). There is no timeout: a dialog waits
    /// indefinitely for input.
    pub async fn present(&self, descriptor: DialogDescriptor) -> Option<Choice> {
        let (tx, rx) = oneshot::channel();
        let id = descriptor.id().to_string();

        {
            let mut pending = self.pending.write().await;
            pending.insert(id.clone(), tx);
        }

        tracing::debug!(id = %id, "dialog requested, awaiting choice");
        self.bus.publish(DialogRequested { descriptor });

        match rx.await {
            Ok(choice) => Some(choice),
            Err(_) => None,
        }
    }

    /// Report the user's choice for a presentation. Responses for unknown or
    /// already-resolved presentations are no-ops.
    pub async fn respond(&self, presentation_id: &str, choice: Choice) {
        let tx = {
            let mut pending = self.pending.write().await;
            pending.remove(presentation_id)
        };

        match tx {
            Some(tx) => {
                let _ = tx.send(choice);
                self.bus.publish(ChoiceDelivered {
                    presentation_id: presentation_id.to_string(),
                    choice,
                });
                self.bus.publish(DialogDismissed {
                    presentation_id: presentation_id.to_string(),
                    delivered: true,
                });
            }
            None => {
                tracing::debug!(
                    id = %presentation_id,
                    "response for unknown or already-resolved presentation ignored"
                );
            }
        }
    }

    /// Drop a pending presentation without a decision. The waiting `present`
    /// call resolves to `None`; no choice event is published.
    pub async fn abandon(&self, presentation_id: &str) {
        let removed = {
            let mut pending = self.pending.write().await;
            pending.remove(presentation_id)
        };

        if removed.is_some() {
            tracing::debug!(id = %presentation_id, "presentation abandoned");
            self.bus.publish(DialogDismissed {
                presentation_id: presentation_id.to_string(),
                delivered: false,
            });
        }
    }

    /// Whether a presentation is still waiting for its choice.
    pub async fn is_pending(&self, presentation_id: &str) -> bool {
        self.pending.read().await.contains_key(presentation_id)
    }
}
