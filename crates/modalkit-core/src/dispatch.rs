//! The choice-delivery boundary contract.

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// The single decision reported for one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Choice {
    /// The action at the given position in the main list was selected.
    Action { index: usize },
    /// The cancel sentinel: the designated cancel slot or a permitted
    /// backdrop/system dismiss.
    Cancel,
}

impl Choice {
    /// The selected index, unless this is the cancel sentinel.
    pub fn index(&self) -> Option<usize> {
        match self {
            Choice::Action { index } => Some(*index),
            Choice::Cancel => None,
        }
    }

    pub fn is_cancel(&self) -> bool {
        matches!(self, Choice::Cancel)
    }
}

/// Receives the decision of one presentation.
///
/// The contract: `on_choice` is invoked **at most once** per presentation id,
/// never for a descriptor that was never shown, and never twice even across a
/// host-surface recreation; the controller owns that guarantee, not the host.
/// A presentation torn down without a decision simply never invokes its
/// dispatcher (fire-or-never). Controller dismissal happens regardless of what
/// the callback does; the callback cannot veto it.
pub trait ChoiceDispatcher: Send {
    fn on_choice(&mut self, presentation_id: &str, choice: Choice);
}

impl<F> ChoiceDispatcher for F
where
    F: FnMut(&str, Choice) + Send,
{
    fn on_choice(&mut self, presentation_id: &str, choice: Choice) {
        self(presentation_id, choice)
    }
}

/// Dispatcher that forwards the choice over a oneshot channel, for callers
/// that await the decision instead of handling a callback.
pub struct ChannelDispatcher {
    tx: Option<oneshot::Sender<(String, Choice)>>,
}

impl ChannelDispatcher {
    pub fn new() -> (Self, oneshot::Receiver<(String, Choice)>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, rx)
    }
}

impl ChoiceDispatcher for ChannelDispatcher {
    fn on_choice(&mut self, presentation_id: &str, choice: Choice) {
        if let Some(tx) = self.tx.take() {
            if tx.send((presentation_id.to_string(), choice)).is_err() {
                tracing::warn!(id = %presentation_id, "choice receiver dropped before delivery");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_accessors() {
        assert_eq!(Choice::Action { index: 2 }.index(), Some(2));
        assert_eq!(Choice::Cancel.index(), None);
        assert!(Choice::Cancel.is_cancel());
    }

    #[test]
    fn test_closure_dispatcher() {
        let mut seen = Vec::new();
        {
            let mut dispatcher = |id: &str, choice: Choice| {
                seen.push((id.to_string(), choice));
            };
            dispatcher.on_choice("prs_x", Choice::Action { index: 0 });
        }
        assert_eq!(seen, vec![("prs_x".to_string(), Choice::Action { index: 0 })]);
    }

    #[tokio::test]
    async fn test_channel_dispatcher_delivers_once() {
        let (mut dispatcher, rx) = ChannelDispatcher::new();
        dispatcher.on_choice("prs_x", Choice::Cancel);
        // A second invocation finds the sender gone and does nothing.
        dispatcher.on_choice("prs_x", Choice::Action { index: 1 });

        let (id, choice) = rx.await.unwrap();
        assert_eq!(id, "prs_x");
        assert_eq!(choice, Choice::Cancel);
    }

    #[test]
    fn test_choice_serde_shape() {
        let json = serde_json::to_string(&Choice::Action { index: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"action","index":3}"#);
        let json = serde_json::to_string(&Choice::Cancel).unwrap();
        assert_eq!(json, r#"{"kind":"cancel"}"#);
    }
}
