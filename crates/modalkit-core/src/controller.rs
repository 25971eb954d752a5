//! Presentation lifecycle and the single-delivery guarantee.

use crate::descriptor::DialogDescriptor;
use crate::dispatch::{Choice, ChoiceDispatcher};
use crate::error::ControllerError;
use crate::host::ModalHost;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of one presentation.
///
/// `Created → Shown → AwaitingChoice → Delivering → Dismissed`, in order;
/// `Dismissed` is terminal. Teardown without a decision goes straight to
/// `Dismissed` with no `Delivering` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Created,
    Shown,
    AwaitingChoice,
    Delivering,
    Dismissed,
}

/// Owns the visible/hidden lifecycle of one dialog instance.
///
/// The controller is a single-threaded state machine: every method must be
/// called from the owning UI/event task, in response to discrete input or
/// lifecycle events. It routes a selection to the correct action index,
/// invokes the [`ChoiceDispatcher`] exactly once, and tears itself down
/// regardless of what the callback does.
pub struct Presentation {
    /// Dropped on entry to `Dismissed` so a stale message body is not
    /// retained past the dialog's lifetime.
    pub(crate) descriptor: Option<DialogDescriptor>,
    /// Identity survives the descriptor for hide/logging.
    pub(crate) id: String,
    pub(crate) phase: Phase,
    /// Double-delivery guard; persisted across host recreation.
    pub(crate) delivered: bool,
    /// Taken on first delivery, so a second invocation is structurally
    /// impossible.
    pub(crate) dispatcher: Option<Box<dyn ChoiceDispatcher>>,
}

impl Presentation {
    /// Present `descriptor` on `host` and start waiting for a choice.
    ///
    /// Walks `Created → Shown → AwaitingChoice`. Refuses descriptors that
    /// could render with zero tappable options (`InvalidDescriptor`): the
    /// action-list builder makes those unrepresentable, but the controller
    /// defends against malformed direct construction anyway.
    pub fn show(
        descriptor: DialogDescriptor,
        dispatcher: Box<dyn ChoiceDispatcher>,
        host: &mut dyn ModalHost,
    ) -> Result<Self, ControllerError> {
        Self::validate(&descriptor)?;

        let mut presentation = Self {
            id: descriptor.id().to_string(),
            descriptor: Some(descriptor),
            phase: Phase::Created,
            delivered: false,
            dispatcher: Some(dispatcher),
        };

        presentation.transition(Phase::Shown);
        if let Some(descriptor) = &presentation.descriptor {
            host.show_modal(descriptor);
        }
        presentation.transition(Phase::AwaitingChoice);

        Ok(presentation)
    }

    fn validate(descriptor: &DialogDescriptor) -> Result<(), ControllerError> {
        if descriptor.actions().is_empty() {
            return Err(ControllerError::InvalidDescriptor {
                reason: "empty action list".to_string(),
            });
        }

        let any_selectable = descriptor.actions().actions().iter().any(|a| a.is_enabled());
        let any_dismissal = descriptor.cancel().map_or(
            descriptor.allows_backdrop_dismiss(),
            |cancel| cancel.is_enabled(),
        );
        if !any_selectable && !any_dismissal {
            return Err(ControllerError::InvalidDescriptor {
                reason: "no enabled action and no dismissal path".to_string(),
            });
        }

        Ok(())
    }

    /// The presentation identity token, the correlation key for the callback.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the dispatcher has been invoked for this presentation.
    pub fn delivered(&self) -> bool {
        self.delivered
    }

    /// The descriptor being presented; `None` once dismissed.
    pub fn descriptor(&self) -> Option<&DialogDescriptor> {
        self.descriptor.as_ref()
    }

    /// Route a user selection to the action at `index`.
    ///
    /// Returns `Ok(true)` when the choice was delivered and the dialog
    /// dismissed. Selecting a disabled action is `Ok(false)` (still waiting),
    /// as is any call after delivery has begun; that no-op is the
    /// single-delivery guarantee. An out-of-range index is a programming
    /// error, reported as `IndexOutOfRange` rather than silently ignored.
    pub fn select(
        &mut self,
        index: usize,
        host: &mut dyn ModalHost,
    ) -> Result<bool, ControllerError> {
        if self.phase != Phase::AwaitingChoice {
            tracing::debug!(id = %self.id, phase = ?self.phase, "selection ignored outside AwaitingChoice");
            return Ok(false);
        }
        let Some(descriptor) = self.descriptor.as_ref() else {
            return Ok(false);
        };

        let len = descriptor.actions().len();
        let Some(action) = descriptor.actions().get(index) else {
            return Err(ControllerError::IndexOutOfRange { index, len });
        };
        if !action.is_enabled() {
            tracing::debug!(id = %self.id, index, "selection of disabled action ignored");
            return Ok(false);
        }

        self.deliver(Choice::Action { index }, host);
        Ok(true)
    }

    /// Handle a tap on the backdrop or a system dismiss gesture.
    ///
    /// Accepted only when the descriptor permits it: always for sheets
    /// (routed through the designated cancel, whose disabled flag blocks the
    /// gesture), for alerts only when opted in. Returns whether the dialog
    /// dismissed; a rejected or repeated gesture leaves it waiting.
    pub fn backdrop_dismiss(&mut self, host: &mut dyn ModalHost) -> bool {
        if self.phase != Phase::AwaitingChoice {
            return false;
        }
        let Some(descriptor) = self.descriptor.as_ref() else {
            return false;
        };

        if !descriptor.allows_backdrop_dismiss() {
            tracing::debug!(id = %self.id, "backdrop dismiss rejected by descriptor");
            return false;
        }
        if let Some(cancel) = descriptor.cancel() {
            if !cancel.is_enabled() {
                tracing::debug!(id = %self.id, "backdrop dismiss blocked by disabled cancel");
                return false;
            }
        }

        self.deliver(Choice::Cancel, host);
        true
    }

    /// Tear the presentation down without a decision.
    ///
    /// The dispatcher is simply never invoked: fire-or-never, not an error.
    /// For the host going away entirely (as opposed to a transient recreation,
    /// which goes through [`Presentation::suspend`]).
    ///
    /// [`Presentation::suspend`]: crate::snapshot
    pub fn dismiss(&mut self, host: &mut dyn ModalHost) {
        if self.phase == Phase::Dismissed {
            return;
        }
        tracing::debug!(id = %self.id, "dismissed without delivery");
        self.dispatcher = None;
        self.finish(host);
    }

    fn deliver(&mut self, choice: Choice, host: &mut dyn ModalHost) {
        self.transition(Phase::Delivering);
        if let Some(mut dispatcher) = self.dispatcher.take() {
            tracing::debug!(id = %self.id, ?choice, "delivering choice");
            dispatcher.on_choice(&self.id, choice);
        }
        self.delivered = true;
        self.finish(host);
    }

    fn finish(&mut self, host: &mut dyn ModalHost) {
        self.transition(Phase::Dismissed);
        self.descriptor = None;
        host.hide_modal(&self.id);
    }

    pub(crate) fn transition(&mut self, to: Phase) {
        tracing::debug!(id = %self.id, from = ?self.phase, to = ?to, "phase transition");
        self.phase = to;
    }
}

impl std::fmt::Debug for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presentation")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("delivered", &self.delivered)
            .finish_non_exhaustive()
    }
}
