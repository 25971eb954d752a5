//! Suspend/resume support for presentations that must outlive a transient
//! teardown of their host surface.
//!
//! The descriptor round-trips byte-for-byte; the dispatcher does not. It is
//! host-supplied and gets re-bound fresh on resume, with the persisted
//! `delivered` flag making sure a stale callback can never re-fire.

use crate::controller::{Phase, Presentation};
use crate::descriptor::DialogDescriptor;
use crate::dispatch::ChoiceDispatcher;
use crate::error::SnapshotError;
use crate::host::ModalHost;
use serde::{Deserialize, Serialize};

/// Serialized mid-presentation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationSnapshot {
    pub descriptor: DialogDescriptor,
    pub phase: Phase,
    pub delivered: bool,
}

impl PresentationSnapshot {
    /// Encode for the host's persistence hook.
    pub fn to_blob(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a blob handed back by the host.
    pub fn from_blob(blob: &[u8]) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_slice(blob)?)
    }
}

impl Presentation {
    /// Capture the restorable state of a still-waiting presentation.
    pub fn snapshot(&self) -> Result<PresentationSnapshot, SnapshotError> {
        if !matches!(self.phase, Phase::Shown | Phase::AwaitingChoice) {
            return Err(SnapshotError::NotSuspendable);
        }
        let descriptor = self
            .descriptor
            .clone()
            .ok_or(SnapshotError::NotSuspendable)?;

        Ok(PresentationSnapshot {
            descriptor,
            phase: self.phase,
            delivered: self.delivered,
        })
    }

    /// Persist this presentation through the host so it survives a transient
    /// teardown. The presentation keeps running; use
    /// [`Presentation::dismiss`] instead when the host is going away for
    /// good.
    pub fn suspend(&self, host: &mut dyn ModalHost) -> Result<(), SnapshotError> {
        let blob = self.snapshot()?.to_blob()?;
        tracing::debug!(id = %self.id(), bytes = blob.len(), "presentation suspended");
        host.persist_state(self.id(), blob);
        Ok(())
    }

    /// Rebuild a presentation from state the host persisted, re-rendering the
    /// same choices and binding a fresh dispatcher under the original
    /// presentation id.
    pub fn resume(
        presentation_id: &str,
        dispatcher: Box<dyn ChoiceDispatcher>,
        host: &mut dyn ModalHost,
    ) -> Result<Self, SnapshotError> {
        let blob = host
            .restore_state(presentation_id)
            .ok_or_else(|| SnapshotError::Missing {
                id: presentation_id.to_string(),
            })?;
        let snapshot = PresentationSnapshot::from_blob(&blob)?;

        // The guard survives recreation: a blob that already saw delivery has
        // nothing left to present and must never re-fire its callback.
        if snapshot.delivered {
            tracing::warn!(
                id = %snapshot.descriptor.id(),
                "resumed state was already delivered; not re-presenting"
            );
            return Ok(Self {
                id: snapshot.descriptor.id().to_string(),
                descriptor: None,
                phase: Phase::Dismissed,
                delivered: true,
                dispatcher: None,
            });
        }
        tracing::debug!(id = %snapshot.descriptor.id(), "presentation resumed");

        let mut presentation = Self {
            id: snapshot.descriptor.id().to_string(),
            descriptor: Some(snapshot.descriptor),
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, CancelAction};
    use crate::dispatch::Choice;
    use crate::host::MemoryHost;
    use crate::list::ActionList;
    use std::sync::{Arc, Mutex};

    fn counting_dispatcher(count: Arc<Mutex<u32>>) -> Box<dyn ChoiceDispatcher> {
        Box::new(move |_: &str, _: Choice| {
            *count.lock().unwrap() += 1;
        })
    }

    fn sheet_descriptor() -> DialogDescriptor {
        DialogDescriptor::sheet(
            "title",
            "message",
            ActionList::build(vec![Action::new("a"), Action::new("b")]).unwrap(),
            vec![CancelAction::new("取消").default_dismiss()],
        )
    }

    #[test]
    fn test_snapshot_round_trip_preserves_descriptor() {
        let count = Arc::new(Mutex::new(0));
        let mut host = MemoryHost::new();
        let descriptor = sheet_descriptor();
        let original = descriptor.clone();

        let p = Presentation::show(
            descriptor,
            counting_dispatcher(count.clone()),
            &mut host,
        )
        .unwrap();

        let snapshot = p.snapshot().unwrap();
        let blob = snapshot.to_blob().unwrap();
        let restored = PresentationSnapshot::from_blob(&blob).unwrap();

        assert_eq!(restored.descriptor, original);
        assert_eq!(restored.phase, Phase::AwaitingChoice);
        assert!(!restored.delivered);
    }

    #[test]
    fn test_suspend_resume_keeps_identity_and_choices() {
        let count = Arc::new(Mutex::new(0));
        let mut host = MemoryHost::new();
        let descriptor = sheet_descriptor();
        let id = descriptor.id().to_string();

        let p = Presentation::show(
            descriptor,
            counting_dispatcher(count.clone()),
            &mut host,
        )
        .unwrap();
        p.suspend(&mut host).unwrap();
        drop(p); // host surface torn down

        let mut resumed =
            Presentation::resume(&id, counting_dispatcher(count.clone()), &mut host).unwrap();
        assert_eq!(resumed.id(), id);
        assert_eq!(resumed.phase(), Phase::AwaitingChoice);
        assert_eq!(
            resumed.descriptor().unwrap().actions().len(),
            2,
            "same choices re-rendered"
        );

        assert!(resumed.select(1, &mut host).unwrap());
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_resume_missing_state() {
        let count = Arc::new(Mutex::new(0));
        let mut host = MemoryHost::new();
        let result = Presentation::resume("prs_gone", counting_dispatcher(count), &mut host);
        assert!(matches!(result, Err(SnapshotError::Missing { .. })));
    }

    #[test]
    fn test_resume_corrupt_blob() {
        let count = Arc::new(Mutex::new(0));
        let mut host = MemoryHost::new();
        host.persist_state("prs_bad", b"not json".to_vec());
        let result = Presentation::resume("prs_bad", counting_dispatcher(count), &mut host);
        assert!(matches!(result, Err(SnapshotError::Corrupt(_))));
    }

    #[test]
    fn test_dismissed_presentation_is_not_suspendable() {
        let count = Arc::new(Mutex::new(0));
        let mut host = MemoryHost::new();
        let mut p = Presentation::show(
            sheet_descriptor(),
            counting_dispatcher(count),
            &mut host,
        )
        .unwrap();
        p.dismiss(&mut host);

        assert!(matches!(p.snapshot(), Err(SnapshotError::NotSuspendable)));
        assert!(matches!(
            p.suspend(&mut host),
            Err(SnapshotError::NotSuspendable)
        ));
    }

    #[test]
    fn test_delivered_flag_blocks_stale_refire() {
        let count = Arc::new(Mutex::new(0));
        let mut host = MemoryHost::new();

        // Forge the edge case directly: a blob claiming delivery already
        // happened (e.g. persisted by a host that crashed mid-teardown).
        let snapshot = PresentationSnapshot {
            descriptor: sheet_descriptor(),
            phase: Phase::AwaitingChoice,
            delivered: true,
        };
        let id = snapshot.descriptor.id().to_string();
        host.persist_state(&id, snapshot.to_blob().unwrap());

        let mut resumed =
            Presentation::resume(&id, counting_dispatcher(count.clone()), &mut host).unwrap();
        assert!(resumed.delivered());
        assert_eq!(resumed.phase(), Phase::Dismissed);
        assert!(!host.is_visible(&id), "already-delivered state is not re-presented");
        assert!(!resumed.select(0, &mut host).unwrap());
        assert!(!resumed.backdrop_dismiss(&mut host));
        assert_eq!(*count.lock().unwrap(), 0, "stale callback never re-fires");
    }
}
