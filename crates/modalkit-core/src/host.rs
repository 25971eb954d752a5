//! Host collaborator contract.
//!
//! The presentation controller does not render and does not own storage; it
//! asks the host surface for both. Rendering internals stay on the host side
//! of this seam.

use crate::descriptor::DialogDescriptor;
use std::collections::HashMap;

/// What the presentation controller needs from the surface that hosts it.
pub trait ModalHost {
    /// Put the modal chrome for `descriptor` on screen, blocking interaction
    /// with whatever is underneath until [`ModalHost::hide_modal`].
    fn show_modal(&mut self, descriptor: &DialogDescriptor);

    /// Remove the modal chrome for the given presentation.
    fn hide_modal(&mut self, presentation_id: &str);

    /// Keep `blob` across a transient teardown of the presenting surface
    /// (e.g. a resize-driven recreation).
    fn persist_state(&mut self, presentation_id: &str, blob: Vec<u8>);

    /// Hand back a previously persisted blob. Consumed on read: a second call
    /// for the same presentation returns `None`.
    fn restore_state(&mut self, presentation_id: &str) -> Option<Vec<u8>>;
}

/// Host that renders nothing and persists nothing, for headless callers that
/// only want the decision contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl ModalHost for NullHost {
    fn show_modal(&mut self, _descriptor: &DialogDescriptor) {}

    fn hide_modal(&mut self, _presentation_id: &str) {}

    fn persist_state(&mut self, _presentation_id: &str, _blob: Vec<u8>) {}

    fn restore_state(&mut self, _presentation_id: &str) -> Option<Vec<u8>> {
        None
    }
}

/// In-memory host: persisted blobs live in a map, visible modals in a list.
///
/// This is the state-retention side of the contract for hosts that keep their
/// own process alive (the TUI demo), and the observable fake for tests.
#[derive(Debug, Default)]
pub struct MemoryHost {
    blobs: HashMap<String, Vec<u8>>,
    visible: Vec<String>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given presentation currently has modal chrome up.
    pub fn is_visible(&self, presentation_id: &str) -> bool {
        self.visible.iter().any(|id| id == presentation_id)
    }

    /// Presentations currently on screen, in show order.
    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    /// Whether a persisted blob is being held for the given presentation.
    pub fn has_persisted(&self, presentation_id: &str) -> bool {
        self.blobs.contains_key(presentation_id)
    }
}

impl ModalHost for MemoryHost {
    fn show_modal(&mut self, descriptor: &DialogDescriptor) {
        tracing::debug!(id = %descriptor.id(), "modal shown");
        self.visible.push(descriptor.id().to_string());
    }

    fn hide_modal(&mut self, presentation_id: &str) {
        tracing::debug!(id = %presentation_id, "modal hidden");
        self.visible.retain(|id| id != presentation_id);
    }

    fn persist_state(&mut self, presentation_id: &str, blob: Vec<u8>) {
        self.blobs.insert(presentation_id.to_string(), blob);
    }

    fn restore_state(&mut self, presentation_id: &str) -> Option<Vec<u8>> {
        self.blobs.remove(presentation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::descriptor::DialogDescriptor;
    use crate::list::ActionList;

    fn descriptor() -> DialogDescriptor {
        DialogDescriptor::alert(
            "t",
            "m",
            ActionList::build(vec![Action::new("OK")]).unwrap(),
        )
    }

    #[test]
    fn test_memory_host_tracks_visibility() {
        let mut host = MemoryHost::new();
        let d = descriptor();

        host.show_modal(&d);
        assert!(host.is_visible(d.id()));

        host.hide_modal(d.id());
        assert!(!host.is_visible(d.id()));
        assert!(host.visible().is_empty());
    }

    #[test]
    fn test_memory_host_restore_consumes_blob() {
        let mut host = MemoryHost::new();
        host.persist_state("prs_a", vec![1, 2, 3]);
        assert!(host.has_persisted("prs_a"));

        assert_eq!(host.restore_state("prs_a"), Some(vec![1, 2, 3]));
        assert_eq!(host.restore_state("prs_a"), None);
    }

    #[test]
    fn test_null_host_restores_nothing() {
        let mut host = NullHost;
        host.persist_state("prs_a", vec![1]);
        assert_eq!(host.restore_state("prs_a"), None);
    }
}
