//! End-to-end lifecycle tests over the public API: the canonical dialog
//! scenarios, the single-delivery guarantee, and host-recreation survival.

use modalkit_core::{
    Action, ActionList, CancelAction, Choice, ChoiceDispatcher, DialogDescriptor,
    LabelConvention, MemoryHost, Phase, Presentation,
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<(String, Choice)>>>,
}

impl Recorder {
    fn dispatcher(&self) -> Box<dyn ChoiceDispatcher> {
        let calls = self.calls.clone();
        Box::new(move |id: &str, choice: Choice| {
            calls.lock().unwrap().push((id.to_string(), choice));
        })
    }

    fn calls(&self) -> Vec<(String, Choice)> {
        self.calls.lock().unwrap().clone()
    }
}

/// A destructive confirmation: two buttons, "Cancel" emphasized, tapping
/// "Delete" reports index 0.
#[test]
fn destructive_alert_reports_first_index() {
    let recorder = Recorder::default();
    let mut host = MemoryHost::new();

    let descriptor = DialogDescriptor::alert(
        "Delete file?",
        "",
        ActionList::build(vec![
            Action::new("Delete").destructive(),
            Action::new("Cancel").as_default(),
        ])
        .unwrap(),
    );
    let id = descriptor.id().to_string();

    assert_eq!(descriptor.actions().len(), 2);
    assert_eq!(descriptor.actions().default_index(), Some(1));
    assert!(descriptor.actions().get(0).unwrap().is_destructive());

    let mut p = Presentation::show(descriptor, recorder.dispatcher(), &mut host).unwrap();
    assert!(p.select(0, &mut host).unwrap());

    assert_eq!(recorder.calls(), vec![(id, Choice::Action { index: 0 })]);
}

/// A plain-label permission prompt: the last label is the emphasized default,
/// tapping the first still reports index 0.
#[test]
fn plain_label_alert_last_is_default() {
    let recorder = Recorder::default();
    let mut host = MemoryHost::new();

    let actions =
        ActionList::from_labels(["Don't Allow", "Allow"], LabelConvention::LastIsDefault)
            .unwrap();
    assert_eq!(actions.default_index(), Some(1));

    let descriptor = DialogDescriptor::alert(
        "Allow \"Maps\" to access your location while you are using the app?",
        "Your current location will be displayed on the map.",
        actions,
    );
    let id = descriptor.id().to_string();

    let mut p = Presentation::show(descriptor, recorder.dispatcher(), &mut host).unwrap();
    assert!(p.select(0, &mut host).unwrap());

    assert_eq!(recorder.calls(), vec![(id, Choice::Action { index: 0 })]);
}

/// Duplicate-label sheet: three identical "取消" actions stay independently
/// selectable by position, and the backdrop routes to the designated cancel
/// slot rather than any of the duplicates.
#[test]
fn duplicate_label_sheet_keeps_positional_identity() {
    let mut host = MemoryHost::new();

    let build = || {
        DialogDescriptor::sheet(
            "",
            "",
            ActionList::build(vec![
                Action::new("取消"),
                Action::new("取消"),
                Action::new("取消"),
            ])
            .unwrap(),
            vec![CancelAction::new("取消").default_dismiss()],
        )
    };

    // Each position delivers its own index.
    for index in 0..3 {
        let recorder = Recorder::default();
        let descriptor = build();
        let id = descriptor.id().to_string();
        let mut p = Presentation::show(descriptor, recorder.dispatcher(), &mut host).unwrap();
        assert!(p.select(index, &mut host).unwrap());
        assert_eq!(recorder.calls(), vec![(id, Choice::Action { index })]);
    }

    // The backdrop maps to the cancel sentinel, not to a duplicate's index.
    let recorder = Recorder::default();
    let descriptor = build();
    let id = descriptor.id().to_string();
    let mut p = Presentation::show(descriptor, recorder.dispatcher(), &mut host).unwrap();
    assert!(p.backdrop_dismiss(&mut host));
    assert_eq!(recorder.calls(), vec![(id, Choice::Cancel)]);
}

/// Button-only dialog: empty title and message are valid, four buttons render.
#[test]
fn button_only_alert_is_valid() {
    let recorder = Recorder::default();
    let mut host = MemoryHost::new();

    let descriptor = DialogDescriptor::alert(
        "",
        "",
        ActionList::from_labels(
            ["test1", "test2", "test3", "test4"],
            LabelConvention::NoDefault,
        )
        .unwrap(),
    );
    assert!(!descriptor.has_title());
    assert!(!descriptor.has_message());
    assert_eq!(descriptor.actions().len(), 4);

    let id = descriptor.id().to_string();
    let mut p = Presentation::show(descriptor, recorder.dispatcher(), &mut host).unwrap();
    assert!(host.is_visible(&id));
    assert!(p.select(3, &mut host).unwrap());
    assert_eq!(recorder.calls(), vec![(id, Choice::Action { index: 3 })]);
}

/// The single-delivery guarantee holds across every follow-up gesture,
/// including a host recreation in the middle of the presentation.
#[test]
fn at_most_one_delivery_across_recreation() {
    let recorder = Recorder::default();
    let mut host = MemoryHost::new();

    let descriptor = DialogDescriptor::sheet(
        "title",
        "message",
        ActionList::build(vec![Action::new("a"), Action::new("b")]).unwrap(),
        vec![CancelAction::new("Cancel").default_dismiss()],
    );
    let original = descriptor.clone();
    let id = descriptor.id().to_string();

    // Show, then suspend and tear the host surface down mid-presentation.
    let p = Presentation::show(descriptor, recorder.dispatcher(), &mut host).unwrap();
    p.suspend(&mut host).unwrap();
    drop(p);

    // The re-presented dialog restores the exact same configuration.
    let mut p = Presentation::resume(&id, recorder.dispatcher(), &mut host).unwrap();
    assert_eq!(p.descriptor().unwrap(), &original);
    assert_eq!(p.phase(), Phase::AwaitingChoice);

    assert!(p.select(1, &mut host).unwrap());
    assert!(!p.select(0, &mut host).unwrap());
    assert!(!p.backdrop_dismiss(&mut host));

    assert_eq!(recorder.calls(), vec![(id, Choice::Action { index: 1 })]);
}

/// The persistence blob is host-format-agnostic: a host that parks it in a
/// file gets the same byte-for-byte descriptor back.
#[test]
fn snapshot_blob_survives_disk() {
    let recorder = Recorder::default();
    let mut host = MemoryHost::new();

    let descriptor = DialogDescriptor::alert(
        "Delete file?",
        "This cannot be undone.",
        ActionList::build(vec![
            Action::new("Delete").destructive(),
            Action::new("Cancel").as_default(),
        ])
        .unwrap(),
    );
    let original = descriptor.clone();

    let p = Presentation::show(descriptor, recorder.dispatcher(), &mut host).unwrap();
    let blob = p.snapshot().unwrap().to_blob().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("presentation.json");
    std::fs::write(&path, &blob).unwrap();

    let read_back = std::fs::read(&path).unwrap();
    let snapshot = modalkit_core::PresentationSnapshot::from_blob(&read_back).unwrap();
    assert_eq!(snapshot.descriptor, original);
    assert!(!snapshot.delivered);
}

/// A presentation closed with the host (not recreated) never fires at all.
#[test]
fn closed_without_choice_never_fires() {
    let recorder = Recorder::default();
    let mut host = MemoryHost::new();

    let descriptor = DialogDescriptor::alert(
        "title",
        "",
        ActionList::build(vec![Action::new("OK")]).unwrap(),
    );
    let mut p = Presentation::show(descriptor, recorder.dispatcher(), &mut host).unwrap();

    p.dismiss(&mut host);
    assert_eq!(p.phase(), Phase::Dismissed);
    assert!(recorder.calls().is_empty());
}
