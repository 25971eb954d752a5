//! Dialog configuration.

use crate::action::CancelAction;
use crate::list::{resolve_cancel, ActionList};
use serde::{Deserialize, Serialize};

/// The modal surface a descriptor presents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "surface", rename_all = "snake_case")]
pub enum DialogBody {
    /// Centered forced-choice alert.
    Alert {
        actions: ActionList,
        /// Whether a tap outside the dialog dismisses it. Off by default:
        /// alerts are must-choose modals.
        #[serde(default)]
        backdrop_dismiss: bool,
    },
    /// Bottom-anchored action sheet with a separated cancel slot. Backdrop
    /// taps always dismiss a sheet, routed through the designated cancel.
    Sheet {
        actions: ActionList,
        cancel: Option<CancelAction>,
    },
}

/// The composed, immutable configuration for one dialog presentation.
///
/// Carries a stable identity token assigned at construction; the token is the
/// correlation key between this descriptor, its persisted state, and the
/// eventual choice callback, so it survives serialization unchanged even when
/// the presenting surface is torn down and recreated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogDescriptor {
    id: String,
    title: String,
    message: String,
    body: DialogBody,
}

impl DialogDescriptor {
    /// Compose an alert. Title and message may both be empty; a dialog with
    /// only buttons is valid and the empty regions collapse at render time.
    pub fn alert(
        title: impl Into<String>,
        message: impl Into<String>,
        actions: ActionList,
    ) -> Self {
        Self {
            id: modalkit_util::id::presentation_id(),
            title: title.into(),
            message: message.into(),
            body: DialogBody::Alert {
                actions,
                backdrop_dismiss: false,
            },
        }
    }

    /// Compose an action sheet. Cancel candidates go through
    /// [`resolve_cancel`]: the designated entry takes the separated cancel
    /// slot, the rest are appended to the main list as ordinary actions.
    pub fn sheet(
        title: impl Into<String>,
        message: impl Into<String>,
        mut actions: ActionList,
        cancel_candidates: Vec<CancelAction>,
    ) -> Self {
        let (cancel, demoted) = resolve_cancel(cancel_candidates);
        actions.append(demoted);
        Self {
            id: modalkit_util::id::presentation_id(),
            title: title.into(),
            message: message.into(),
            body: DialogBody::Sheet { actions, cancel },
        }
    }

    /// Opt an alert into backdrop dismissal. No effect on sheets, which are
    /// always backdrop-dismissible.
    pub fn with_backdrop_dismiss(mut self, dismissible: bool) -> Self {
        if let DialogBody::Alert {
            backdrop_dismiss, ..
        } = &mut self.body
        {
            *backdrop_dismiss = dismissible;
        }
        self
    }

    /// The presentation identity token (`prs_`-prefixed).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn body(&self) -> &DialogBody {
        &self.body
    }

    pub fn is_sheet(&self) -> bool {
        matches!(self.body, DialogBody::Sheet { .. })
    }

    /// The main action list (both surfaces have one).
    pub fn actions(&self) -> &ActionList {
        match &self.body {
            DialogBody::Alert { actions, .. } => actions,
            DialogBody::Sheet { actions, .. } => actions,
        }
    }

    /// The designated cancel action, if this is a sheet that has one.
    pub fn cancel(&self) -> Option<&CancelAction> {
        match &self.body {
            DialogBody::Alert { .. } => None,
            DialogBody::Sheet { cancel, .. } => cancel.as_ref(),
        }
    }

    /// Whether a backdrop/system dismiss gesture is accepted.
    pub fn allows_backdrop_dismiss(&self) -> bool {
        match &self.body {
            DialogBody::Alert {
                backdrop_dismiss, ..
            } => *backdrop_dismiss,
            DialogBody::Sheet { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::list::LabelConvention;

    fn two_actions() -> ActionList {
        ActionList::build(vec![
            Action::new("Delete").destructive(),
            Action::new("Cancel").as_default(),
        ])
        .unwrap()
    }

    #[test]
    fn test_alert_defaults_to_forced_choice() {
        let alert = DialogDescriptor::alert("Delete file?", "", two_actions());
        assert!(!alert.allows_backdrop_dismiss());
        assert!(alert.cancel().is_none());
        assert!(alert.has_title());
        assert!(!alert.has_message());
    }

    #[test]
    fn test_alert_backdrop_opt_in() {
        let alert =
            DialogDescriptor::alert("t", "m", two_actions()).with_backdrop_dismiss(true);
        assert!(alert.allows_backdrop_dismiss());
    }

    #[test]
    fn test_sheet_is_always_backdrop_dismissible() {
        let sheet = DialogDescriptor::sheet("", "", two_actions(), Vec::new());
        assert!(sheet.allows_backdrop_dismiss());
        assert!(sheet.cancel().is_none());
        assert!(sheet.is_sheet());
    }

    #[test]
    fn test_sheet_demotes_extra_cancels_into_main_list() {
        let actions =
            ActionList::from_labels(["a", "b"], LabelConvention::NoDefault).unwrap();
        let sheet = DialogDescriptor::sheet(
            "t",
            "m",
            actions,
            vec![
                CancelAction::new("keep").default_dismiss(),
                CancelAction::new("demoted").default_dismiss(),
            ],
        );

        assert_eq!(sheet.cancel().unwrap().label(), "keep");
        let labels: Vec<&str> = sheet.actions().actions().iter().map(Action::label).collect();
        assert_eq!(labels, vec!["a", "b", "demoted"]);
    }

    #[test]
    fn test_ids_are_unique_and_prefixed() {
        let a = DialogDescriptor::alert("", "", two_actions());
        let b = DialogDescriptor::alert("", "", two_actions());
        assert_ne!(a.id(), b.id());
        assert!(modalkit_util::id::is_presentation_id(a.id()));
    }

    #[test]
    fn test_serde_round_trip_is_lossless() {
        let sheet = DialogDescriptor::sheet(
            "title",
            "message",
            two_actions(),
            vec![CancelAction::new("取消").default_dismiss()],
        );

        let json = serde_json::to_string(&sheet).unwrap();
        let back: DialogDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(sheet, back);
        assert_eq!(back.id(), sheet.id());
    }
}
