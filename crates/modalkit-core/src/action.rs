//! Selectable dialog actions.

use serde::{Deserialize, Serialize};

/// Rendering style for an action.
///
/// Destructive is a semantic hint (red emphasis for an irreversible choice),
/// not a functional restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    #[default]
    Normal,
    Destructive,
}

/// One selectable choice in a dialog.
///
/// Immutable once built; construct with [`Action::new`] and the builder
/// methods:
///
/// ```
/// use modalkit_core::Action;
///
/// let delete = Action::new("Delete").destructive();
/// let cancel = Action::new("Cancel").as_default();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    label: String,
    #[serde(default)]
    style: ActionStyle,
    #[serde(default)]
    default: bool,
    #[serde(default = "enabled_default")]
    enabled: bool,
}

fn enabled_default() -> bool {
    true
}

impl Action {
    /// Create a normal, enabled, non-default action. The label may be empty
    /// only for icon/placeholder variants.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ActionStyle::Normal,
            default: false,
            enabled: true,
        }
    }

    /// Mark the action as destructive (red emphasis).
    pub fn destructive(mut self) -> Self {
        self.style = ActionStyle::Destructive;
        self
    }

    /// Mark the action as the emphasized/primary choice. At most one action
    /// per list may be the default; [`ActionList::build`] enforces this.
    ///
    /// [`ActionList::build`]: crate::list::ActionList::build
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Render the action but make it non-selectable.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> ActionStyle {
        self.style
    }

    pub fn is_destructive(&self) -> bool {
        self.style == ActionStyle::Destructive
    }

    pub fn is_default(&self) -> bool {
        self.default
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// The separated cancel entry of an action sheet.
///
/// Logically distinct from the main action list: it renders in its own bottom
/// slot and is the target of a backdrop tap. Cancel entries are never
/// destructive. In alert dialogs "cancel" is just an ordinary [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAction {
    label: String,
    #[serde(default = "enabled_default")]
    enabled: bool,
    #[serde(default)]
    default_dismiss: bool,
}

impl CancelAction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            default_dismiss: false,
        }
    }

    /// Mark this entry as the dismiss-on-backdrop-tap target. When several
    /// cancel-like entries are supplied, [`resolve_cancel`] uses this flag to
    /// pick the designated one.
    ///
    /// [`resolve_cancel`]: crate::list::resolve_cancel
    pub fn default_dismiss(mut self) -> Self {
        self.default_dismiss = true;
        self
    }

    /// Render the entry but make it non-selectable; a disabled cancel also
    /// blocks backdrop dismissal.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_default_dismiss(&self) -> bool {
        self.default_dismiss
    }

    /// Demote to an ordinary action (used for cancel candidates that lost the
    /// designated-cancel tie-break).
    pub fn into_action(self) -> Action {
        let mut action = Action::new(self.label);
        if !self.enabled {
            action = action.disabled();
        }
        action
    }
}
