//! Action-list validation and normalization.

use crate::action::{Action, CancelAction};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Convention applied when building a list from plain labels.
///
/// The iOS alert style puts the most prominent choice last, so plain-label
/// call sites conventionally get their final entry emphasized. The convention
/// is explicit here rather than inferred: callers that do not want it pass
/// [`LabelConvention::NoDefault`]. Plain labels never get destructive styling
/// implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelConvention {
    /// The last entry is the emphasized/primary action.
    #[default]
    LastIsDefault,
    /// No entry is emphasized.
    NoDefault,
}

/// A validated, order-preserving, non-empty list of actions.
///
/// Invariants held by every reachable value:
/// - at least one action;
/// - at most one action marked default;
/// - ordering exactly as supplied: never reordered, sorted, or deduplicated.
///   Duplicate labels are legal and stay independently selectable, identity
///   is positional.
///
/// Deserialization runs the same validation, so a persisted blob cannot
/// smuggle in a list the builder would have rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Action>", into = "Vec<Action>")]
pub struct ActionList {
    actions: Vec<Action>,
}

impl ActionList {
    /// Validate a caller-supplied action sequence.
    pub fn build(actions: Vec<Action>) -> Result<Self, ValidationError> {
        if actions.is_empty() {
            return Err(ValidationError::EmptyActionList);
        }

        let mut default_at: Option<usize> = None;
        for (index, action) in actions.iter().enumerate() {
            if action.is_default() {
                match default_at {
                    None => default_at = Some(index),
                    Some(first) => {
                        return Err(ValidationError::AmbiguousDefault {
                            first,
                            second: index,
                        })
                    }
                }
                if action.is_destructive() {
                    // Legal but unusual: the emphasized choice is the dangerous one.
                    tracing::warn!(
                        index,
                        label = action.label(),
                        "action is both destructive and default"
                    );
                }
            }
        }

        Ok(Self { actions })
    }

    /// Build a list from plain labels, applying the given convention.
    pub fn from_labels<I, S>(labels: I, convention: LabelConvention) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut actions: Vec<Action> = labels.into_iter().map(Action::new).collect();
        if convention == LabelConvention::LastIsDefault {
            if let Some(last) = actions.pop() {
                actions.push(last.as_default());
            }
        }
        Self::build(actions)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Position of the default action, if one was marked.
    pub fn default_index(&self) -> Option<usize> {
        self.actions.iter().position(Action::is_default)
    }

    /// Append demoted cancel candidates. Callers guarantee none of them is
    /// marked default, so the at-most-one-default invariant is preserved.
    pub(crate) fn append(&mut self, extra: Vec<Action>) {
        debug_assert!(extra.iter().all(|a| !a.is_default()));
        self.actions.extend(extra);
    }
}

impl TryFrom<Vec<Action>> for ActionList {
    type Error = ValidationError;

    fn try_from(actions: Vec<Action>) -> Result<Self, Self::Error> {
        Self::build(actions)
    }
}

impl From<ActionList> for Vec<Action> {
    fn from(list: ActionList) -> Self {
        list.actions
    }
}

/// Resolve which of the supplied cancel-like entries is the designated
/// backdrop-dismiss target of an action sheet.
///
/// The first entry flagged with `default_dismiss` wins; every other candidate
/// is demoted to an ordinary action, in supplied order. With no flagged entry
/// the first candidate is the cancel slot (a lone supplied cancel is the
/// cancel regardless of its flag).
pub fn resolve_cancel(candidates: Vec<CancelAction>) -> (Option<CancelAction>, Vec<Action>) {
    if candidates.is_empty() {
        return (None, Vec::new());
    }

    let chosen = candidates
        .iter()
        .position(CancelAction::is_default_dismiss)
        .unwrap_or(0);

    let mut cancel = None;
    let mut demoted = Vec::new();
    for (index, candidate) in candidates.into_iter().enumerate() {
        if index == chosen {
            cancel = Some(candidate);
        } else {
            if candidate.is_default_dismiss() {
                tracing::debug!(
                    index,
                    label = candidate.label(),
                    "extra default-dismiss cancel demoted to ordinary action"
                );
            }
            demoted.push(candidate.into_action());
        }
    }

    (cancel, demoted)
}
