//! Modal decision dialogs: the action model, list validation, and the
//! exactly-once choice-delivery contract.
//!
//! A caller describes a set of mutually exclusive choices as [`Action`]s,
//! validates them into an [`ActionList`], composes a [`DialogDescriptor`], and
//! hands it to a [`Presentation`]. The presentation owns the
//! shown/awaiting/dismissed lifecycle and guarantees that the caller's
//! [`ChoiceDispatcher`] sees at most one [`Choice`] per presentation, no matter
//! how the dialog is torn down.
//!
//! Rendering is not this crate's concern: the controller talks to the host
//! surface only through [`ModalHost`], and async callers can sit behind
//! [`DialogManager`] instead of implementing a dispatcher.

pub mod action;
pub mod bus;
pub mod controller;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod list;
pub mod manager;
pub mod snapshot;

pub use action::{Action, ActionStyle, CancelAction};
pub use bus::{Bus, BusEvent, ChoiceDelivered, DialogDismissed, DialogRequested, Event};
pub use controller::{Phase, Presentation};
pub use descriptor::{DialogBody, DialogDescriptor};
pub use dispatch::{ChannelDispatcher, Choice, ChoiceDispatcher};
pub use error::{
    ControllerError, DialogError, DialogResult, SnapshotError, ValidationError,
};
pub use host::{MemoryHost, ModalHost, NullHost};
pub use list::{resolve_cancel, ActionList, LabelConvention};
pub use manager::DialogManager;
pub use snapshot::PresentationSnapshot;
