//! Terminal rendering for modalkit dialogs.
//!
//! This crate supplies the view/input side of the contract:
//! - [`AlertDialog`] - centered forced-choice alert
//! - [`SheetDialog`] - bottom-anchored action sheet with a cancel slot
//! - [`Theme`] - Cupertino-flavored palette
//! - [`event`] - terminal event loop
//!
//! Widgets never talk to a dispatcher. They translate key events into
//! outcomes; the application routes outcomes into a
//! [`Presentation`](modalkit_core::Presentation), which owns delivery.

pub mod alert;
pub mod common;
pub mod event;
pub mod sheet;
pub mod theme;

pub use alert::{AlertDialog, AlertOutcome};
pub use common::{bottom_rect, centered_rect};
pub use event::{is_quit, Event, EventHandler, EventLoopHandle};
pub use sheet::{SheetCursor, SheetDialog, SheetOutcome};
pub use theme::Theme;
