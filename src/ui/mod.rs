//! UI Module
//!
//! Event wiring between the host page and the storage manager.
//!
//! ## Responsibilities
//! - Define the input events the host page forwards
//! - Dispatch events to storage operations
//! - Own the bound view state (inputs, items list, stat fields)
//! - Gate deletes behind an injected confirmation capability
//!
//! ## Events
//! - `KeyInput` / `ValueInput` — form field edits
//! - `FormSubmit`             — create from the current form fields
//! - `SearchInput`            — per-keystroke filter, no debounce
//! - `DeleteClick`            — delete control click, carries the record id

mod confirm;
mod event;
mod widget;

pub use confirm::{AutoConfirm, Confirm};
pub use event::UiEvent;
pub use widget::{
    ViewState, Widget, DELETED_MESSAGE, DELETE_PROMPT, SAVED_MESSAGE, STORAGE_FAILURE_MESSAGE,
    VALIDATION_MESSAGE,
};
