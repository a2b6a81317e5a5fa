//! Input event definitions
//!
//! Represents the user input events the host page forwards to the widget.

use crate::record::RecordId;

/// A user input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The key input field changed
    KeyInput(String),

    /// The value input field changed
    ValueInput(String),

    /// The form was submitted
    FormSubmit,

    /// The search field changed (fired on every keystroke)
    SearchInput(String),

    /// A delete control was clicked
    DeleteClick(RecordId),
}
