//! Widget implementation
//!
//! The single component all control flow passes through: dispatches input
//! events to the storage manager, re-renders the view on every mutation
//! (full replace), and surfaces outcomes as notifications.

use crate::config::Config;
use crate::error::Result;
use crate::manager::StorageManager;
use crate::record::{Listing, RecordId};
use crate::ui::{Confirm, UiEvent};
use crate::view::render;
use crate::view::{NotificationHub, NotificationKind};

/// Notification shown after a successful create
pub const SAVED_MESSAGE: &str = "Item saved successfully!";

/// Notification shown after a successful delete
pub const DELETED_MESSAGE: &str = "Item deleted successfully!";

/// Notification shown when the form is submitted with an empty field
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields";

/// Notification shown when the backing store fails mid-operation
pub const STORAGE_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Prompt presented before a delete proceeds
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// Contents of the host page elements the widget binds to
///
/// The host renders these verbatim; the widget owns their values.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Key input field
    pub key_input: String,

    /// Value input field
    pub value_input: String,

    /// Search input field
    pub search_input: String,

    /// Items-list container markup
    pub items_list: String,

    /// Item-count statistic field
    pub total_items: String,

    /// Storage-size statistic field
    pub storage_used: String,
}

/// The note-keeping widget
pub struct Widget {
    manager: StorageManager,
    confirm: Box<dyn Confirm>,
    notifications: NotificationHub,
    view: ViewState,

    /// Ids of the delete controls in the current items-list markup.
    /// Refreshed on every render; a click on an id not listed here belongs
    /// to a control that no longer exists and is discarded.
    delete_bindings: Vec<RecordId>,
}

impl Widget {
    /// Wire a widget over the given manager and render the initial view
    pub fn new(manager: StorageManager, confirm: Box<dyn Confirm>, config: &Config) -> Result<Self> {
        let mut widget = Self {
            manager,
            confirm,
            notifications: NotificationHub::new(config.notification_ttl),
            view: ViewState::default(),
            delete_bindings: Vec::new(),
        };

        widget.refresh()?;

        Ok(widget)
    }

    /// Dispatch one input event
    ///
    /// Runs to completion synchronously. Validation failures are reported
    /// via notification and are not errors; a backing-store failure aborts
    /// the operation, surfaces a generic error notification, and is
    /// returned for the host to act on.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        self.notifications.sweep();

        let outcome = match event {
            UiEvent::KeyInput(text) => {
                self.view.key_input = text;
                Ok(())
            }
            UiEvent::ValueInput(text) => {
                self.view.value_input = text;
                Ok(())
            }
            UiEvent::FormSubmit => self.submit(),
            UiEvent::SearchInput(text) => {
                self.view.search_input = text.clone();
                self.render_items(&text)
            }
            UiEvent::DeleteClick(id) => self.delete(id),
        };

        if outcome.is_err() {
            self.notify(STORAGE_FAILURE_MESSAGE, NotificationKind::Error);
        }

        outcome
    }

    /// Create a record from the current form fields
    fn submit(&mut self) -> Result<()> {
        match self
            .manager
            .create(&self.view.key_input, &self.view.value_input)
        {
            Ok(_) => {
                self.view.key_input.clear();
                self.view.value_input.clear();
                self.refresh()?;
                self.notify(SAVED_MESSAGE, NotificationKind::Success);
                Ok(())
            }
            Err(e) if e.is_validation() => {
                self.notify(VALIDATION_MESSAGE, NotificationKind::Error);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Delete the record behind a clicked delete control
    fn delete(&mut self, id: RecordId) -> Result<()> {
        // Stale handler: the control was removed by an earlier render
        if !self.delete_bindings.contains(&id) {
            return Ok(());
        }

        if !self.confirm.confirm(DELETE_PROMPT) {
            return Ok(());
        }

        self.manager.delete(id)?;
        self.refresh()?;
        self.notify(DELETED_MESSAGE, NotificationKind::Success);

        Ok(())
    }

    /// Re-render the items list unfiltered and refresh statistics
    fn refresh(&mut self) -> Result<()> {
        self.render_items("")?;
        self.refresh_stats()
    }

    /// Replace the items-list markup and re-bind delete controls
    fn render_items(&mut self, filter: &str) -> Result<()> {
        let listing = self.manager.list(filter)?;

        self.delete_bindings = match &listing {
            Listing::Records(records) => records.iter().map(|r| r.id).collect(),
            _ => Vec::new(),
        };
        self.view.items_list = render::items_list(&listing);

        Ok(())
    }

    /// Recompute and write the two statistic fields
    fn refresh_stats(&mut self) -> Result<()> {
        let stats = self.manager.stats()?;

        self.view.total_items = stats.count.to_string();
        self.view.storage_used = render::storage_used(stats.bytes);

        Ok(())
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifications.push(message, kind);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current contents of the bound host elements
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Currently visible notifications
    pub fn notifications(&self) -> &NotificationHub {
        &self.notifications
    }

    /// Mutable notification hub (for host-driven sweeps)
    pub fn notifications_mut(&mut self) -> &mut NotificationHub {
        &mut self.notifications
    }

    /// The underlying storage manager
    pub fn manager(&self) -> &StorageManager {
        &self.manager
    }
}
