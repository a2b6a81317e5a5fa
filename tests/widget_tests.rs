//! Tests for the Widget
//!
//! These tests verify:
//! - Initial render over an empty store
//! - Form submission (create, clear, refresh, notify)
//! - Validation failures surfaced as error notifications
//! - Per-keystroke search filtering
//! - Confirmed, declined, and stale delete clicks
//! - Markup escaping of user text
//! - Notification stacking and sweeping
//! - Storage failures surfaced as a generic error notification

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use notekv::store::{Backing, MemoryBacking};
use notekv::ui::{
    AutoConfirm, Confirm, DELETED_MESSAGE, SAVED_MESSAGE, STORAGE_FAILURE_MESSAGE,
    VALIDATION_MESSAGE,
};
use notekv::view::render::{EMPTY_STORE_MESSAGE, NO_MATCHES_MESSAGE};
use notekv::view::NotificationKind;
use notekv::{Config, Listing, RecordId, StorageManager, UiEvent, Widget};

// =============================================================================
// Helper Functions
// =============================================================================

fn test_config() -> Config {
    Config::builder().storage_key("test.records").build()
}

fn widget_with_confirm(confirm: Box<dyn Confirm>) -> Widget {
    let config = test_config();
    let manager = StorageManager::open(Box::new(MemoryBacking::new()), &config).unwrap();
    Widget::new(manager, confirm, &config).unwrap()
}

fn test_widget() -> Widget {
    widget_with_confirm(Box::new(AutoConfirm))
}

fn submit(widget: &mut Widget, key: &str, value: &str) {
    widget.dispatch(UiEvent::KeyInput(key.to_string())).unwrap();
    widget
        .dispatch(UiEvent::ValueInput(value.to_string()))
        .unwrap();
    widget.dispatch(UiEvent::FormSubmit).unwrap();
}

fn first_record_id(widget: &Widget) -> RecordId {
    match widget.manager().list("").unwrap() {
        Listing::Records(records) => records[0].id,
        other => panic!("expected records, got {:?}", other),
    }
}

fn clear_notifications(widget: &mut Widget) {
    widget
        .notifications_mut()
        .sweep_at(Instant::now() + Duration::from_secs(60));
}

// =============================================================================
// Initial Render Tests
// =============================================================================

#[test]
fn test_initial_view_over_empty_store() {
    let widget = test_widget();

    assert!(widget.view().items_list.contains(EMPTY_STORE_MESSAGE));
    assert_eq!(widget.view().total_items, "0");
    assert_eq!(widget.view().storage_used, "0.00 KB");
    assert!(widget.notifications().is_empty());
}

// =============================================================================
// Form Submission Tests
// =============================================================================

#[test]
fn test_submit_creates_record_and_refreshes() {
    let mut widget = test_widget();

    submit(&mut widget, "project", "idea A");

    assert!(widget.view().items_list.contains("project"));
    assert!(widget.view().items_list.contains("idea A"));
    assert_eq!(widget.view().total_items, "1");
    assert!(widget.view().storage_used.ends_with(" KB"));

    // Inputs are cleared after a successful save
    assert_eq!(widget.view().key_input, "");
    assert_eq!(widget.view().value_input, "");

    let active = widget.notifications().active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].message, SAVED_MESSAGE);
    assert_eq!(active[0].kind, NotificationKind::Success);
}

#[test]
fn test_submit_empty_fields_is_rejected() {
    let mut widget = test_widget();

    widget.dispatch(UiEvent::KeyInput("project".to_string())).unwrap();
    widget.dispatch(UiEvent::ValueInput("   ".to_string())).unwrap();
    widget.dispatch(UiEvent::FormSubmit).unwrap();

    assert_eq!(widget.view().total_items, "0");
    assert!(widget.view().items_list.contains(EMPTY_STORE_MESSAGE));

    let active = widget.notifications().active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].message, VALIDATION_MESSAGE);
    assert_eq!(active[0].kind, NotificationKind::Error);
    assert_eq!(active[0].kind.css_class(), "notification notification-error");
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_filters_rendered_items() {
    let mut widget = test_widget();
    submit(&mut widget, "project", "idea A");
    submit(&mut widget, "groceries", "milk");

    widget.dispatch(UiEvent::SearchInput("idea".to_string())).unwrap();

    assert!(widget.view().items_list.contains("project"));
    assert!(!widget.view().items_list.contains("groceries"));
    assert_eq!(widget.view().search_input, "idea");
}

#[test]
fn test_search_with_no_matches_shows_placeholder() {
    let mut widget = test_widget();
    submit(&mut widget, "project", "idea A");

    widget.dispatch(UiEvent::SearchInput("zzz".to_string())).unwrap();

    assert!(widget.view().items_list.contains(NO_MATCHES_MESSAGE));
}

#[test]
fn test_refresh_after_submit_is_unfiltered() {
    let mut widget = test_widget();
    submit(&mut widget, "project", "idea A");

    widget.dispatch(UiEvent::SearchInput("zzz".to_string())).unwrap();
    submit(&mut widget, "todo", "idea B");

    // A mutation re-renders the full list even while the search box has text
    assert!(widget.view().items_list.contains("project"));
    assert!(widget.view().items_list.contains("todo"));
}

#[test]
fn test_search_does_not_change_stats() {
    let mut widget = test_widget();
    submit(&mut widget, "project", "idea A");

    widget.dispatch(UiEvent::SearchInput("zzz".to_string())).unwrap();

    assert_eq!(widget.view().total_items, "1");
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_click_confirmed() {
    let mut widget = test_widget();
    submit(&mut widget, "project", "idea A");
    clear_notifications(&mut widget);

    let id = first_record_id(&widget);
    widget.dispatch(UiEvent::DeleteClick(id)).unwrap();

    assert_eq!(widget.view().total_items, "0");
    assert!(widget.view().items_list.contains(EMPTY_STORE_MESSAGE));

    let active = widget.notifications().active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].message, DELETED_MESSAGE);
}

#[test]
fn test_delete_click_declined_is_silent_noop() {
    let mut widget = widget_with_confirm(Box::new(|_: &str| false));
    submit(&mut widget, "project", "idea A");
    clear_notifications(&mut widget);

    let id = first_record_id(&widget);
    widget.dispatch(UiEvent::DeleteClick(id)).unwrap();

    assert_eq!(widget.view().total_items, "1");
    assert!(widget.notifications().is_empty());
}

#[test]
fn test_stale_delete_click_is_ignored_without_prompt() {
    let prompts = Rc::new(Cell::new(0usize));
    let seen = Rc::clone(&prompts);
    let confirm = move |_: &str| {
        seen.set(seen.get() + 1);
        true
    };

    let mut widget = widget_with_confirm(Box::new(confirm));
    submit(&mut widget, "project", "idea A");
    clear_notifications(&mut widget);

    // No rendered delete control carries this id
    widget.dispatch(UiEvent::DeleteClick(9999)).unwrap();

    assert_eq!(prompts.get(), 0);
    assert_eq!(widget.view().total_items, "1");
    assert!(widget.notifications().is_empty());
}

#[test]
fn test_rendered_cards_carry_delete_bindings() {
    let mut widget = test_widget();
    submit(&mut widget, "project", "idea A");

    let id = first_record_id(&widget);
    let expected = format!("data-id=\"{}\"", id);

    assert!(widget.view().items_list.contains(&expected));
}

// =============================================================================
// Markup Escaping Tests
// =============================================================================

#[test]
fn test_user_text_is_escaped_in_cards() {
    let mut widget = test_widget();
    submit(&mut widget, "<b>bold</b>", "a & \"b\"");

    let markup = &widget.view().items_list;

    assert!(markup.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(markup.contains("a &amp; &quot;b&quot;"));
    assert!(!markup.contains("<b>bold</b>"));
}

// =============================================================================
// Notification Tests
// =============================================================================

#[test]
fn test_notifications_stack_without_deduplication() {
    let mut widget = test_widget();

    submit(&mut widget, "a", "1");
    submit(&mut widget, "b", "2");

    let active = widget.notifications().active();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].message, SAVED_MESSAGE);
    assert_eq!(active[1].message, SAVED_MESSAGE);
}

#[test]
fn test_notifications_expire_after_ttl() {
    let mut widget = test_widget();
    submit(&mut widget, "a", "1");

    // Not yet expired one second in
    widget
        .notifications_mut()
        .sweep_at(Instant::now() + Duration::from_secs(1));
    assert_eq!(widget.notifications().len(), 1);

    // Gone once the 3-second TTL has passed
    widget
        .notifications_mut()
        .sweep_at(Instant::now() + Duration::from_secs(4));
    assert!(widget.notifications().is_empty());
}

// =============================================================================
// Storage Failure Tests
// =============================================================================

/// Backing whose writes always fail
struct ReadOnlyBacking;

impl Backing for ReadOnlyBacking {
    fn get_item(&self, _key: &str) -> notekv::Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> notekv::Result<()> {
        Err(notekv::NoteKvError::Storage("write refused".to_string()))
    }
}

#[test]
fn test_storage_failure_surfaces_generic_error_notification() {
    let config = test_config();
    let manager = StorageManager::open(Box::new(ReadOnlyBacking), &config).unwrap();
    let mut widget = Widget::new(manager, Box::new(AutoConfirm), &config).unwrap();

    widget.dispatch(UiEvent::KeyInput("project".to_string())).unwrap();
    widget.dispatch(UiEvent::ValueInput("idea A".to_string())).unwrap();
    let outcome = widget.dispatch(UiEvent::FormSubmit);

    assert!(outcome.is_err());

    let active = widget.notifications().active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].message, STORAGE_FAILURE_MESSAGE);
    assert_eq!(active[0].kind, NotificationKind::Error);
}
