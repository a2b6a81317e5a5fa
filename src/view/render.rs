//! Markup rendering
//!
//! Pure string producers for the items list and the statistics fields. The
//! host page supplies the containers; these functions supply their contents.

use crate::record::{Listing, Record};

/// Placeholder shown when the store holds no records
pub const EMPTY_STORE_MESSAGE: &str = "No items stored yet. Add your first item above!";

/// Placeholder shown when a filter matches nothing
pub const NO_MATCHES_MESSAGE: &str = "No items match your search.";

/// Render the items-list container contents for a listing
pub fn items_list(listing: &Listing) -> String {
    match listing {
        Listing::Empty => placeholder(EMPTY_STORE_MESSAGE),
        Listing::NoMatches => placeholder(NO_MATCHES_MESSAGE),
        Listing::Records(records) => records.iter().map(item_card).collect(),
    }
}

/// Render one record as a card
///
/// User text is escaped; the delete control carries the record id in
/// `data-id` so click events can be routed back to the record.
pub fn item_card(record: &Record) -> String {
    format!(
        concat!(
            "<div class=\"item-card\">",
            "<div class=\"item-header\">",
            "<span class=\"item-key\">{key}</span>",
            "<button class=\"btn btn-delete\" data-id=\"{id}\">Delete</button>",
            "</div>",
            "<div class=\"item-value\">{value}</div>",
            "<div class=\"item-meta\">Saved on: {saved}</div>",
            "</div>"
        ),
        key = escape_html(&record.key),
        id = record.id,
        value = escape_html(&record.value),
        saved = record.created_at_display(),
    )
}

/// Render a placeholder message
fn placeholder(message: &str) -> String {
    format!("<p class=\"empty-message\">{}</p>", message)
}

/// Format a byte count as kilobytes with two decimals
pub fn storage_used(bytes: usize) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Escape text for embedding in markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
