//! Plain-text rendering of the page view model for terminal front ends.

use crate::ui::viewmodel::PageViewModel;
use std::fmt::Write;

/// Summarizes the page as human-readable lines.
///
/// ```
/// use dataset_explorer::app::AppState;
/// use dataset_explorer::ui::summarize;
///
/// let text = summarize(&AppState::new(String::new()).compute_viewmodel());
/// assert!(text.contains("Selection (0): No datasets selected yet."));
/// ```
#[must_use]
pub fn summarize(vm: &PageViewModel) -> String {
    let mut out = String::new();

    let publication_type = vm
        .filters
        .publication_types
        .iter()
        .find(|option| option.selected)
        .map_or("Any", |option| option.label);
    let sorting = vm
        .filters
        .sortings
        .iter()
        .find(|option| option.selected)
        .map_or("", |option| option.label);
    let _ = writeln!(
        out,
        "Query: {:?} | Type: {publication_type} | Sort: {sorting}",
        vm.filters.query
    );

    if let Some(counter) = &vm.results.counter {
        let _ = writeln!(out, "{counter}");
    }
    if let Some(error) = &vm.results.error {
        let _ = writeln!(out, "! {error}");
    }
    if vm.results.not_found_visible {
        let _ = writeln!(out, "  (no datasets match these filters)");
    }

    for card in &vm.results.cards {
        let marker = if card.add_button.disabled { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} [{}] {} ({}) {}",
            card.id, card.title, card.publication_type.label, card.created_at
        );
        if !card.authors.is_empty() {
            let _ = writeln!(out, "      by {}", card.authors.join("; "));
        }
        if !card.tags.is_empty() {
            let tags: Vec<&str> = card.tags.iter().map(|tag| tag.label.as_str()).collect();
            let _ = writeln!(out, "      tags: {}", tags.join(", "));
        }
        let _ = writeln!(out, "      {} {}", card.download_label, card.download_href);
    }

    let selection = &vm.selection;
    match selection.empty_message {
        Some(message) => {
            let _ = writeln!(out, "Selection ({}): {message}", selection.count_badge);
        }
        None => {
            let _ = writeln!(out, "Selection ({}): ids={}", selection.count_badge, selection.hidden_ids);
            for row in &selection.rows {
                let pulse = if row.pulsing { " <- already selected" } else { "" };
                let _ = writeln!(out, "  - [{}] {}{pulse}", row.id, row.title);
            }
        }
    }

    if vm.create_modal.open {
        let _ = writeln!(out, "[create dialog open]");
    }
    if vm.download_modal.open {
        let _ = writeln!(out, "[download dialog open]");
    }
    if let Some(saved) = &vm.saved_archive {
        let _ = writeln!(out, "Saved {} ({} bytes)", saved.path, saved.bytes);
    }
    if let Some(alert) = &vm.alert {
        let _ = writeln!(out, "ALERT: {alert}");
    }

    out
}
