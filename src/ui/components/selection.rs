//! Selection panel renderers.
//!
//! All of these read the same [`SelectionView`], which is derived from the
//! selection store in one pass, so badges, list, hidden field and workflow
//! triggers can never disagree.

use crate::ui::helpers::{disabled_attr, escape_html};
use crate::ui::ids;
use crate::ui::viewmodel::SelectionView;

/// Renders the selection list: placeholder when empty, else one removable row per entry.
#[must_use]
pub fn render_list(selection: &SelectionView) -> String {
    let mut html = format!(r#"<ul id="{}">"#, ids::SELECTED_LIST);

    if let Some(message) = selection.empty_message {
        html.push_str(&format!(
            r#"<li id="{}" class="text-muted">{}</li>"#,
            ids::EMPTY_CART_MESSAGE,
            escape_html(message)
        ));
    }

    for row in &selection.rows {
        let class = if row.pulsing { "selected-dataset pulse" } else { "selected-dataset" };
        html.push_str(&format!(
            r#"<li id="{}" class="{class}"><span>{}</span><button type="button" class="btn-remove-from-cart" data-dataset-id="{}" aria-label="Remove">&times;</button></li>"#,
            ids::selection_row(row.id),
            escape_html(&row.title),
            row.id
        ));
    }

    html.push_str("</ul>");
    html
}

/// Renders a count badge.
#[must_use]
pub fn render_badge(id: &str, count: usize) -> String {
    format!(r#"<span id="{id}" class="badge">{count}</span>"#)
}

/// Renders the hidden form field carrying the comma-joined selected ids.
#[must_use]
pub fn render_hidden_ids(selection: &SelectionView) -> String {
    format!(
        r#"<input type="hidden" id="{0}" name="selected_datasets" value="{1}">"#,
        ids::HIDDEN_IDS,
        escape_html(&selection.hidden_ids)
    )
}

/// Renders the create-from-cart trigger.
#[must_use]
pub fn render_create_button(selection: &SelectionView) -> String {
    format!(
        r#"<button type="button" id="{}"{}>Create my own dataset</button>"#,
        ids::CREATE_BUTTON,
        disabled_attr(selection.create_enabled)
    )
}

/// Renders the download-cart trigger.
#[must_use]
pub fn render_download_button(selection: &SelectionView) -> String {
    format!(
        r#"<button type="button" id="{}"{}>Download selection</button>"#,
        ids::DOWNLOAD_BUTTON,
        disabled_attr(selection.download_enabled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::domain::DatasetId;

    #[test]
    fn test_empty_selection_renders_placeholder_and_disabled_triggers() {
        let selection = AppState::new(String::new()).compute_viewmodel().selection;

        assert_eq!(
            render_list(&selection),
            r#"<ul id="selected-datasets-list"><li id="empty-cart-message" class="text-muted">No datasets selected yet.</li></ul>"#
        );
        assert!(render_create_button(&selection).contains(" disabled>"));
        assert!(render_download_button(&selection).contains(" disabled>"));
        assert!(render_hidden_ids(&selection).contains(r#"value="""#));
    }

    #[test]
    fn test_rows_follow_insertion_order() {
        let mut state = AppState::new(String::new());
        state.selection.add(DatasetId(3), "Three <3>");
        state.selection.add(DatasetId(1), "One");
        state.pulsing.insert(DatasetId(1));
        let selection = state.compute_viewmodel().selection;

        let html = render_list(&selection);
        let three = html.find("selected-dataset-3").unwrap();
        let one = html.find("selected-dataset-1").unwrap();
        assert!(three < one);
        assert!(html.contains("Three &lt;3&gt;"));
        assert!(html.contains(r#"id="selected-dataset-1" class="selected-dataset pulse""#));
        assert!(!html.contains(ids::EMPTY_CART_MESSAGE));

        assert_eq!(render_badge(ids::CART_COUNT_BADGE, selection.count_badge), r#"<span id="cart-count-badge" class="badge">2</span>"#);
        assert!(render_hidden_ids(&selection).contains(r#"value="3,1""#));
        assert!(!render_create_button(&selection).contains("disabled"));
    }
}
