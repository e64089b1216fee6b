//! Filter widget renderers.

use crate::ui::helpers::{checked_attr, escape_html, selected_attr};
use crate::ui::ids;
use crate::ui::viewmodel::FiltersView;

/// Renders the search text field.
#[must_use]
pub fn render_query(filters: &FiltersView) -> String {
    format!(
        r#"<input type="search" id="{}" name="query" value="{}" placeholder="Search datasets">"#,
        ids::QUERY,
        escape_html(&filters.query)
    )
}

/// Renders the publication type `<select>` with the current choice selected.
#[must_use]
pub fn render_publication_type(filters: &FiltersView) -> String {
    let mut html = format!(r#"<select id="{0}" name="{0}">"#, ids::PUBLICATION_TYPE);
    for option in &filters.publication_types {
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            option.value,
            selected_attr(option.selected),
            escape_html(option.label)
        ));
    }
    html.push_str("</select>");
    html
}

/// Renders the sort order radio group.
#[must_use]
pub fn render_sorting(filters: &FiltersView) -> String {
    let mut html = format!(r#"<fieldset id="{}">"#, ids::SORTING);
    for option in &filters.sortings {
        html.push_str(&format!(
            r#"<label><input type="radio" name="sorting" value="{}"{}> {}</label>"#,
            option.value,
            checked_attr(option.selected),
            escape_html(option.label)
        ));
    }
    html.push_str("</fieldset>");
    html
}

/// Renders the clear-filters control.
#[must_use]
pub fn render_clear_filters() -> String {
    format!(r#"<button type="button" id="{}">Clear filters</button>"#, ids::CLEAR_FILTERS)
}
