//! Result area renderers: cards, counter, not-found indicator and error banner.
//!
//! Card markup carries `data-*` attributes for the interactive parts (badges
//! re-trigger a search, the add control feeds the selection store) instead of
//! inline handlers, so no dataset text is ever placed in script context.

use crate::ui::helpers::{disabled_attr, escape_html, hidden_attr};
use crate::ui::ids;
use crate::ui::viewmodel::{BadgeView, DatasetCard, ResultsView};

/// Renders the results container with one card per dataset, in order.
#[must_use]
pub fn render_results(results: &ResultsView) -> String {
    let mut html = format!(r#"<div id="{}">"#, ids::RESULTS);
    for card in &results.cards {
        html.push_str(&render_card(card));
    }
    html.push_str("</div>");
    html
}

/// Renders the results counter caption. Empty before the first search.
#[must_use]
pub fn render_counter(results: &ResultsView) -> String {
    format!(
        r#"<span id="{}">{}</span>"#,
        ids::RESULTS_NUMBER,
        escape_html(results.counter.as_deref().unwrap_or_default())
    )
}

/// Renders the "not found" indicator, hidden unless the latest search was empty.
#[must_use]
pub fn render_not_found(results: &ResultsView) -> String {
    format!(
        r#"<div id="{}"{}>No datasets found</div>"#,
        ids::RESULTS_NOT_FOUND,
        hidden_attr(results.not_found_visible)
    )
}

/// Renders the inline search error banner.
#[must_use]
pub fn render_error(results: &ResultsView) -> String {
    format!(
        r#"<div id="{}" role="alert"{}>{}</div>"#,
        ids::RESULTS_ERROR,
        hidden_attr(results.error.is_some()),
        escape_html(results.error.as_deref().unwrap_or_default())
    )
}

fn render_badge(class: &str, badge: &BadgeView) -> String {
    let label = escape_html(&badge.label);
    format!(r#"<span class="badge {class}" data-query="{label}">{label}</span>"#)
}

/// Renders one dataset card.
#[must_use]
pub fn render_card(card: &DatasetCard) -> String {
    let mut html = format!(r#"<div class="card" data-dataset-id="{}">"#, card.id);

    html.push_str(&format!(
        r#"<h3><a href="{}">{}</a></h3>"#,
        escape_html(&card.title_href),
        escape_html(&card.title)
    ));
    html.push_str(&render_badge("publication-type", &card.publication_type));
    html.push_str(&format!(
        r#"<p class="created-at">{}</p>"#,
        escape_html(&card.created_at)
    ));
    html.push_str(&format!(
        r#"<p class="description">{}</p>"#,
        escape_html(&card.description)
    ));

    html.push_str(r#"<div class="authors">"#);
    for author in &card.authors {
        html.push_str(&format!("<p>{}</p>", escape_html(author)));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="tags">"#);
    for tag in &card.tags {
        html.push_str(&render_badge("tag", tag));
    }
    html.push_str("</div>");

    html.push_str(&format!(
        r#"<a class="view" href="{}">View dataset</a>"#,
        escape_html(&card.view_href)
    ));
    html.push_str(&format!(
        r#"<a class="download" href="{}">{}</a>"#,
        escape_html(&card.download_href),
        escape_html(&card.download_label)
    ));
    html.push_str(&format!(
        r#"<button type="button" id="{}" class="btn-add-to-cart" data-dataset-id="{}" data-dataset-title="{}"{}>{}</button>"#,
        ids::add_button(card.id),
        card.id,
        escape_html(&card.title),
        disabled_attr(!card.add_button.disabled),
        card.add_button.label
    ));

    html.push_str("</div>");
    html
}
