//! Alert banner and saved-archive notice.

use crate::ui::helpers::{escape_html, hidden_attr};
use crate::ui::ids;
use crate::ui::viewmodel::SavedArchiveView;

/// Renders the blocking alert, hidden when nothing is pending.
#[must_use]
pub fn render_alert(alert: Option<&str>) -> String {
    format!(
        r#"<div id="{}" role="alertdialog"{}><p>{}</p><button type="button" class="alert-dismiss">OK</button></div>"#,
        ids::ALERT,
        hidden_attr(alert.is_some()),
        escape_html(alert.unwrap_or_default())
    )
}

/// Renders the notice shown after an archive was saved.
#[must_use]
pub fn render_saved_archive(saved: Option<&SavedArchiveView>) -> String {
    let text = saved.map_or_else(String::new, |saved| {
        format!("Saved {} ({} bytes)", saved.path, saved.bytes)
    });
    format!(
        r#"<p id="{}"{}>{}</p>"#,
        ids::SAVED_ARCHIVE,
        hidden_attr(saved.is_some()),
        escape_html(&text)
    )
}
