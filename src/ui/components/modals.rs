//! Modal dialog renderers.

use crate::domain::PublicationType;
use crate::ui::helpers::{escape_html, hidden_attr};
use crate::ui::ids;
use crate::ui::viewmodel::ModalView;

/// Renders the create-from-cart dialog.
///
/// The form posts the selection through the hidden `selected_datasets` field,
/// which lives in the selection panel and is shared with this form.
#[must_use]
pub fn render_create_modal(modal: &ModalView) -> String {
    let mut html = format!(
        r#"<div id="{}" class="modal" role="dialog"{}><form enctype="multipart/form-data">"#,
        ids::CREATE_MODAL,
        hidden_attr(modal.open)
    );
    html.push_str(r#"<input type="text" name="title" required>"#);
    html.push_str(r#"<textarea name="description"></textarea>"#);

    html.push_str(r#"<select name="publication_type">"#);
    for publication_type in PublicationType::ALL {
        html.push_str(&format!(
            r#"<option value="{}">{}</option>"#,
            publication_type.value(),
            escape_html(publication_type.label())
        ));
    }
    html.push_str("</select>");

    html.push_str(r#"<input type="text" name="tags" placeholder="Separated by commas">"#);
    html.push_str(r#"<input type="file" name="files" multiple>"#);
    html.push_str(r#"<button type="submit">Create</button><button type="button" class="modal-close">Close</button>"#);
    html.push_str("</form></div>");
    html
}

/// Renders the download-cart dialog.
#[must_use]
pub fn render_download_modal(modal: &ModalView) -> String {
    format!(
        concat!(
            r#"<div id="{}" class="modal" role="dialog"{}><form>"#,
            r#"<input type="text" name="filename" placeholder="models">"#,
            r#"<button type="submit">Download</button><button type="button" class="modal-close">Close</button>"#,
            "</form></div>"
        ),
        ids::DOWNLOAD_MODAL,
        hidden_attr(modal.open)
    )
}
