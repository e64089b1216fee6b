//! Shared rendering utilities and helpers.
//!
//! Every piece of text that reaches HTML goes through [`escape_html`], both in
//! element bodies and in attribute values. Components never interpolate raw
//! dataset fields.
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::ui::helpers::escape_html;
//!
//! assert_eq!(escape_html("<b>\"R&D\"</b>"), "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;");
//! ```

/// Escapes HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// ` hidden` when the element must not be shown, empty otherwise.
#[must_use]
pub const fn hidden_attr(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

/// ` disabled` for a disabled control, empty otherwise.
#[must_use]
pub const fn disabled_attr(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " disabled"
    }
}

/// ` selected` for the chosen `<option>`, empty otherwise.
#[must_use]
pub const fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}

/// ` checked` for the chosen radio button, empty otherwise.
#[must_use]
pub const fn checked_attr(checked: bool) -> &'static str {
    if checked {
        " checked"
    } else {
        ""
    }
}
