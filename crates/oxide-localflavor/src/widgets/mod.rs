//! Widgets that render form inputs as HTML.

mod select;

pub use select::Select;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// HTML attributes applied to a widget, rendered in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Returns whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns these attributes with `extra` layered on top.
    #[must_use]
    pub fn merged(&self, extra: &Self) -> Self {
        let mut attrs = self.attrs.clone();
        attrs.extend(extra.attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { attrs }
    }

    /// Renders attributes as an HTML attribute string with a leading space.
    ///
    /// Returns an empty string when there are no attributes. Keys that are
    /// not valid attribute names are skipped.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .filter(|(k, _)| {
                let valid = is_attr_name(k);
                if !valid {
                    debug!(name = ?k, "skipped invalid widget attribute name");
                }
                valid
            })
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }
}

/// Returns whether `name` can be written as an HTML attribute name.
pub fn is_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '`')
        })
}

/// Trait for form widgets that render HTML inputs.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The current value (if any)
    /// * `attrs` - Attributes layered over the widget's own
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// A single-line text input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The widget's own attributes.
    pub attrs: WidgetAttrs,
}

impl TextInput {
    /// Creates a text input with the given attributes.
    pub fn new(attrs: Option<WidgetAttrs>) -> Self {
        Self {
            attrs: attrs.unwrap_or_default(),
        }
    }
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .filter(|v| !v.is_empty())
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let attrs = self.attrs.merged(attrs).to_html();
        format!(
            r#"<input type="text" name="{}"{value_attr}{attrs}>"#,
            html_escape(name)
        )
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
