//! Select widget.

use std::fmt;

use super::{html_escape, Widget, WidgetAttrs};
use crate::i18n::{no_translation, SharedTranslator};

/// A dropdown over a fixed list of choices.
///
/// Labels are message ids, translated each time the widget renders. No
/// blank option is added; the options are exactly the choices, in order.
#[derive(Clone)]
pub struct Select {
    /// The widget's own attributes.
    pub attrs: WidgetAttrs,
    choices: Vec<(String, String)>,
    translator: SharedTranslator,
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("attrs", &self.attrs)
            .field("choices", &self.choices)
            .finish_non_exhaustive()
    }
}

impl Select {
    /// Creates a select with the given attributes and choices.
    pub fn new<V, L>(attrs: Option<WidgetAttrs>, choices: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        Self {
            attrs: attrs.unwrap_or_default(),
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            translator: no_translation(),
        }
    }

    /// Sets the translator used for option labels.
    #[must_use]
    pub fn translator(mut self, translator: SharedTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Returns the choices as (value, untranslated label) pairs.
    pub fn choices(&self) -> &[(String, String)] {
        &self.choices
    }

    /// Returns the options as rendered: (value, translated label) pairs.
    pub fn options(&self) -> Vec<(String, String)> {
        self.choices
            .iter()
            .map(|(value, label)| (value.clone(), self.translator.gettext(label).into_owned()))
            .collect()
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let attrs = self.attrs.merged(attrs).to_html();
        let mut html = format!(r#"<select name="{}"{attrs}>"#, html_escape(name));

        for (opt_value, label) in self.options() {
            let selected = value.is_some_and(|v| v == opt_value);
            let selected_attr = if selected { " selected" } else { "" };
            html.push_str(&format!(
                "\n  <option value=\"{}\"{selected_attr}>{}</option>",
                html_escape(&opt_value),
                html_escape(&label)
            ));
        }

        html.push_str("\n</select>");
        html
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::i18n::Catalog;

    fn colors() -> Select {
        Select::new(None, [("r", "Red"), ("g", "Green")])
    }

    #[test]
    fn test_select_render() {
        let html = colors().render("color", Some("g"), &WidgetAttrs::new());
        assert_eq!(
            html,
            "<select name=\"color\">\n  <option value=\"r\">Red</option>\n  \
             <option value=\"g\" selected>Green</option>\n</select>"
        );
    }

    #[test]
    fn test_select_no_blank_option() {
        let html = colors().render("color", None, &WidgetAttrs::new());
        assert_eq!(html.matches("<option").count(), 2);
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_select_attrs() {
        let widget = Select::new(
            Some(WidgetAttrs::new().with("class", "form-select")),
            [("a", "A")],
        );
        let html = widget.render("x", None, &WidgetAttrs::new().with("id", "id_x"));
        assert!(html.starts_with(r#"<select name="x" class="form-select" id="id_x">"#));
    }

    #[test]
    fn test_select_translates_labels() {
        let catalog = Catalog::new().entry("Red", "Rouge");
        let widget = colors().translator(Arc::new(catalog));
        assert_eq!(widget.options()[0], ("r".to_string(), "Rouge".to_string()));
        assert_eq!(widget.choices()[0].1, "Red");
        assert!(widget
            .render("color", None, &WidgetAttrs::new())
            .contains(">Rouge</option>"));
    }

    #[test]
    fn test_select_escapes_labels() {
        let widget = Select::new(None, [("a&b", "<b>")]);
        let html = widget.render("x", None, &WidgetAttrs::new());
        assert!(html.contains(r#"value="a&amp;b">&lt;b&gt;</option>"#));
    }
}
