//! Belgian select widgets.

use oxide_localflavor::{Select, SharedTranslator, Widget, WidgetAttrs};

use crate::provinces::PROVINCE_CHOICES;
use crate::regions::REGION_CHOICES;

/// A select widget that uses the Belgian regions as its choices.
///
/// ```rust
/// use oxide_localflavor::{Widget, WidgetAttrs};
/// use oxide_localflavor_be::RegionSelect;
///
/// let html = RegionSelect::new(None).render("region", Some("WAL"), &WidgetAttrs::new());
/// assert!(html.contains(r#"<option value="WAL" selected>Wallonia</option>"#));
/// ```
#[derive(Debug, Clone)]
pub struct RegionSelect(Select);

impl RegionSelect {
    /// Creates the widget with optional HTML attributes.
    pub fn new(attrs: Option<WidgetAttrs>) -> Self {
        Self(Select::new(attrs, REGION_CHOICES))
    }

    /// Sets the translator used for the region labels.
    #[must_use]
    pub fn translator(self, translator: SharedTranslator) -> Self {
        Self(self.0.translator(translator))
    }

    /// Returns the underlying select.
    pub const fn select(&self) -> &Select {
        &self.0
    }
}

impl Default for RegionSelect {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Widget for RegionSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        self.0.render(name, value, attrs)
    }

    fn input_type(&self) -> &str {
        self.0.input_type()
    }
}

/// A select widget that uses the Belgian provinces as its choices.
#[derive(Debug, Clone)]
pub struct ProvinceSelect(Select);

impl ProvinceSelect {
    /// Creates the widget with optional HTML attributes.
    pub fn new(attrs: Option<WidgetAttrs>) -> Self {
        Self(Select::new(attrs, PROVINCE_CHOICES))
    }

    /// Sets the translator used for the province labels.
    #[must_use]
    pub fn translator(self, translator: SharedTranslator) -> Self {
        Self(self.0.translator(translator))
    }

    /// Returns the underlying select.
    pub const fn select(&self) -> &Select {
        &self.0
    }
}

impl Default for ProvinceSelect {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Widget for ProvinceSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        self.0.render(name, value, attrs)
    }

    fn input_type(&self) -> &str {
        self.0.input_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_select_choices() {
        let widget = RegionSelect::default();
        assert_eq!(widget.select().choices().len(), 3);
        assert_eq!(widget.input_type(), "select");
    }

    #[test]
    fn test_province_select_attrs() {
        let widget = ProvinceSelect::new(Some(WidgetAttrs::new().with("class", "form-select")));
        let html = widget.render("province", None, &WidgetAttrs::new());
        assert!(html.starts_with(r#"<select name="province" class="form-select">"#));
        assert_eq!(html.matches("<option").count(), 11);
    }
}
