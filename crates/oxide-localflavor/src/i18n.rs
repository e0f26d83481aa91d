//! Message translation hook.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Translates message ids (the English source strings) for display.
pub trait Translator: Send + Sync {
    /// Returns the translation of `msgid`, or `msgid` itself.
    fn gettext<'a>(&self, msgid: &'a str) -> Cow<'a, str>;
}

/// Translator that returns every message id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn gettext<'a>(&self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

/// In-memory message catalog.
///
/// ```rust
/// use oxide_localflavor::{Catalog, Translator};
///
/// let catalog = Catalog::new().entry("Wallonia", "Wallonie");
/// assert_eq!(catalog.gettext("Wallonia"), "Wallonie");
/// assert_eq!(catalog.gettext("Flemish Region"), "Flemish Region");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation.
    #[must_use]
    pub fn entry(mut self, msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        self.entries.insert(msgid.into(), msgstr.into());
        self
    }

    /// Returns the number of translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog has no translations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn gettext<'a>(&self, msgid: &'a str) -> Cow<'a, str> {
        self.entries
            .get(msgid)
            .map_or(Cow::Borrowed(msgid), |msgstr| Cow::Owned(msgstr.clone()))
    }
}

/// Shared translator handle held by fields and widgets.
pub type SharedTranslator = Arc<dyn Translator>;

/// Returns the identity translator as a shared handle.
pub fn no_translation() -> SharedTranslator {
    Arc::new(NoTranslation)
}
