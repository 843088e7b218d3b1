//! Ordered literal substitution passes.

use subdoc_markup::{ConfigValues, Document, SettingValue};

use crate::SUBSTITUTIONS_SETTING;

/// Format the marker for a substitution name: `|name|`.
#[must_use]
pub fn marker(name: &str) -> String {
    format!("|{name}|")
}

/// An ordered collection of literal string substitutions.
///
/// Each item replaces every occurrence of its pattern, in the order
/// the items were added. This is a plain substring replace, not a
/// parser: there is no escaping of literal `|` characters, so a name
/// that happens to appear inside another marker, or a coincidental
/// `|x|` pattern, is replaced blindly. Patterns that never occur are
/// left untouched and are not an error.
///
/// A replacement value is not re-scanned within the same pass.
/// Applying a pass twice is therefore only stable when no replacement
/// value itself contains a marker; when one does, the reintroduced
/// marker is picked up by the next application. Known limitation.
///
/// # Example
///
/// ```
/// use subdoc_markup::{Document, Node};
/// use subdoc_substitutions::Substitutions;
///
/// let mut document = Document::new();
/// document.define_substitution("version", Node::text("2.0"));
///
/// let pass = Substitutions::document_pass(&document);
/// assert_eq!(pass.apply("pkg==|version|"), "pkg==2.0");
/// assert_eq!(pass.apply("no markers here"), "no markers here");
/// ```
#[derive(Debug, Default)]
pub struct Substitutions {
    items: Vec<(String, String)>,
}

impl Substitutions {
    /// Create an empty pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern/replacement item. Items apply in insertion order.
    pub fn add(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.items.push((pattern.into(), replacement.into()));
    }

    /// Build a pass from the document's substitution definitions:
    /// `|name|` maps to the definition's text.
    #[must_use]
    pub fn document_pass(document: &Document) -> Self {
        let mut pass = Self::new();
        for (name, definition) in document.substitution_defs() {
            pass.add(marker(name), definition.text());
        }
        pass
    }

    /// Build a pass from the document's substitution definitions for
    /// raw source text: per definition, `|name|` maps to the text and
    /// the bare name (no delimiters) maps to the text as well.
    #[must_use]
    pub fn document_raw_pass(document: &Document) -> Self {
        let mut pass = Self::new();
        for (name, definition) in document.substitution_defs() {
            let text = definition.text();
            pass.add(marker(name), text.clone());
            pass.add(name.clone(), text);
        }
        pass
    }

    /// Build a pass from the host-wide `substitutions` configuration
    /// value. An unset or undeclared value yields an empty pass.
    #[must_use]
    pub fn config_pass(settings: &ConfigValues) -> Self {
        let mut pass = Self::new();
        if let Some(map) = settings
            .get(SUBSTITUTIONS_SETTING)
            .and_then(SettingValue::as_map)
        {
            for (name, value) in map {
                pass.add(marker(name), value.clone());
            }
        }
        pass
    }

    /// Apply all items to a text fragment, returning the transformed
    /// string. The sources this pass was built from are not touched.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_owned();
        for (pattern, replacement) in &self.items {
            if result.contains(pattern) {
                result = result.replace(pattern, replacement);
            }
        }
        result
    }

    /// Whether the pass has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
