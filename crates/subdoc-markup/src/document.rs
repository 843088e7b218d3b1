//! Per-document state.
//!
//! A [`Document`] carries the substitution definitions registered while
//! the document was parsed. Handlers receive the document by reference
//! for the duration of a single invocation and never retain it.

use std::collections::BTreeMap;

use crate::nodes::Node;

/// A named replacement value registered within a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionDefinition {
    name: String,
    node: Node,
}

impl SubstitutionDefinition {
    /// Create a definition from a name and its renderable value.
    #[must_use]
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }

    /// The substitution name (without `|` delimiters).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plain-text rendering of the replacement value.
    #[must_use]
    pub fn text(&self) -> String {
        self.node.to_text()
    }
}

/// A document being processed.
///
/// # Example
///
/// ```
/// use subdoc_markup::{Document, Node};
///
/// let mut document = Document::new();
/// document.define_substitution("version", Node::text("2.0"));
///
/// assert_eq!(document.substitution("version").unwrap().text(), "2.0");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Document {
    source: Option<String>,
    substitution_defs: BTreeMap<String, SubstitutionDefinition>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with a source name for diagnostics.
    #[must_use]
    pub fn with_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            substitution_defs: BTreeMap::new(),
        }
    }

    /// Source name for diagnostics, if known.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Register a substitution definition, replacing any previous
    /// definition of the same name.
    pub fn define_substitution(&mut self, name: impl Into<String>, node: Node) {
        let name = name.into();
        self.substitution_defs
            .insert(name.clone(), SubstitutionDefinition::new(name, node));
    }

    /// Look up a substitution definition by name.
    #[must_use]
    pub fn substitution(&self, name: &str) -> Option<&SubstitutionDefinition> {
        self.substitution_defs.get(name)
    }

    /// All substitution definitions, keyed by name.
    ///
    /// Iteration order is sorted by name; definitions carry no
    /// precedence among themselves.
    #[must_use]
    pub fn substitution_defs(&self) -> &BTreeMap<String, SubstitutionDefinition> {
        &self.substitution_defs
    }
}
