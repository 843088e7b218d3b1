//! Directive invocation options.

use std::collections::BTreeMap;

/// Options supplied to a directive invocation.
///
/// An option is either a flag (present with no value) or a key with a
/// string value. Which names are accepted is decided by the handler's
/// option spec ([`BlockDirective::recognized_options`]); this type only
/// carries what the invocation supplied.
///
/// [`BlockDirective::recognized_options`]: crate::BlockDirective::recognized_options
///
/// # Example
///
/// ```
/// use subdoc_markup::DirectiveOptions;
///
/// let mut options = DirectiveOptions::new();
/// options.set_flag("linenos");
/// options.set("caption", "Listing 1");
///
/// assert!(options.has("linenos"));
/// assert_eq!(options.get("caption"), Some("Listing 1"));
/// assert_eq!(options.get("linenos"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectiveOptions {
    entries: BTreeMap<String, Option<String>>,
}

impl DirectiveOptions {
    /// Create an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option to a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), Some(value.into()));
    }

    /// Set a flag option (present, no value).
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), None);
    }

    /// Whether the option is present, with or without a value.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The option's value, if it was set with one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(Option::as_deref)
    }

    /// Names of all supplied options.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Whether no options were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of supplied options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
