//! Name-keyed handler registries.
//!
//! Extensions register handlers under directive/role names. The
//! [`take`](DirectiveRegistry::take) operation removes a handler so an
//! extension can re-register a wrapping adapter under the same name;
//! this is the composition seam used in place of subclassing a base
//! directive.

use std::collections::HashMap;

use crate::directive::BlockDirective;
use crate::role::InlineRole;

/// Registry of block directives, keyed by invocation name.
///
/// # Example
///
/// ```
/// use subdoc_markup::{CodeBlock, DirectiveRegistry};
///
/// let mut registry = DirectiveRegistry::new();
/// registry.register("code-block", Box::new(CodeBlock));
///
/// assert!(registry.contains("code-block"));
/// let base = registry.take("code-block").unwrap();
/// assert!(!registry.contains("code-block"));
/// # let _ = base;
/// ```
#[derive(Default)]
pub struct DirectiveRegistry {
    entries: HashMap<String, Box<dyn BlockDirective>>,
}

impl DirectiveRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directive under a name, replacing any existing
    /// registration.
    pub fn register(&mut self, name: impl Into<String>, directive: Box<dyn BlockDirective>) {
        self.entries.insert(name.into(), directive);
    }

    /// Whether a directive is registered under the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up a directive by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn BlockDirective> {
        self.entries.get(name).map(Box::as_ref)
    }

    /// Remove and return the directive registered under the name.
    #[must_use]
    pub fn take(&mut self, name: &str) -> Option<Box<dyn BlockDirective>> {
        self.entries.remove(name)
    }
}

/// Registry of inline roles, keyed by invocation name.
#[derive(Default)]
pub struct RoleRegistry {
    entries: HashMap<String, Box<dyn InlineRole>>,
}

impl RoleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a role under a name, replacing any existing
    /// registration.
    pub fn register(&mut self, name: impl Into<String>, role: Box<dyn InlineRole>) {
        self.entries.insert(name.into(), role);
    }

    /// Whether a role is registered under the name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up a role by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn InlineRole> {
        self.entries.get(name).map(Box::as_ref)
    }

    /// Remove and return the role registered under the name.
    #[must_use]
    pub fn take(&mut self, name: &str) -> Option<Box<dyn InlineRole>> {
        self.entries.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{CodeBlock, CodeRole};
    use crate::directive::BlockRequest;
    use crate::error::DirectiveError;
    use crate::nodes::Node;

    #[test]
    fn test_register_and_get() {
        let mut registry = DirectiveRegistry::new();
        registry.register("code-block", Box::new(CodeBlock));

        assert!(registry.contains("code-block"));
        assert_eq!(registry.get("code-block").unwrap().name(), "code-block");
        assert!(registry.get("prompt").is_none());
    }

    #[test]
    fn test_take_removes() {
        let mut registry = DirectiveRegistry::new();
        registry.register("code-block", Box::new(CodeBlock));

        assert!(registry.take("code-block").is_some());
        assert!(!registry.contains("code-block"));
        assert!(registry.take("code-block").is_none());
    }

    #[test]
    fn test_take_and_wrap_overrides_in_place() {
        struct Uppercase {
            base: Box<dyn BlockDirective>,
        }

        impl BlockDirective for Uppercase {
            fn name(&self) -> &str {
                self.base.name()
            }

            fn run(&self, mut request: BlockRequest<'_>) -> Result<Vec<Node>, DirectiveError> {
                for line in &mut request.content {
                    *line = line.to_uppercase();
                }
                self.base.run(request)
            }
        }

        let mut registry = DirectiveRegistry::new();
        registry.register("code-block", Box::new(CodeBlock));

        let base = registry.take("code-block").unwrap();
        registry.register("code-block", Box::new(Uppercase { base }));

        assert!(registry.contains("code-block"));
        assert_eq!(registry.get("code-block").unwrap().name(), "code-block");
    }

    #[test]
    fn test_role_registry() {
        let mut registry = RoleRegistry::new();
        registry.register("code", Box::new(CodeRole));

        assert!(registry.contains("code"));
        assert_eq!(registry.get("code").unwrap().name(), "code");
        assert!(registry.take("code").is_some());
        assert!(!registry.contains("code"));
    }
}
