//! Substitution-aware code span role.

use subdoc_markup::{CodeRole, InlineRole, RoleOutput, RoleRequest};

use crate::resolver::Substitutions;

/// The `substitution-code` role.
///
/// Applies the document's substitution definitions to an inline code
/// span, then delegates to the base `code` role. Diagnostics from the
/// base role are forwarded untouched.
///
/// The two forms of the span are treated differently: the display text
/// only replaces `|name|` markers, while the raw source form replaces
/// markers and bare names (no delimiters). The asymmetry is inherited
/// behavior, kept pending product review.
///
/// # Example
///
/// ```
/// use subdoc_markup::{App, Document, Node};
///
/// let mut app = App::new();
/// app.load_extension(subdoc_substitutions::setup);
///
/// let mut document = Document::new();
/// document.define_substitution("tool", Node::text("widget"));
///
/// let (nodes, messages) = app
///     .run_role("substitution-code", &document, "|tool|", "|tool|", 1)
///     .unwrap();
/// assert!(messages.is_empty());
/// assert!(matches!(&nodes[0], Node::Literal { text, .. } if text == "widget"));
/// ```
pub struct SubstitutionCodeRole {
    base: Box<dyn InlineRole>,
}

impl SubstitutionCodeRole {
    /// Wrap a base role.
    #[must_use]
    pub fn wrapping(base: Box<dyn InlineRole>) -> Self {
        Self { base }
    }

    /// Wrap the built-in `code` role.
    #[must_use]
    pub fn new() -> Self {
        Self::wrapping(Box::new(CodeRole))
    }
}

impl Default for SubstitutionCodeRole {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineRole for SubstitutionCodeRole {
    fn name(&self) -> &str {
        "substitution-code"
    }

    fn run(&self, mut request: RoleRequest<'_>) -> RoleOutput {
        let display_pass = Substitutions::document_pass(request.document);
        let raw_pass = Substitutions::document_raw_pass(request.document);

        request.text = display_pass.apply(&request.text);
        request.rawtext = raw_pass.apply(&request.rawtext);

        self.base.run(request)
    }
}
