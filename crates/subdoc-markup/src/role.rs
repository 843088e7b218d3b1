//! Inline role trait.
//!
//! A role transforms a short inline text span into output nodes.
//! Unlike directives, roles report failures through
//! [`SystemMessage`] values in their output rather than through
//! `Result`, matching the host's diagnostic channel.

use crate::document::Document;
use crate::nodes::{Node, SystemMessage};
use crate::options::DirectiveOptions;

/// Output of a role invocation: nodes plus any diagnostics.
pub type RoleOutput = (Vec<Node>, Vec<SystemMessage>);

/// A single role invocation.
///
/// `text` is the display form of the span; `rawtext` is the raw source
/// it was parsed from (escapes intact). Options and content are
/// constructed fresh for every invocation and are never shared between
/// calls.
pub struct RoleRequest<'a> {
    /// Name the role was invoked under.
    pub name: &'a str,
    /// Display text of the span.
    pub text: String,
    /// Raw source form of the span.
    pub rawtext: String,
    /// Source line the span appears on (1-indexed).
    pub line: usize,
    /// The document being processed.
    pub document: &'a Document,
    /// Options supplied to the invocation.
    pub options: DirectiveOptions,
    /// Content lines supplied to the invocation.
    pub content: Vec<String>,
}

/// Handler for an inline markup extension point.
///
/// Handlers take `&self` and are `Send + Sync`; see
/// [`BlockDirective`](crate::BlockDirective) for the sharing contract.
pub trait InlineRole: Send + Sync {
    /// Canonical role name (e.g. "code").
    fn name(&self) -> &str;

    /// Process the invocation and produce output nodes plus
    /// diagnostics.
    fn run(&self, request: RoleRequest<'_>) -> RoleOutput;
}
