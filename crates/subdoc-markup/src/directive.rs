//! Block directive trait.
//!
//! A block directive transforms a block of source text into output
//! nodes. Handlers are registered in a [`DirectiveRegistry`] and
//! dispatched through [`App::run_directive`].
//!
//! [`DirectiveRegistry`]: crate::DirectiveRegistry
//! [`App::run_directive`]: crate::App::run_directive

use crate::config::ConfigValues;
use crate::document::Document;
use crate::error::DirectiveError;
use crate::nodes::Node;
use crate::options::DirectiveOptions;

/// A single block directive invocation.
///
/// Content lines are owned so a wrapping directive can rewrite them
/// before forwarding the request to its base. The document and
/// configuration references are read-only lookups; the request is
/// dropped once the invocation returns.
pub struct BlockRequest<'a> {
    /// Positional arguments from the directive line.
    pub arguments: &'a [String],
    /// Options supplied to the invocation.
    pub options: &'a DirectiveOptions,
    /// The content lines of the block.
    pub content: Vec<String>,
    /// The document being processed.
    pub document: &'a Document,
    /// Host-wide configuration values.
    pub settings: &'a ConfigValues,
    /// Source line the directive appears on (1-indexed).
    pub line: usize,
}

/// Handler for a block-level markup extension point.
///
/// Handlers take `&self` and are `Send + Sync`: a registry may be
/// shared across parallel document reads, and all per-invocation state
/// lives in the [`BlockRequest`].
///
/// # Example
///
/// ```
/// use subdoc_markup::{BlockDirective, BlockRequest, DirectiveError, Node};
///
/// struct Verbatim;
///
/// impl BlockDirective for Verbatim {
///     fn name(&self) -> &str {
///         "verbatim"
///     }
///
///     fn run(&self, request: BlockRequest<'_>) -> Result<Vec<Node>, DirectiveError> {
///         Ok(vec![Node::LiteralBlock {
///             text: request.content.join("\n"),
///             language: None,
///             classes: Vec::new(),
///             linenos: false,
///         }])
///     }
/// }
/// ```
pub trait BlockDirective: Send + Sync {
    /// Canonical directive name (e.g. "code-block").
    fn name(&self) -> &str;

    /// Option names this directive accepts.
    ///
    /// Dispatch rejects invocations that supply any other option.
    fn recognized_options(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Process the invocation and produce output nodes.
    fn run(&self, request: BlockRequest<'_>) -> Result<Vec<Node>, DirectiveError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Verbatim;

    impl BlockDirective for Verbatim {
        fn name(&self) -> &str {
            "verbatim"
        }

        fn run(&self, request: BlockRequest<'_>) -> Result<Vec<Node>, DirectiveError> {
            Ok(vec![Node::text(request.content.join("\n"))])
        }
    }

    #[test]
    fn test_default_option_spec_is_empty() {
        assert!(Verbatim.recognized_options().is_empty());
    }

    #[test]
    fn test_run_joins_content() {
        let document = Document::new();
        let settings = ConfigValues::new();
        let options = DirectiveOptions::new();

        let nodes = Verbatim
            .run(BlockRequest {
                arguments: &[],
                options: &options,
                content: vec!["a".to_owned(), "b".to_owned()],
                document: &document,
                settings: &settings,
                line: 1,
            })
            .unwrap();

        assert_eq!(nodes, vec![Node::text("a\nb")]);
    }
}
