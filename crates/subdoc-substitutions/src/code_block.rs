//! Substitution-aware `code-block` directive.

use subdoc_markup::{BlockDirective, BlockRequest, DirectiveError, Node};

use crate::SUBSTITUTION_OPTION;
use crate::resolver::Substitutions;

/// Wraps the host's `code-block` directive with marker substitution.
///
/// A drop-in replacement for the base directive: same arguments, same
/// options, plus the `substitutions` flag. When the flag is present,
/// every content line gets two passes of replacement — the document's
/// substitution definitions first, then the host-wide `substitutions`
/// configuration mapping — before the base directive renders the
/// block. Without the flag the content is forwarded unmodified.
///
/// # Example
///
/// ```
/// use subdoc_markup::{App, DirectiveOptions, Document, Node};
///
/// let mut app = App::new();
/// app.load_extension(subdoc_substitutions::setup);
///
/// let mut document = Document::new();
/// document.define_substitution("version", Node::text("2.0"));
///
/// let mut options = DirectiveOptions::new();
/// options.set_flag("substitutions");
///
/// let nodes = app
///     .run_directive(
///         "code-block",
///         &document,
///         &[],
///         &options,
///         vec!["pip install pkg==|version|".to_owned()],
///         1,
///     )
///     .unwrap();
/// assert!(matches!(
///     &nodes[0],
///     Node::LiteralBlock { text, .. } if text == "pip install pkg==2.0"
/// ));
/// ```
pub struct SubstitutionCodeBlock {
    base: Box<dyn BlockDirective>,
}

impl SubstitutionCodeBlock {
    /// Wrap a base directive.
    #[must_use]
    pub fn wrapping(base: Box<dyn BlockDirective>) -> Self {
        Self { base }
    }
}

impl BlockDirective for SubstitutionCodeBlock {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn recognized_options(&self) -> Vec<&str> {
        let mut options = self.base.recognized_options();
        options.push(SUBSTITUTION_OPTION);
        options
    }

    fn run(&self, mut request: BlockRequest<'_>) -> Result<Vec<Node>, DirectiveError> {
        if request.options.has(SUBSTITUTION_OPTION) {
            let document_pass = Substitutions::document_pass(request.document);
            let config_pass = Substitutions::config_pass(request.settings);
            for line in &mut request.content {
                *line = document_pass.apply(line);
                *line = config_pass.apply(line);
            }
        }
        self.base.run(request)
    }
}
