//! Substitution-aware `prompt` directive.

use subdoc_markup::{BlockDirective, BlockRequest, DirectiveError, Node};

use crate::SUBSTITUTION_OPTION;
use crate::resolver::Substitutions;

/// Wraps the `prompt` directive with marker substitution.
///
/// Same contract as
/// [`SubstitutionCodeBlock`](crate::SubstitutionCodeBlock), restricted
/// to the document's substitution definitions: the host-wide
/// `substitutions` configuration mapping is not consulted here.
pub struct SubstitutionPrompt {
    base: Box<dyn BlockDirective>,
}

impl SubstitutionPrompt {
    /// Wrap a base directive.
    #[must_use]
    pub fn wrapping(base: Box<dyn BlockDirective>) -> Self {
        Self { base }
    }
}

impl BlockDirective for SubstitutionPrompt {
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
            for line in &mut request.content {
                *line = document_pass.apply(line);
            }
        }
        self.base.run(request)
    }
}
