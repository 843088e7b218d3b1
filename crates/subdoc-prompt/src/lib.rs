//! Shell prompt directive.
//!
//! Registers a `prompt` directive that renders a literal block whose
//! lines are prefixed with a prompt string, for documenting terminal
//! sessions:
//!
//! ```text
//! .. prompt::
//!    :prompts: $
//!
//!    pip install subdoc
//! ```
//!
//! # Example
//!
//! ```
//! use subdoc_markup::{App, DirectiveOptions, Document, Node};
//!
//! let mut app = App::new();
//! app.load_extension(subdoc_prompt::setup);
//!
//! let nodes = app
//!     .run_directive(
//!         "prompt",
//!         &Document::new(),
//!         &[],
//!         &DirectiveOptions::new(),
//!         vec!["ls".to_owned()],
//!         1,
//!     )
//!     .unwrap();
//! assert!(matches!(&nodes[0], Node::LiteralBlock { text, .. } if text == "$ ls"));
//! ```

use subdoc_markup::{
    App, BlockDirective, BlockRequest, DirectiveError, ExtensionMetadata, Node,
};

/// Prompt string used when the `prompts` option is absent.
const DEFAULT_PROMPT: &str = "$";

/// The `prompt` directive.
///
/// Options: `prompts` (the prompt string, default `$`) and `language`.
/// Every content line is prefixed with the prompt string and the block
/// carries the `prompt` class.
pub struct PromptDirective;

impl BlockDirective for PromptDirective {
    fn name(&self) -> &str {
        "prompt"
    }

    fn recognized_options(&self) -> Vec<&str> {
        vec!["prompts", "language"]
    }

    fn run(&self, request: BlockRequest<'_>) -> Result<Vec<Node>, DirectiveError> {
        let prompt = request.options.get("prompts").unwrap_or(DEFAULT_PROMPT);
        let text = request
            .content
            .iter()
            .map(|line| format!("{prompt} {line}"))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(vec![Node::LiteralBlock {
            text,
            language: request.options.get("language").map(str::to_owned),
            classes: vec!["prompt".to_owned()],
            linenos: false,
        }])
    }
}

/// Register the `prompt` directive with the application.
pub fn setup(app: &mut App) -> ExtensionMetadata {
    tracing::debug!(directive = "prompt", "registering directive");
    app.directives_mut()
        .register("prompt", Box::new(PromptDirective));
    ExtensionMetadata {
        parallel_read_safe: true,
    }
}
