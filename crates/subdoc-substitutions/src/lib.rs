//! Substitution extensions for the subdoc document processor.
//!
//! Replaces `|name|` markers with registered substitution text inside
//! constructs that the host otherwise treats as literal:
//!
//! - the `code-block` directive gains a `substitutions` flag that
//!   rewrites content lines from the document's substitution
//!   definitions and the host-wide `substitutions` configuration
//!   mapping ([`SubstitutionCodeBlock`])
//! - the `prompt` directive gains the same flag, restricted to the
//!   document's definitions ([`SubstitutionPrompt`])
//! - a `substitution-code` role renders inline code spans with
//!   markers resolved ([`SubstitutionCodeRole`])
//!
//! Substitution is a literal scan-and-replace over short text spans;
//! all parsing and rendering stays with the wrapped base handlers.
//!
//! # Loading
//!
//! The `prompt` directive is provided by a separately loaded
//! extension, so load order matters:
//!
//! ```
//! use subdoc_markup::App;
//!
//! let mut app = App::new();
//! app.load_extension(subdoc_prompt::setup);
//! let metadata = app.load_extension(subdoc_substitutions::setup);
//! assert!(metadata.parallel_read_safe);
//! ```

mod code_block;
mod prompt;
mod resolver;
mod role;

use std::collections::BTreeMap;

use subdoc_markup::{App, ExtensionMetadata, RebuildScope, SettingValue};

pub use code_block::SubstitutionCodeBlock;
pub use prompt::SubstitutionPrompt;
pub use resolver::{Substitutions, marker};
pub use role::SubstitutionCodeRole;

/// The directive flag that enables substitution.
///
/// Recognized as a valid option by external linters, so renaming it is
/// a breaking change beyond this codebase.
pub const SUBSTITUTION_OPTION: &str = "substitutions";

/// The host-wide configuration value holding extra substitutions.
pub const SUBSTITUTIONS_SETTING: &str = "substitutions";

/// Register the substitution extensions with the application.
///
/// Declares the `substitutions` configuration value, replaces the
/// `code-block` and `prompt` directives with their substituting
/// variants, and registers the `substitution-code` role.
///
/// The `prompt` directive must already be registered by its own
/// extension; when it is not, an error is logged and that override is
/// skipped, leaving any later `prompt` usage to fail in the host.
pub fn setup(app: &mut App) -> ExtensionMetadata {
    app.add_config_value(
        SUBSTITUTIONS_SETTING,
        SettingValue::Map(BTreeMap::new()),
        RebuildScope::Html,
    );

    match app.directives_mut().take("code-block") {
        Some(base) => {
            tracing::debug!(directive = "code-block", "installing substitution variant");
            app.directives_mut()
                .register("code-block", Box::new(SubstitutionCodeBlock::wrapping(base)));
        }
        None => {
            tracing::error!("no 'code-block' directive registered; substitution variant not installed");
        }
    }

    match app.directives_mut().take("prompt") {
        Some(base) => {
            tracing::debug!(directive = "prompt", "installing substitution variant");
            app.directives_mut()
                .register("prompt", Box::new(SubstitutionPrompt::wrapping(base)));
        }
        None => {
            tracing::error!(
                "the 'prompt' directive must be registered before the substitution \
                 extensions are loaded"
            );
        }
    }

    app.add_role("substitution-code", Box::new(SubstitutionCodeRole::new()));

    ExtensionMetadata {
        parallel_read_safe: true,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use subdoc_markup::{DirectiveOptions, Document, Node};

    use super::*;

    fn loaded_app() -> App {
        let mut app = App::new();
        app.load_extension(subdoc_prompt::setup);
        app.load_extension(setup);
        app
    }

    #[test]
    fn test_setup_overrides_and_registers() {
        let app = loaded_app();
        assert!(app.directives().contains("code-block"));
        assert!(app.directives().contains("prompt"));
        assert!(app.roles().contains("substitution-code"));
        assert!(app.config().is_declared(SUBSTITUTIONS_SETTING));
    }

    #[test]
    fn test_setup_metadata() {
        let mut app = App::new();
        app.load_extension(subdoc_prompt::setup);
        let metadata = app.load_extension(setup);
        assert!(metadata.parallel_read_safe);
    }

    #[test]
    fn test_setup_without_prompt_extension() {
        let mut app = App::new();
        let metadata = app.load_extension(setup);

        // Non-fatal: code-block is still wrapped, prompt stays absent.
        assert!(metadata.parallel_read_safe);
        assert!(app.directives().contains("code-block"));
        assert!(!app.directives().contains("prompt"));
    }

    #[test]
    fn test_code_block_substitution_end_to_end() {
        let app = loaded_app();
        let mut document = Document::new();
        document.define_substitution("version", Node::text("2.0"));

        let mut options = DirectiveOptions::new();
        options.set_flag(SUBSTITUTION_OPTION);

        let nodes = app
            .run_directive(
                "code-block",
                &document,
                &["sh".to_owned()],
                &options,
                vec!["pip install pkg==|version|".to_owned()],
                1,
            )
            .unwrap();

        assert_eq!(
            nodes,
            vec![Node::LiteralBlock {
                text: "pip install pkg==2.0".to_owned(),
                language: Some("sh".to_owned()),
                classes: Vec::new(),
                linenos: false,
            }]
        );
    }

    #[test]
    fn test_code_block_flag_absent_end_to_end() {
        let app = loaded_app();
        let mut document = Document::new();
        document.define_substitution("version", Node::text("2.0"));

        let nodes = app
            .run_directive(
                "code-block",
                &document,
                &[],
                &DirectiveOptions::new(),
                vec!["pip install pkg==|version|".to_owned()],
                1,
            )
            .unwrap();

        assert!(matches!(
            &nodes[0],
            Node::LiteralBlock { text, .. } if text == "pip install pkg==|version|"
        ));
    }

    #[test]
    fn test_config_substitutions_from_toml() {
        let mut app = App::new();
        app.load_extension(subdoc_prompt::setup);
        app.load_extension(setup);
        app.config_mut()
            .load_toml("[substitutions]\nextra = \"beta\"\n")
            .unwrap();

        let document = Document::new();
        let mut options = DirectiveOptions::new();
        options.set_flag(SUBSTITUTION_OPTION);

        let nodes = app
            .run_directive(
                "code-block",
                &document,
                &[],
                &options,
                vec!["channel=|extra|".to_owned()],
                1,
            )
            .unwrap();

        assert!(matches!(
            &nodes[0],
            Node::LiteralBlock { text, .. } if text == "channel=beta"
        ));
    }

    #[test]
    fn test_prompt_substitution_end_to_end() {
        let app = loaded_app();
        let mut document = Document::new();
        document.define_substitution("version", Node::text("2.0"));

        let mut options = DirectiveOptions::new();
        options.set_flag(SUBSTITUTION_OPTION);

        let nodes = app
            .run_directive(
                "prompt",
                &document,
                &[],
                &options,
                vec!["pip install pkg==|version|".to_owned()],
                1,
            )
            .unwrap();

        assert!(matches!(
            &nodes[0],
            Node::LiteralBlock { text, .. } if text == "$ pip install pkg==2.0"
        ));
    }

    #[test]
    fn test_inline_role_end_to_end() {
        let app = loaded_app();
        let mut document = Document::new();
        document.define_substitution("tool", Node::text("widget"));

        let (nodes, messages) = app
            .run_role("substitution-code", &document, "|tool|", "|tool|", 1)
            .unwrap();

        assert!(messages.is_empty());
        assert!(matches!(
            &nodes[0],
            Node::Literal { text, .. } if text == "widget"
        ));
    }

    #[test]
    fn test_base_code_role_still_available() {
        let app = loaded_app();
        let document = Document::new();
        assert!(app.roles().contains("code"));
        let (nodes, _) = app.run_role("code", &document, "x", "x", 1).unwrap();
        assert_eq!(nodes.len(), 1);
    }
}
