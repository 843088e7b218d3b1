//! Built-in code directive and role.
//!
//! Every [`App`](crate::App) starts with these registered: the
//! `code-block` directive and the `code` role. Extensions that want to
//! change their behavior take them from the registry and wrap them.

use crate::directive::{BlockDirective, BlockRequest};
use crate::error::DirectiveError;
use crate::nodes::Node;
use crate::role::{InlineRole, RoleOutput, RoleRequest};

/// The built-in `code-block` directive.
///
/// Accepts one optional positional argument (the highlighting
/// language) and the options `linenos` (flag), `caption`, and `class`.
/// Produces a [`Node::LiteralBlock`], preceded by a caption paragraph
/// when one was given.
pub struct CodeBlock;

impl BlockDirective for CodeBlock {
    fn name(&self) -> &str {
        "code-block"
    }

    fn recognized_options(&self) -> Vec<&str> {
        vec!["linenos", "caption", "class"]
    }

    fn run(&self, request: BlockRequest<'_>) -> Result<Vec<Node>, DirectiveError> {
        if request.arguments.len() > 1 {
            return Err(DirectiveError::Invalid {
                directive: self.name().to_owned(),
                message: "expected at most one argument (the language)".to_owned(),
            });
        }

        let language = request.arguments.first().cloned();
        let classes = request
            .options
            .get("class")
            .map(split_classes)
            .unwrap_or_default();

        let mut nodes = Vec::with_capacity(2);
        if let Some(caption) = request.options.get("caption") {
            nodes.push(Node::Paragraph(vec![Node::text(caption)]));
        }
        nodes.push(Node::LiteralBlock {
            text: request.content.join("\n"),
            language,
            classes,
            linenos: request.options.has("linenos"),
        });
        Ok(nodes)
    }
}

/// The built-in `code` role.
///
/// Produces a [`Node::Literal`] from the span's display text and raw
/// source. The `language` option sets the highlighting language and is
/// appended to the classes; `class` adds further classes.
pub struct CodeRole;

impl InlineRole for CodeRole {
    fn name(&self) -> &str {
        "code"
    }

    fn run(&self, request: RoleRequest<'_>) -> RoleOutput {
        let mut classes = vec!["code".to_owned()];
        if let Some(class) = request.options.get("class") {
            classes.extend(split_classes(class));
        }
        let language = request.options.get("language").map(str::to_owned);
        if let Some(language) = &language {
            classes.push(language.clone());
        }

        let node = Node::Literal {
            text: request.text,
            rawsource: request.rawtext,
            language,
            classes,
        };
        (vec![node], Vec::new())
    }
}

fn split_classes(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ConfigValues;
    use crate::document::Document;
    use crate::options::DirectiveOptions;

    fn run_code_block(
        arguments: &[String],
        options: &DirectiveOptions,
        content: Vec<String>,
    ) -> Result<Vec<Node>, DirectiveError> {
        let document = Document::new();
        let settings = ConfigValues::new();
        CodeBlock.run(BlockRequest {
            arguments,
            options,
            content,
            document: &document,
            settings: &settings,
            line: 1,
        })
    }

    #[test]
    fn test_plain_block() {
        let nodes = run_code_block(
            &[],
            &DirectiveOptions::new(),
            vec!["echo hi".to_owned()],
        )
        .unwrap();

        assert_eq!(
            nodes,
            vec![Node::LiteralBlock {
                text: "echo hi".to_owned(),
                language: None,
                classes: Vec::new(),
                linenos: false,
            }]
        );
    }

    #[test]
    fn test_language_argument() {
        let nodes = run_code_block(
            &["rust".to_owned()],
            &DirectiveOptions::new(),
            vec!["fn main() {}".to_owned()],
        )
        .unwrap();

        assert!(
            matches!(&nodes[0], Node::LiteralBlock { language: Some(l), .. } if l == "rust")
        );
    }

    #[test]
    fn test_too_many_arguments() {
        let err = run_code_block(
            &["rust".to_owned(), "extra".to_owned()],
            &DirectiveOptions::new(),
            Vec::new(),
        )
        .unwrap_err();

        assert!(matches!(err, DirectiveError::Invalid { .. }));
    }

    #[test]
    fn test_caption_and_classes() {
        let mut options = DirectiveOptions::new();
        options.set("caption", "Listing 1");
        options.set("class", "wide highlight");
        options.set_flag("linenos");

        let nodes = run_code_block(&[], &options, vec!["x".to_owned()]).unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], Node::Paragraph(vec![Node::text("Listing 1")]));
        assert_eq!(
            nodes[1],
            Node::LiteralBlock {
                text: "x".to_owned(),
                language: None,
                classes: vec!["wide".to_owned(), "highlight".to_owned()],
                linenos: true,
            }
        );
    }

    #[test]
    fn test_multi_line_content_joined() {
        let nodes = run_code_block(
            &[],
            &DirectiveOptions::new(),
            vec!["a".to_owned(), "b".to_owned()],
        )
        .unwrap();

        assert!(matches!(&nodes[0], Node::LiteralBlock { text, .. } if text == "a\nb"));
    }

    #[test]
    fn test_code_role_basic() {
        let document = Document::new();
        let (nodes, messages) = CodeRole.run(RoleRequest {
            name: "code",
            text: "println!".to_owned(),
            rawtext: "`println!`".to_owned(),
            line: 4,
            document: &document,
            options: DirectiveOptions::new(),
            content: Vec::new(),
        });

        assert!(messages.is_empty());
        assert_eq!(
            nodes,
            vec![Node::Literal {
                text: "println!".to_owned(),
                rawsource: "`println!`".to_owned(),
                language: None,
                classes: vec!["code".to_owned()],
            }]
        );
    }

    #[test]
    fn test_code_role_language_option() {
        let document = Document::new();
        let mut options = DirectiveOptions::new();
        options.set("language", "rust");

        let (nodes, _) = CodeRole.run(RoleRequest {
            name: "code",
            text: "x".to_owned(),
            rawtext: "x".to_owned(),
            line: 1,
            document: &document,
            options,
            content: Vec::new(),
        });

        assert!(matches!(
            &nodes[0],
            Node::Literal { language: Some(l), classes, .. }
                if l == "rust" && classes == &["code".to_owned(), "rust".to_owned()]
        ));
    }
}
