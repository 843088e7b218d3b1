//! Output node model.
//!
//! Directives and roles produce [`Node`] values; the host's writers
//! consume them. Only the node kinds the built-in handlers emit are
//! modelled here.

/// A node in the output tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Plain text.
    Text(String),
    /// A literal block (rendered as preformatted code).
    LiteralBlock {
        /// Block content with lines joined by `\n`.
        text: String,
        /// Highlighting language, if any.
        language: Option<String>,
        /// CSS-style classes.
        classes: Vec<String>,
        /// Whether line numbers are rendered.
        linenos: bool,
    },
    /// An inline literal (code span).
    Literal {
        /// Display text.
        text: String,
        /// The raw source the span was parsed from.
        rawsource: String,
        /// Highlighting language, if any.
        language: Option<String>,
        /// CSS-style classes.
        classes: Vec<String>,
    },
    /// A paragraph of child nodes.
    Paragraph(Vec<Node>),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Plain-text rendering of this node and its children.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::LiteralBlock { text, .. } | Self::Literal { text, .. } => text.clone(),
            Self::Paragraph(children) => children.iter().map(Node::to_text).collect(),
        }
    }
}

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Informational message.
    Info,
    /// Something looks wrong but processing continued.
    Warning,
    /// Processing of the construct failed.
    Error,
}

/// A diagnostic message produced while processing a construct.
///
/// Roles return these alongside their output nodes; the host's
/// reporting channel renders them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemMessage {
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Source line the construct appeared on (1-indexed), if known.
    pub line: Option<usize>,
}

impl SystemMessage {
    /// Create a warning message.
    #[must_use]
    pub fn warning(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line,
        }
    }

    /// Create an error message.
    #[must_use]
    pub fn error(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line,
        }
    }
}
