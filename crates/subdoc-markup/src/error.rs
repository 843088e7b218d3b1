//! Dispatch errors.

/// Error raised while dispatching a directive or role invocation.
#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    /// No directive is registered under the given name.
    #[error("no directive registered under '{0}'")]
    UnknownDirective(String),
    /// No role is registered under the given name.
    #[error("no role registered under '{0}'")]
    UnknownRole(String),
    /// The invocation supplied an option the directive does not accept.
    #[error("directive '{directive}' does not recognize option '{option}'")]
    UnrecognizedOption {
        /// Name the directive was invoked under.
        directive: String,
        /// The offending option name.
        option: String,
    },
    /// The invocation was malformed for the directive.
    #[error("directive '{directive}': {message}")]
    Invalid {
        /// Name the directive was invoked under.
        directive: String,
        /// What was wrong with the invocation.
        message: String,
    },
}
