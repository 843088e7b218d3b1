//! Application handle.
//!
//! [`App`] owns the registries and configuration values and dispatches
//! directive and role invocations. It is an explicit value: extensions
//! receive `&mut App` at setup time and everything a handler needs at
//! run time travels in the request, so there is no global state and no
//! ordering hazard between setup and first use.
//!
//! Load order matters only in the obvious way: extensions declare
//! configuration values during setup, so the configuration file is
//! applied after all extensions are loaded.

use std::path::Path;

use crate::code::{CodeBlock, CodeRole};
use crate::config::{ConfigError, ConfigValues, RebuildScope, SettingValue};
use crate::directive::BlockRequest;
use crate::document::Document;
use crate::error::DirectiveError;
use crate::nodes::Node;
use crate::options::DirectiveOptions;
use crate::registry::{DirectiveRegistry, RoleRegistry};
use crate::role::{InlineRole, RoleOutput, RoleRequest};

/// What an extension declares about itself at setup time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtensionMetadata {
    /// Whether independent documents may be read in parallel while
    /// this extension's handlers are installed.
    pub parallel_read_safe: bool,
}

/// An extension's setup entry point.
pub type SetupFn = fn(&mut App) -> ExtensionMetadata;

/// The application handle.
///
/// # Example
///
/// ```
/// use subdoc_markup::{App, DirectiveOptions, Document};
///
/// let app = App::new();
/// let document = Document::new();
///
/// let nodes = app
///     .run_directive(
///         "code-block",
///         &document,
///         &[],
///         &DirectiveOptions::new(),
///         vec!["echo hi".to_owned()],
///         1,
///     )
///     .unwrap();
/// assert_eq!(nodes.len(), 1);
/// ```
pub struct App {
    directives: DirectiveRegistry,
    roles: RoleRegistry,
    config: ConfigValues,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an application with the built-in `code-block` directive
    /// and `code` role registered.
    #[must_use]
    pub fn new() -> Self {
        let mut directives = DirectiveRegistry::new();
        directives.register("code-block", Box::new(CodeBlock));

        let mut roles = RoleRegistry::new();
        roles.register("code", Box::new(CodeRole));

        Self {
            directives,
            roles,
            config: ConfigValues::new(),
        }
    }

    /// The directive registry.
    #[must_use]
    pub fn directives(&self) -> &DirectiveRegistry {
        &self.directives
    }

    /// The directive registry, mutably.
    pub fn directives_mut(&mut self) -> &mut DirectiveRegistry {
        &mut self.directives
    }

    /// The role registry.
    #[must_use]
    pub fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    /// The role registry, mutably.
    pub fn roles_mut(&mut self) -> &mut RoleRegistry {
        &mut self.roles
    }

    /// The configuration values.
    #[must_use]
    pub fn config(&self) -> &ConfigValues {
        &self.config
    }

    /// The configuration values, mutably.
    pub fn config_mut(&mut self) -> &mut ConfigValues {
        &mut self.config
    }

    /// Declare a configuration value.
    pub fn add_config_value(
        &mut self,
        name: impl Into<String>,
        default: SettingValue,
        rebuild: RebuildScope,
    ) {
        self.config.declare(name, default, rebuild);
    }

    /// Register an inline role.
    pub fn add_role(&mut self, name: impl Into<String>, role: Box<dyn InlineRole>) {
        self.roles.register(name, role);
    }

    /// Run an extension's setup entry point.
    pub fn load_extension(&mut self, setup: SetupFn) -> ExtensionMetadata {
        setup(self)
    }

    /// Apply a TOML configuration file to the declared values.
    pub fn load_config_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        self.config.load_toml_file(path)
    }

    /// Dispatch a block directive invocation.
    ///
    /// Options are validated against the handler's option spec before
    /// the handler runs.
    pub fn run_directive(
        &self,
        name: &str,
        document: &Document,
        arguments: &[String],
        options: &DirectiveOptions,
        content: Vec<String>,
        line: usize,
    ) -> Result<Vec<Node>, DirectiveError> {
        let handler = self
            .directives
            .get(name)
            .ok_or_else(|| DirectiveError::UnknownDirective(name.to_owned()))?;

        let recognized = handler.recognized_options();
        for option in options.names() {
            if !recognized.contains(&option) {
                return Err(DirectiveError::UnrecognizedOption {
                    directive: name.to_owned(),
                    option: option.to_owned(),
                });
            }
        }

        handler.run(BlockRequest {
            arguments,
            options,
            content,
            document,
            settings: &self.config,
            line,
        })
    }

    /// Dispatch an inline role invocation.
    ///
    /// Options and content are constructed fresh for every call.
    pub fn run_role(
        &self,
        name: &str,
        document: &Document,
        text: impl Into<String>,
        rawtext: impl Into<String>,
        line: usize,
    ) -> Result<RoleOutput, DirectiveError> {
        let handler = self
            .roles
            .get(name)
            .ok_or_else(|| DirectiveError::UnknownRole(name.to_owned()))?;

        Ok(handler.run(RoleRequest {
            name,
            text: text.into(),
            rawtext: rawtext.into(),
            line,
            document,
            options: DirectiveOptions::new(),
            content: Vec::new(),
        }))
    }
}
