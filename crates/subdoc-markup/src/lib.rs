//! Extension points of the subdoc document processor.
//!
//! This crate defines the surface that extensions program against:
//!
//! - [`Node`]: the output model produced by directives and roles
//! - [`Document`]: per-document state, including substitution definitions
//! - [`BlockDirective`] / [`InlineRole`]: the handler traits
//! - [`DirectiveRegistry`] / [`RoleRegistry`]: name-keyed handler tables
//! - [`App`]: the application handle that owns registries and
//!   declared configuration values and dispatches invocations
//!
//! The built-in `code-block` directive ([`CodeBlock`]) and `code` role
//! ([`CodeRole`]) are registered on every new [`App`]; extensions may
//! replace them in place via [`DirectiveRegistry::take`].
//!
//! # Example
//!
//! ```
//! use subdoc_markup::{App, DirectiveOptions, Document, Node};
//!
//! let app = App::new();
//! let document = Document::new();
//! let mut options = DirectiveOptions::new();
//! options.set_flag("linenos");
//!
//! let nodes = app
//!     .run_directive(
//!         "code-block",
//!         &document,
//!         &["rust".to_owned()],
//!         &options,
//!         vec!["fn main() {}".to_owned()],
//!         1,
//!     )
//!     .unwrap();
//!
//! assert!(matches!(&nodes[0], Node::LiteralBlock { linenos: true, .. }));
//! ```

mod app;
mod code;
mod config;
mod directive;
mod document;
mod error;
mod nodes;
mod options;
mod registry;
mod role;

pub use app::{App, ExtensionMetadata, SetupFn};
pub use code::{CodeBlock, CodeRole};
pub use config::{ConfigError, ConfigValues, RebuildScope, SettingValue};
pub use directive::{BlockDirective, BlockRequest};
pub use document::{Document, SubstitutionDefinition};
pub use error::DirectiveError;
pub use nodes::{Node, Severity, SystemMessage};
pub use options::DirectiveOptions;
pub use registry::{DirectiveRegistry, RoleRegistry};
pub use role::{InlineRole, RoleOutput, RoleRequest};
