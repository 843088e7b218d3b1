//! Declared configuration values.
//!
//! Extensions declare the configuration values they consume, each with
//! a default and a rebuild scope. Values are applied from the host's
//! TOML configuration file; keys the file carries for other parts of
//! the host are left alone.
//!
//! # Example
//!
//! ```
//! use subdoc_markup::{ConfigValues, RebuildScope, SettingValue};
//!
//! let mut config = ConfigValues::new();
//! config.declare(
//!     "substitutions",
//!     SettingValue::Map(Default::default()),
//!     RebuildScope::Html,
//! );
//!
//! config.load_toml("[substitutions]\nversion = \"2.0\"\n").unwrap();
//!
//! let map = config.get("substitutions").unwrap().as_map().unwrap();
//! assert_eq!(map.get("version").map(String::as_str), Some("2.0"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// A configuration value.
///
/// Deserialized untagged, so a TOML boolean, string, or table of
/// strings maps onto the matching variant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// A boolean setting.
    Bool(bool),
    /// A string setting.
    Str(String),
    /// A mapping of names to strings.
    Map(BTreeMap<String, String>),
}

impl SettingValue {
    /// The boolean value, if this is a boolean setting.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The string value, if this is a string setting.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The mapping, if this is a map setting.
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }
}

/// Which builder outputs a setting change invalidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildScope {
    /// HTML-class builders must rebuild when the value changes.
    Html,
    /// The whole processing environment must rebuild.
    Environment,
    /// Changing the value never requires a rebuild.
    Nothing,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value was set for a name no extension declared.
    #[error("unknown configuration value '{0}'")]
    Undeclared(String),
    /// A value did not match the declared setting's shape.
    #[error("invalid value for '{name}': {message}")]
    InvalidValue {
        /// The setting name.
        name: String,
        /// Why the value was rejected.
        message: String,
    },
}

struct ConfigEntry {
    default: SettingValue,
    rebuild: RebuildScope,
    value: Option<SettingValue>,
}

/// Store of declared configuration values.
#[derive(Default)]
pub struct ConfigValues {
    entries: HashMap<String, ConfigEntry>,
}

impl ConfigValues {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a configuration value with its default and rebuild
    /// scope. Re-declaring a name resets it to the new default.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        default: SettingValue,
        rebuild: RebuildScope,
    ) {
        self.entries.insert(
            name.into(),
            ConfigEntry {
                default,
                rebuild,
                value: None,
            },
        );
    }

    /// Whether a value has been declared under the name.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Set a declared value.
    pub fn set(&mut self, name: &str, value: SettingValue) -> Result<(), ConfigError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| ConfigError::Undeclared(name.to_owned()))?;
        entry.value = Some(value);
        Ok(())
    }

    /// The current value, falling back to the declared default.
    ///
    /// Returns `None` for names that were never declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries
            .get(name)
            .map(|entry| entry.value.as_ref().unwrap_or(&entry.default))
    }

    /// The rebuild scope a value was declared with.
    #[must_use]
    pub fn rebuild_scope(&self, name: &str) -> Option<RebuildScope> {
        self.entries.get(name).map(|entry| entry.rebuild)
    }

    /// Apply a TOML configuration document to the declared values.
    ///
    /// Top-level keys that match a declared name are converted and
    /// set; all other keys belong to the host and are skipped.
    pub fn load_toml(&mut self, text: &str) -> Result<(), ConfigError> {
        let table: toml::Table = toml::from_str(text)?;
        for (name, value) in table {
            if !self.is_declared(&name) {
                continue;
            }
            let setting: SettingValue =
                value
                    .try_into()
                    .map_err(|err: toml::de::Error| ConfigError::InvalidValue {
                        name: name.clone(),
                        message: err.to_string(),
                    })?;
            self.set(&name, setting)?;
        }
        Ok(())
    }

    /// Load and apply a TOML configuration file.
    pub fn load_toml_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        self.load_toml(&text)
    }
}
