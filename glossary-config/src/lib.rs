//! Configuration loader for the glossary generator.
//!
//! `defaults/glossary.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. Callers layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into
//! [`GlossaryConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/glossary.default.toml");

/// Top-level configuration consumed by the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryConfig {
    pub tokenizer: TokenizerConfig,
    pub index: IndexConfig,
    pub page: PageConfig,
}

/// Controls how definitions are split into words and separators.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerConfig {
    /// Every character of this string is a separator.
    pub separators: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    pub title: String,
    pub heading: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub term_color: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GlossaryConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GlossaryConfig, ConfigError> {
    Loader::new().build()
}
