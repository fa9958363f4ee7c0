//! Shared configuration loader for the acf2g toolchain.
//!
//! `defaults/acf2g.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Acf2gConfig`].

use acf2g_babel::batch::BatchOptions;
use acf2g_babel::RecordFilter;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/acf2g.default.toml");

/// Top-level configuration consumed by acf2g applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Acf2gConfig {
    pub query: QueryConfig,
    pub store: StoreConfig,
    pub convert: ConvertConfig,
}

/// Which records a command works on when no single record is named.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    pub post_type: String,
    pub numberposts: usize,
}

impl QueryConfig {
    /// Build the record filter, restricted to `post_id` when one is given.
    pub fn filter(&self, post_id: Option<u64>) -> RecordFilter {
        RecordFilter {
            id: post_id.map(acf2g_babel::RecordId),
            post_type: Some(self.post_type.clone()),
            limit: Some(self.numberposts),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub parallel: bool,
}

impl From<&ConvertConfig> for BatchOptions {
    fn from(config: &ConvertConfig) -> Self {
        BatchOptions {
            parallel: config.parallel,
        }
    }
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override. Overrides win over every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Acf2gConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Acf2gConfig, ConfigError> {
    Loader::new().build()
}
