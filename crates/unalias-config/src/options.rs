//! Compiler options relevant to path aliasing.
//!
//! Only `baseUrl` and `paths` are read; every other compiler option is
//! ignored so that a full tsconfig can be fed in unchanged.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Alias pattern to substitution targets, in configuration order.
pub type PathMappings = IndexMap<String, Vec<String>>;

/// The `compilerOptions` subset that drives alias resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathMappings>,
}

impl CompilerOptions {
    /// Create from a `compilerOptions` JSON object.
    ///
    /// # Example
    ///
    /// ```
    /// use unalias_config::CompilerOptions;
    /// use serde_json::json;
    ///
    /// let options = CompilerOptions::from_value(json!({
    ///     "baseUrl": ".",
    ///     "paths": { "@app/*": ["./src/app/*"] },
    ///     "strict": true
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(options.base_url.as_deref(), Some("."));
    /// assert_eq!(options.paths.unwrap()["@app/*"], vec!["./src/app/*"]);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| ConfigError::invalid_value("compilerOptions", e.to_string()))
    }

    /// Resolve these options into an [`AliasConfig`].
    ///
    /// `baseUrl` is interpreted relative to `config_dir` (the directory holding
    /// the config file). Without a `baseUrl`, `config_dir` itself is the base.
    pub fn into_alias_config(self, config_dir: &Path) -> AliasConfig {
        let base_dir = match self.base_url.as_deref() {
            Some(base_url) => config_dir.join(base_url).clean(),
            None => config_dir.to_path_buf().clean(),
        };

        AliasConfig {
            base_dir,
            paths: self.paths,
        }
    }
}

/// Base directory plus alias mapping table, ready for a resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasConfig {
    /// Directory all substitution targets are joined against.
    pub base_dir: PathBuf,
    /// `None` means aliasing is not configured.
    pub paths: Option<PathMappings>,
}

impl AliasConfig {
    pub fn new(base_dir: impl Into<PathBuf>, paths: PathMappings) -> Self {
        Self {
            base_dir: base_dir.into(),
            paths: Some(paths),
        }
    }

    /// True when there is nothing to alias.
    pub fn is_empty(&self) -> bool {
        self.paths.as_ref().is_none_or(|paths| paths.is_empty())
    }
}
