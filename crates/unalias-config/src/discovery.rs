//! File-based config discovery
//!
//! Finds a `tsconfig.json` (or `jsconfig.json`) and loads its path alias
//! settings.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json},
};

use crate::error::{ConfigError, Result};
use crate::jsonc::strip_jsonc;
use crate::options::{AliasConfig, CompilerOptions};

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &["tsconfig.json", "jsconfig.json"];

/// Environment variable overriding `compilerOptions.baseUrl`.
pub const BASE_URL_ENV: &str = "UNALIAS_BASE_URL";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use unalias_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. tsconfig.json
    /// 2. jsconfig.json
    pub fn find(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<AliasConfig> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        self.load_from(&path)
    }

    /// Load config from a specific file path
    ///
    /// Comments and trailing commas are accepted. Priority: environment
    /// variables > config file
    pub fn load_from(&self, path: &Path) -> Result<AliasConfig> {
        if !path.is_file() {
            return Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }

        let json = strip_jsonc(&std::fs::read_to_string(path)?);

        // Nested key so the override lands inside `compilerOptions`
        let env = Env::raw()
            .only(&[BASE_URL_ENV])
            .map(|_| "compilerOptions.baseUrl".into())
            .lowercase(false);

        let options: CompilerOptions = Figment::new()
            .merge(Json::string(&json))
            .merge(env)
            .focus("compilerOptions")
            .extract()
            .map_err(|e| ConfigError::invalid_value("compilerOptions", e.to_string()))?;

        let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let config = options.into_alias_config(config_dir);

        tracing::debug!(
            config = %path.display(),
            base_dir = %config.base_dir.display(),
            patterns = config.paths.as_ref().map_or(0, |paths| paths.len()),
            "loaded path alias configuration"
        );

        Ok(config)
    }
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use unalias_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<AliasConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
