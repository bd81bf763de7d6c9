//! Path alias configuration for unalias.
//!
//! Reads the `baseUrl` and `paths` compiler options from a tsconfig-style
//! file and turns them into an [`AliasConfig`]: an absolute base directory
//! plus an ordered alias table.

pub mod discovery;
pub mod error;
pub mod jsonc;
pub mod options;

pub use discovery::{BASE_URL_ENV, CONFIG_FILE_NAMES, ConfigDiscovery, discover};
pub use error::{ConfigError, Result};
pub use jsonc::strip_jsonc;
pub use options::{AliasConfig, CompilerOptions, PathMappings};
