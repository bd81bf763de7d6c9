//! Rewrite tsconfig path aliases to relative module specifiers
//!
//! `unalias` runs as a last pass over an already-parsed program, right before
//! it is printed. Every `import`, `export ... from` and `import("...")`
//! specifier that matches a configured path alias (`"@app/*": ["./src/app/*"]`)
//! is replaced by a path relative to the importing file, so the printed output
//! no longer depends on the alias configuration.
//!
//! # Features
//!
//! - **tsconfig semantics** - exact keys win, then the longest wildcard prefix
//! - **Lexical only** - no filesystem access during resolution
//! - **In-place rewriting** - only specifier literals are touched
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use unalias::{PathAliasPass, PathMappings, PathResolver};
//! use oxc_allocator::Allocator;
//! use oxc_parser::Parser;
//! use oxc_span::SourceType;
//!
//! let mut paths = PathMappings::new();
//! paths.insert("@app/*".to_string(), vec!["./src/app/*".to_string()]);
//! let pass = PathAliasPass::new(PathResolver::new("/proj", &paths));
//!
//! let allocator = Allocator::default();
//! let source = r#"import { store } from "@app/store";"#;
//! let mut program = Parser::new(&allocator, source, SourceType::ts()).parse().program;
//!
//! let rewrites = pass.rewrite_program(&allocator, Path::new("/proj/src/main.ts"), &mut program);
//! assert_eq!(rewrites[0].to, "./app/store");
//! ```

mod error;
mod pass;
pub mod paths;
pub mod pattern;
mod resolver;
mod rewrite;

#[cfg(feature = "emit")]
mod emit;

#[cfg(feature = "logging")]
pub mod logging;

pub use error::{Result, UnaliasError};
pub use pass::{EmitTree, PathAliasPass, SourceFile, TransformPass, TransformResult};
pub use pattern::{AliasRule, Pattern};
pub use resolver::PathResolver;
pub use rewrite::{Rewrite, SpecifierKind, SpecifierRewriter};

#[cfg(feature = "emit")]
pub use emit::{EmitOptions, EmitOutput, Emitter};

pub use unalias_config::{AliasConfig, CompilerOptions, ConfigDiscovery, PathMappings};
