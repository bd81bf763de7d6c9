//! Host-facing pass.
//!
//! A host hands each tree it is about to print (the code tree and, when it
//! emits declarations, the declaration tree) to [`PathAliasPass`] after type
//! checking and before printing.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use unalias_config::{AliasConfig, ConfigDiscovery};

use crate::error::Result;
use crate::resolver::PathResolver;
use crate::rewrite::{Rewrite, SpecifierRewriter};

/// One parsed file.
pub struct SourceFile<'p, 'a> {
    pub path: &'p Path,
    pub program: &'p mut Program<'a>,
}

impl<'p, 'a> SourceFile<'p, 'a> {
    pub fn new(path: &'p Path, program: &'p mut Program<'a>) -> Self {
        Self { path, program }
    }
}

/// The unit a host passes to a transform.
pub enum EmitTree<'p, 'a> {
    /// A single file.
    File(SourceFile<'p, 'a>),
    /// Several files concatenated into one output.
    Bundle(Vec<SourceFile<'p, 'a>>),
}

/// Result of a transformation pass
#[derive(Debug, Default)]
pub struct TransformResult {
    /// Whether the transformation modified the AST
    pub modified: bool,
    /// Specifiers that were replaced, in source order
    pub rewrites: Vec<Rewrite>,
    /// Diagnostics from the transformation
    pub diagnostics: Vec<String>,
}

impl TransformResult {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn with_rewrites(rewrites: Vec<Rewrite>) -> Self {
        Self {
            modified: !rewrites.is_empty(),
            rewrites,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(mut self, diag: String) -> Self {
        self.diagnostics.push(diag);
        self
    }
}

/// Trait for transformation passes
pub trait TransformPass {
    /// Name of the transformation pass
    fn name(&self) -> &'static str;

    /// Run the transformation over a tree, mutating it in place
    fn run<'a>(&self, allocator: &'a Allocator, tree: EmitTree<'_, 'a>) -> Result<TransformResult>;
}

/// Replaces path aliases in module specifiers with relative paths.
#[derive(Debug, Clone)]
pub struct PathAliasPass {
    resolver: PathResolver,
}

impl PathAliasPass {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    /// Build the pass from a program's configuration.
    pub fn from_config(config: &AliasConfig) -> Self {
        Self::new(PathResolver::from_config(config))
    }

    /// Build the pass from the tsconfig.json or jsconfig.json in `root`.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let config = ConfigDiscovery::new(root).load()?;
        Ok(Self::from_config(&config))
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Rewrite the specifiers of a single program.
    ///
    /// With an inert resolver the program is not walked at all.
    pub fn rewrite_program<'a>(
        &self,
        allocator: &'a Allocator,
        path: &Path,
        program: &mut Program<'a>,
    ) -> Vec<Rewrite> {
        if self.resolver.is_inert() {
            return Vec::new();
        }

        let rewrites = SpecifierRewriter::new(allocator, &self.resolver, path).rewrite(program);
        if !rewrites.is_empty() {
            tracing::debug!(
                file = %path.display(),
                count = rewrites.len(),
                "rewrote aliased module specifiers"
            );
        }
        rewrites
    }
}

impl TransformPass for PathAliasPass {
    fn name(&self) -> &'static str {
        "path-alias"
    }

    fn run<'a>(&self, allocator: &'a Allocator, tree: EmitTree<'_, 'a>) -> Result<TransformResult> {
        match tree {
            EmitTree::File(file) => Ok(TransformResult::with_rewrites(self.rewrite_program(
                allocator,
                file.path,
                file.program,
            ))),
            EmitTree::Bundle(files) => {
                tracing::trace!(files = files.len(), "skipping bundle output");
                if self.resolver.is_inert() {
                    return Ok(TransformResult::unchanged());
                }
                Ok(TransformResult::unchanged().with_diagnostics(format!(
                    "path aliases are not rewritten in bundled output ({} files left as written)",
                    files.len()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_parser::Parser;
    use oxc_span::SourceType;
    use unalias_config::PathMappings;

    fn pass() -> PathAliasPass {
        let mut paths = PathMappings::new();
        paths.insert("@/*".to_string(), vec!["./src/*".to_string()]);
        PathAliasPass::new(PathResolver::new("/proj", &paths).with_cwd("/proj"))
    }

    #[test]
    fn file_tree_is_rewritten() {
        let allocator = Allocator::default();
        let mut program = Parser::new(&allocator, r#"import x from "@/x";"#, SourceType::mjs())
            .parse()
            .program;

        let result = pass()
            .run(
                &allocator,
                EmitTree::File(SourceFile::new(Path::new("/proj/src/a.js"), &mut program)),
            )
            .unwrap();

        assert!(result.modified);
        assert_eq!(result.rewrites[0].to, "./x");
    }

    #[test]
    fn bundle_is_left_untouched() {
        let allocator = Allocator::default();
        let mut first = Parser::new(&allocator, r#"import x from "@/x";"#, SourceType::mjs())
            .parse()
            .program;
        let mut second = Parser::new(&allocator, r#"export * from "@/y";"#, SourceType::mjs())
            .parse()
            .program;

        let result = pass()
            .run(
                &allocator,
                EmitTree::Bundle(vec![
                    SourceFile::new(Path::new("/proj/src/a.js"), &mut first),
                    SourceFile::new(Path::new("/proj/src/b.js"), &mut second),
                ]),
            )
            .unwrap();

        assert!(!result.modified);
        assert!(result.rewrites.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert!(result.diagnostics[0].contains("2 files"));
        assert!(matches!(
            &first.body[0],
            oxc_ast::ast::Statement::ImportDeclaration(decl) if decl.source.value == "@/x"
        ));
    }

    #[test]
    fn inert_pass_reports_nothing() {
        let allocator = Allocator::default();
        let mut program = Parser::new(&allocator, r#"import x from "@/x";"#, SourceType::mjs())
            .parse()
            .program;

        let pass = PathAliasPass::from_config(&AliasConfig::default());
        assert!(pass.resolver().is_inert());
        assert!(
            pass.rewrite_program(&allocator, Path::new("/proj/a.js"), &mut program)
                .is_empty()
        );
    }

    #[test]
    fn inert_pass_skips_bundles_silently() {
        let allocator = Allocator::default();
        let mut program = Parser::new(&allocator, r#"import x from "@/x";"#, SourceType::mjs())
            .parse()
            .program;

        let result = PathAliasPass::from_config(&AliasConfig::default())
            .run(
                &allocator,
                EmitTree::Bundle(vec![SourceFile::new(
                    Path::new("/proj/src/a.js"),
                    &mut program,
                )]),
            )
            .unwrap();

        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn discover_without_config_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = PathAliasPass::discover(dir.path()).unwrap_err();
        assert!(matches!(err, crate::UnaliasError::Config(_)));
    }

    #[test]
    fn pass_name() {
        assert_eq!(pass().name(), "path-alias");
    }
}
