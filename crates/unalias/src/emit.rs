//! Emit driver
//!
//! A small host that takes source text through the whole pipeline:
//!
//! ```text
//! source ─ oxc_parser ─> Program ─ passes ─> oxc_codegen ─> code
//!                           │
//!                           └─ oxc_isolated_declarations ─> Program ─ passes ─> oxc_codegen ─> .d.ts
//! ```
//!
//! Both trees go through every registered pass, since module specifiers show
//! up in declaration output as well.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_isolated_declarations::{IsolatedDeclarations, IsolatedDeclarationsOptions};
use oxc_parser::Parser;
use oxc_span::SourceType;
use unalias_config::AliasConfig;

use crate::error::{Result, UnaliasError};
use crate::pass::{EmitTree, PathAliasPass, SourceFile, TransformPass};
use crate::rewrite::Rewrite;

/// Options for the emit driver
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Also emit declarations for TypeScript sources
    pub declarations: bool,
    /// Remove declarations marked `@internal`
    pub strip_internal: bool,
    /// Emit a partial AST instead of failing on parse errors
    pub allow_parse_errors: bool,
}

impl EmitOptions {
    pub fn with_declarations(mut self) -> Self {
        self.declarations = true;
        self
    }
}

/// Output of a single file
#[derive(Debug)]
pub struct EmitOutput {
    /// Printed program
    pub code: String,
    /// Printed declarations, when requested and the source is TypeScript
    pub declarations: Option<String>,
    /// Every rewrite applied, per pass: code tree, then declarations
    pub rewrites: Vec<Rewrite>,
    /// Non-fatal diagnostics from parsing, declarations and passes
    pub diagnostics: Vec<String>,
}

/// Runs registered passes over parsed files and prints the result
pub struct Emitter {
    passes: Vec<Box<dyn TransformPass>>,
    options: EmitOptions,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Self {
            passes: Vec::new(),
            options,
        }
    }

    /// Emitter with a single [`PathAliasPass`] built from `config`
    pub fn with_aliases(config: &AliasConfig, options: EmitOptions) -> Self {
        Self::new(options).add_pass(PathAliasPass::from_config(config))
    }

    /// Add a transformation pass
    pub fn add_pass<P: TransformPass + 'static>(mut self, pass: P) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Names of the registered passes, in run order
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }

    /// Read, transform and print one file from disk
    pub fn emit_file(&self, path: &Path) -> Result<EmitOutput> {
        let source = std::fs::read_to_string(path)?;
        self.emit(path, &source)
    }

    /// Parse, transform and print one file
    pub fn emit(&self, path: &Path, source: &str) -> Result<EmitOutput> {
        let allocator = Allocator::default();
        let source_type = SourceType::from_path(path).unwrap_or(SourceType::mjs());

        let parsed = Parser::new(&allocator, source, source_type).parse();
        let mut diagnostics: Vec<String> =
            parsed.errors.iter().map(|err| format!("{:?}", err)).collect();

        if !self.options.allow_parse_errors && !diagnostics.is_empty() {
            return Err(UnaliasError::parse(path, diagnostics));
        }

        let mut program = parsed.program;

        // Built from the untouched program; rewritten separately below
        let mut declarations = if self.options.declarations && source_type.is_typescript() {
            let ret = IsolatedDeclarations::new(
                &allocator,
                IsolatedDeclarationsOptions {
                    strip_internal: self.options.strip_internal,
                },
            )
            .build(&program);
            diagnostics.extend(ret.errors.iter().map(|err| format!("{:?}", err)));
            Some(ret.program)
        } else {
            None
        };

        let mut rewrites = Vec::new();
        for pass in &self.passes {
            let result = pass.run(
                &allocator,
                EmitTree::File(SourceFile::new(path, &mut program)),
            )?;
            rewrites.extend(result.rewrites);
            diagnostics.extend(result.diagnostics);

            if let Some(dts) = declarations.as_mut() {
                let result =
                    pass.run(&allocator, EmitTree::File(SourceFile::new(path, dts)))?;
                rewrites.extend(result.rewrites);
                diagnostics.extend(result.diagnostics);
            }
        }

        let code = Codegen::new().build(&program).code;
        let declarations = declarations.map(|dts| Codegen::new().build(&dts).code);

        tracing::debug!(
            file = %path.display(),
            rewrites = rewrites.len(),
            declarations = declarations.is_some(),
            "emitted file"
        );

        Ok(EmitOutput {
            code,
            declarations,
            rewrites,
            diagnostics,
        })
    }
}
