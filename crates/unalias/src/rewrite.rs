//! Module specifier rewriting on OXC ASTs.
//!
//! Walks a program and replaces aliased specifiers in:
//!
//! - `import ... from "x"` (including `import type` and side-effect imports)
//! - `export ... from "x"` and `export * from "x"` (including `export type`)
//! - `import("x")` where the argument is a plain string literal
//!
//! Only the specifier literal is touched. Every other node stays where it is
//! in the arena, so unchanged subtrees are shared as-is with the caller.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    ExportAllDeclaration, ExportNamedDeclaration, Expression, ImportDeclaration, ImportExpression,
    Program, StringLiteral,
};
use oxc_ast_visit::{VisitMut, walk_mut};
use oxc_span::{Atom, Span};

use crate::resolver::PathResolver;

/// Which syntax carried a rewritten specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecifierKind {
    /// `import ... from "x"`
    Import,
    /// `export ... from "x"` / `export * from "x"`
    ExportFrom,
    /// `import("x")`
    DynamicImport,
}

/// A single specifier replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub kind: SpecifierKind,
    /// Span of the original string literal.
    pub span: Span,
    pub from: String,
    pub to: String,
}

/// Visitor replacing aliased specifiers in one file.
pub struct SpecifierRewriter<'r, 'a> {
    allocator: &'a Allocator,
    resolver: &'r PathResolver,
    containing_file: &'r Path,
    rewrites: Vec<Rewrite>,
}

impl<'r, 'a> SpecifierRewriter<'r, 'a> {
    pub fn new(
        allocator: &'a Allocator,
        resolver: &'r PathResolver,
        containing_file: &'r Path,
    ) -> Self {
        Self {
            allocator,
            resolver,
            containing_file,
            rewrites: Vec::new(),
        }
    }

    /// Rewrite every aliased specifier in `program`.
    pub fn rewrite(mut self, program: &mut Program<'a>) -> Vec<Rewrite> {
        self.visit_program(program);
        self.rewrites
    }

    /// Replace `literal` if it resolves. Returns whether it was replaced.
    fn rewrite_literal(&mut self, kind: SpecifierKind, literal: &mut StringLiteral<'a>) -> bool {
        let Some(resolved) = self
            .resolver
            .resolve(self.containing_file, literal.value.as_str())
        else {
            return false;
        };

        self.rewrites.push(Rewrite {
            kind,
            span: literal.span,
            from: literal.value.to_string(),
            to: resolved.clone(),
        });

        literal.value = Atom::from(self.allocator.alloc_str(&resolved));
        // Printer falls back to `value` and re-quotes it
        literal.raw = None;
        true
    }
}

impl<'a> VisitMut<'a> for SpecifierRewriter<'_, 'a> {
    fn visit_import_declaration(&mut self, decl: &mut ImportDeclaration<'a>) {
        if self.rewrite_literal(SpecifierKind::Import, &mut decl.source) {
            return;
        }
        walk_mut::walk_import_declaration(self, decl);
    }

    fn visit_export_named_declaration(&mut self, decl: &mut ExportNamedDeclaration<'a>) {
        if let Some(source) = decl.source.as_mut() {
            if self.rewrite_literal(SpecifierKind::ExportFrom, source) {
                return;
            }
        }
        walk_mut::walk_export_named_declaration(self, decl);
    }

    fn visit_export_all_declaration(&mut self, decl: &mut ExportAllDeclaration<'a>) {
        if self.rewrite_literal(SpecifierKind::ExportFrom, &mut decl.source) {
            return;
        }
        walk_mut::walk_export_all_declaration(self, decl);
    }

    fn visit_import_expression(&mut self, expr: &mut ImportExpression<'a>) {
        if let Expression::StringLiteral(literal) = &mut expr.source {
            if self.rewrite_literal(SpecifierKind::DynamicImport, literal) {
                return;
            }
        }
        walk_mut::walk_import_expression(self, expr);
    }
}
