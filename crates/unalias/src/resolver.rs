//! Alias resolution.
//!
//! Answers "what relative specifier, if any, should replace this one?" for a
//! given importing file. Resolution is purely textual: targets are joined
//! against the base directory and made relative to the importing file's
//! directory without checking that anything exists on disk.

use std::path::{Path, PathBuf};

use unalias_config::{AliasConfig, PathMappings};

use crate::paths::{absolutize, is_absolute_specifier, relative_path, to_specifier};
use crate::pattern::{AliasRule, best_match, parse_rules};

/// Resolves aliased module specifiers to relative ones.
///
/// Built once per program and shared read-only across files.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
    cwd: PathBuf,
    rules: Vec<AliasRule>,
}

impl PathResolver {
    /// Create a resolver from a base directory and an alias table.
    ///
    /// Keys with more than one wildcard are dropped. A relative `base_dir` is
    /// anchored at the process working directory.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use unalias::{PathMappings, PathResolver};
    ///
    /// let mut paths = PathMappings::new();
    /// paths.insert("lib/*".to_string(), vec!["./vendor/*".to_string()]);
    ///
    /// let resolver = PathResolver::new("/proj", &paths);
    /// let resolved = resolver.resolve(Path::new("/proj/src/app.ts"), "lib/widgets/button");
    /// assert_eq!(resolved.as_deref(), Some("../vendor/widgets/button"));
    /// ```
    pub fn new(base_dir: impl Into<PathBuf>, paths: &PathMappings) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        let base_dir = base_dir.into();
        let rules = parse_rules(paths);

        tracing::debug!(
            base_dir = %base_dir.display(),
            patterns = paths.len(),
            supported = rules.len(),
            "created path alias resolver"
        );

        Self {
            base_dir,
            cwd,
            rules,
        }
    }

    /// Create a resolver that never matches anything.
    pub fn inert() -> Self {
        Self {
            base_dir: PathBuf::new(),
            cwd: PathBuf::new(),
            rules: Vec::new(),
        }
    }

    /// Create a resolver from loaded configuration.
    ///
    /// Missing or empty `paths` yields an inert resolver.
    pub fn from_config(config: &AliasConfig) -> Self {
        match &config.paths {
            Some(paths) if !paths.is_empty() => Self::new(&config.base_dir, paths),
            _ => Self::inert(),
        }
    }

    /// Anchor relative file paths and a relative base directory at `cwd`
    /// instead of the process working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// True when no usable patterns are configured.
    pub fn is_inert(&self) -> bool {
        self.rules.is_empty()
    }

    /// The absolute directory targets are joined against.
    pub fn base_dir(&self) -> PathBuf {
        absolutize(&self.base_dir, &self.cwd)
    }

    /// The supported patterns, in configuration order.
    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Resolve `specifier` as written in `containing_file`.
    ///
    /// Returns `None` when the resolver is inert, the specifier is absolute,
    /// or no pattern matches. A match always yields a `./` or `../` relative
    /// specifier with forward slashes, even if it equals the input.
    pub fn resolve(&self, containing_file: &Path, specifier: &str) -> Option<String> {
        if self.is_inert() || is_absolute_specifier(specifier) {
            return None;
        }

        let rule = best_match(&self.rules, specifier)?;
        let candidate = rule.substitute(rule.pattern.capture(specifier))?;

        let target = absolutize(&self.base_dir.join(&candidate), &self.cwd);
        let file = absolutize(containing_file, &self.cwd);
        let from_dir = file.parent().unwrap_or(&file);

        let resolved = to_specifier(&relative_path(from_dir, &target));

        tracing::trace!(
            file = %containing_file.display(),
            specifier,
            pattern = %rule.pattern,
            resolved = %resolved,
            "resolved path alias"
        );

        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mappings(entries: &[(&str, &[&str])]) -> PathMappings {
        entries
            .iter()
            .map(|(key, targets)| {
                (
                    key.to_string(),
                    targets.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    fn resolver(entries: &[(&str, &[&str])]) -> PathResolver {
        PathResolver::new("/proj", &mappings(entries)).with_cwd("/proj")
    }

    #[test]
    fn wildcard_capture_is_made_relative() {
        let resolver = resolver(&[("lib/*", &["./vendor/*"])]);
        assert_eq!(
            resolver.resolve(Path::new("/proj/src/app.ts"), "lib/widgets/button"),
            Some("../vendor/widgets/button".to_string())
        );
    }

    #[test]
    fn same_directory_gets_dot_slash() {
        let resolver = resolver(&[("@app/*", &["./src/app/*"])]);
        assert_eq!(
            resolver.resolve(Path::new("/proj/src/app/main.ts"), "@app/store"),
            Some("./store".to_string())
        );
    }

    #[test]
    fn exact_pattern_has_no_capture() {
        let resolver = resolver(&[("@config", &["./src/config/index"])]);
        assert_eq!(
            resolver.resolve(Path::new("/proj/src/main.ts"), "@config"),
            Some("./config/index".to_string())
        );
        assert_eq!(resolver.resolve(Path::new("/proj/src/main.ts"), "@config/x"), None);
    }

    #[test]
    fn longest_prefix_selects_target() {
        let resolver = resolver(&[("a/*", &["x/*"]), ("a/b/*", &["y/*"])]);
        assert_eq!(
            resolver.resolve(Path::new("/proj/main.ts"), "a/b/c"),
            Some("./y/c".to_string())
        );
        assert_eq!(
            resolver.resolve(Path::new("/proj/main.ts"), "a/z"),
            Some("./x/z".to_string())
        );
    }

    #[test]
    fn only_first_target_is_used() {
        let resolver = resolver(&[("@ui/*", &["./packages/ui/*", "./fallback/ui/*"])]);
        assert_eq!(
            resolver.resolve(Path::new("/proj/index.ts"), "@ui/button"),
            Some("./packages/ui/button".to_string())
        );
    }

    #[test]
    fn multi_wildcard_keys_never_match() {
        let resolver = resolver(&[("a/*/b/*", &["./x/*"])]);
        assert!(resolver.is_inert());
        assert_eq!(resolver.resolve(Path::new("/proj/main.ts"), "a/1/b/2"), None);
    }

    #[test]
    fn absolute_specifiers_are_left_alone() {
        let resolver = resolver(&[("*", &["./types/*"])]);
        assert_eq!(resolver.resolve(Path::new("/proj/main.ts"), "/abs/module"), None);
    }

    #[test]
    fn unmatched_specifier_is_none() {
        let resolver = resolver(&[("@app/*", &["./src/app/*"])]);
        assert_eq!(resolver.resolve(Path::new("/proj/main.ts"), "react"), None);
        assert_eq!(resolver.resolve(Path::new("/proj/main.ts"), "./local"), None);
    }

    #[test]
    fn relative_containing_file_uses_cwd() {
        let resolver = resolver(&[("@app/*", &["./src/app/*"])]);
        assert_eq!(
            resolver.resolve(Path::new("src/pages/home.ts"), "@app/util"),
            Some("../app/util".to_string())
        );
    }

    #[test]
    fn relative_base_dir_uses_cwd() {
        let resolver =
            PathResolver::new("web", &mappings(&[("~/*", &["./src/*"])])).with_cwd("/repo");
        assert_eq!(resolver.base_dir(), PathBuf::from("/repo/web"));
        assert_eq!(
            resolver.resolve(Path::new("/repo/web/src/deep/a.ts"), "~/b"),
            Some("../b".to_string())
        );
    }

    #[test]
    fn empty_capture_is_substituted() {
        let resolver = resolver(&[("@app/*", &["./src/app/*"])]);
        assert_eq!(
            resolver.resolve(Path::new("/proj/src/main.ts"), "@app/"),
            Some("./app".to_string())
        );
    }

    #[test]
    fn empty_target_list_does_not_resolve() {
        let resolver = resolver(&[("@app/*", &[])]);
        assert!(!resolver.is_inert());
        assert_eq!(resolver.resolve(Path::new("/proj/main.ts"), "@app/x"), None);
    }

    #[test]
    fn from_config_without_paths_is_inert() {
        let config = AliasConfig {
            base_dir: PathBuf::from("/proj"),
            paths: None,
        };
        let resolver = PathResolver::from_config(&config);
        assert!(resolver.is_inert());
        assert_eq!(resolver.resolve(Path::new("/proj/a.ts"), "anything"), None);
    }

    #[test]
    fn target_outside_base_dir() {
        let resolver = resolver(&[("shared/*", &["../shared/src/*"])]);
        assert_eq!(
            resolver.resolve(Path::new("/proj/src/index.ts"), "shared/log"),
            Some("../../shared/src/log".to_string())
        );
    }
}
