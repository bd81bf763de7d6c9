//! Lexical path helpers. Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// Whether a specifier is an absolute path and therefore never aliased.
///
/// POSIX-style `/...` is absolute everywhere; Windows-style absolute paths
/// only count when running on Windows.
pub fn is_absolute_specifier(specifier: &str) -> bool {
    specifier.starts_with('/') || (cfg!(windows) && is_windows_absolute(specifier))
}

/// `C:\x`, `C:/x`, `\x` and `/x` are absolute in Windows terms; `C:x` is not.
pub(crate) fn is_windows_absolute(specifier: &str) -> bool {
    let bytes = specifier.as_bytes();
    match bytes {
        [b'/' | b'\\', ..] => true,
        [drive, b':', b'/' | b'\\', ..] => drive.is_ascii_alphabetic(),
        _ => false,
    }
}

/// Anchor `path` at `cwd` when relative, then normalize `.` and `..`.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf().clean()
    } else {
        cwd.join(path).clean()
    }
}

/// Path of `to` relative to the directory `from`. Both must be normalized.
///
/// When the two paths share no root (different Windows drives), `to` is
/// returned unchanged.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    if from.first() != to.first() {
        return to.iter().collect();
    }

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from.len() {
        out.push(Component::ParentDir);
    }
    for component in &to[common..] {
        out.push(component);
    }
    out
}

/// Render a relative path as a module specifier.
///
/// Separators become `/`, and a `./` prefix is added unless the path already
/// starts with `.`, so the result is never read as a bare package name.
pub fn to_specifier(relative: &Path) -> String {
    let text = relative.to_string_lossy().replace('\\', "/");
    if text.starts_with('.') {
        text
    } else {
        format!("./{text}")
    }
}
