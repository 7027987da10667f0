//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absolute_missing_path() {
        let path = Path::new("/definitely/not/here/docsite.toml");
        assert_eq!(normalize_path(path), path);
    }

    #[test]
    fn test_normalize_relative_is_absolute() {
        assert!(normalize_path(Path::new("docsite.toml")).is_absolute());
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(
            expand_tilde(Path::new("site/docsite.toml")),
            PathBuf::from("site/docsite.toml")
        );
    }
}
