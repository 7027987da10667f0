//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Absolute names are returned as-is if they exist.
///
/// # Example
/// ```text
/// /home/user/site/docs/guides/  ← start
/// /home/user/site/docsite.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs/guides");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("docsite.toml"), "").unwrap();

        let found = find_config_file(Path::new("docsite.toml"), &nested).unwrap();
        assert_eq!(found, temp.path().join("docsite.toml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        assert_eq!(find_config_file(&path, temp.path()), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            find_config_file(Path::new("no-such-config-file.toml"), temp.path()),
            None
        );
    }
}
