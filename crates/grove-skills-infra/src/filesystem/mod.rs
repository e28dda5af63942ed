//! Filesystem adapters for grove-skills.
//!
//! Implements the `FileSystem` trait from `grove-skills-core` on top of
//! `std::fs`, and resolves the grove config directory and its `skills/` source.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use grove_skills_core::service::fs::FileSystem;

/// Local filesystem implementation of the `FileSystem` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn list_dirs(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Resolve the grove config directory from the environment.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/grove` when the variable is set and non-empty
/// 2. `$HOME/.config/grove`
///
/// Returns `None` when neither is available.
pub fn resolve_config_dir() -> Option<PathBuf> {
    config_dir_from(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
}

/// Pure form of [`resolve_config_dir`].
pub fn config_dir_from(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = match xdg_config_home {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home?.join(".config"),
    };
    Some(base.join("grove"))
}

/// Per-user skills source: `{config_dir}/skills`.
pub fn user_skills_dir(config_dir: &Path) -> PathBuf {
    config_dir.join("skills")
}

/// Expand a leading `~/` (or a bare `~`) against `home`.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let file_path = dir.path().join("nested").join("deep").join("SKILL.md");

        fs.write_file(&file_path, b"nested content").unwrap();
        assert_eq!(std::fs::read(&file_path).unwrap(), b"nested content");
        assert!(fs.exists(&file_path));
    }

    #[test]
    fn test_list_dirs_skips_files() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        fs.create_dir_all(&dir.path().join("beta")).unwrap();
        fs.create_dir_all(&dir.path().join("alpha")).unwrap();
        fs.write_file(&dir.path().join("notes.txt"), b"x").unwrap();

        assert_eq!(fs.list_dirs(dir.path()).unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_list_dirs_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let err = LocalFileSystem::new()
            .list_dirs(&dir.path().join("absent"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_dir_all() {
        let dir = tempdir().unwrap();
        let fs = LocalFileSystem::new();
        let skill = dir.path().join("skill");
        fs.write_file(&skill.join("a/b.md"), b"x").unwrap();

        fs.remove_dir_all(&skill).unwrap();
        assert!(!fs.exists(&skill));
    }

    #[test]
    fn config_dir_prefers_xdg() {
        let dir = config_dir_from(
            Some(OsString::from("/xdg")),
            Some(PathBuf::from("/home/dev")),
        );
        assert_eq!(dir, Some(PathBuf::from("/xdg/grove")));
    }

    #[test]
    fn config_dir_ignores_empty_xdg() {
        let dir = config_dir_from(Some(OsString::new()), Some(PathBuf::from("/home/dev")));
        assert_eq!(dir, Some(PathBuf::from("/home/dev/.config/grove")));
    }

    #[test]
    fn config_dir_without_home_or_xdg() {
        assert_eq!(config_dir_from(None, None), None);
    }

    #[test]
    fn user_skills_under_config_dir() {
        assert_eq!(
            user_skills_dir(Path::new("/home/dev/.config/grove")),
            PathBuf::from("/home/dev/.config/grove/skills")
        );
    }

    #[test]
    fn expand_home_only_touches_tilde() {
        let home = Path::new("/home/dev");
        assert_eq!(
            expand_home(Path::new("~/.grove/nb"), Some(home)),
            PathBuf::from("/home/dev/.grove/nb")
        );
        assert_eq!(expand_home(Path::new("~"), Some(home)), PathBuf::from("/home/dev"));
        assert_eq!(
            expand_home(Path::new("/abs/nb"), Some(home)),
            PathBuf::from("/abs/nb")
        );
        assert_eq!(expand_home(Path::new("~/x"), None), PathBuf::from("~/x"));
    }
}
