//! Git repository root detection.

use std::path::{Path, PathBuf};

use grove_skills_core::workspace::GitRootLocator;

/// Walks up from a path to the first directory containing `.git`.
///
/// `.git` may be a directory (a normal checkout) or a file (a linked
/// worktree); either marks the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotGitLocator;

impl GitRootLocator for DotGitLocator {
    fn git_root(&self, path: &Path) -> Option<PathBuf> {
        path.ancestors()
            .find(|dir| dir.join(".git").exists())
            .map(Path::to_path_buf)
    }
}
