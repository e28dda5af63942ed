//! Mapping of `(scope, provider)` to install directories.
//!
//! | scope     | claude                     | codex                     | opencode                    |
//! |-----------|----------------------------|---------------------------|-----------------------------|
//! | user      | `$HOME/.claude/skills`     | `$HOME/.codex/skills`     | `$HOME/.opencode/skill`     |
//! | project   | `<dir>/.claude/skills`     | `<dir>/.codex/skills`     | `<dir>/.opencode/skill`     |
//! | repo-root | `<git-root>/.claude/skills`| `<git-root>/.codex/skills`| `<git-root>/.opencode/skill`|
//! | admin     | unsupported                | `/etc/codex/skills`       | unsupported                 |

use std::path::{Path, PathBuf};

use grove_skills_types::error::SkillError;
use grove_skills_types::scope::{Provider, Scope, ScopeTarget};

use crate::workspace::GitRootLocator;

/// Root of the system-wide `admin` scope.
pub const ADMIN_ROOT: &str = "/etc";

/// Project-scope target rooted at `dir`.
pub fn project_target(provider: Provider, dir: &Path) -> ScopeTarget {
    target_under(Scope::Project, provider, dir)
}

fn target_under(scope: Scope, provider: Provider, base: &Path) -> ScopeTarget {
    let mut root = base.to_path_buf();
    root.extend(provider.skills_dir_segments(scope));
    ScopeTarget {
        scope,
        provider,
        root,
    }
}

/// Resolves scope targets against the caller's home directory and git layout.
pub struct ScopeResolver<'a> {
    home: Option<PathBuf>,
    git: &'a dyn GitRootLocator,
}

impl<'a> ScopeResolver<'a> {
    pub fn new(home: Option<PathBuf>, git: &'a dyn GitRootLocator) -> Self {
        Self { home, git }
    }

    /// Destination for `scope`/`provider`, with `base_dir` standing in for the
    /// current directory (the project root, and the starting point of the
    /// git-root search).
    pub fn target(
        &self,
        scope: Scope,
        provider: Provider,
        base_dir: &Path,
    ) -> Result<ScopeTarget, SkillError> {
        let base = match scope {
            Scope::User => self.home.clone().ok_or_else(|| {
                SkillError::Scope("could not determine home directory for 'user' scope".to_string())
            })?,
            Scope::Project => base_dir.to_path_buf(),
            Scope::RepoRoot => self.git_root(base_dir, "'repo-root' scope")?,
            Scope::Admin => {
                if !provider.supports_admin() {
                    return Err(SkillError::Scope(
                        "'admin' scope is only supported for the 'codex' provider".to_string(),
                    ));
                }
                PathBuf::from(ADMIN_ROOT)
            }
        };

        Ok(target_under(scope, provider, &base))
    }

    /// Provider directory under the git root enclosing `dir`, used to sync a
    /// worktree in place.
    pub fn worktree_target(&self, provider: Provider, dir: &Path) -> Result<ScopeTarget, SkillError> {
        let root = self.git_root(dir, "--here")?;
        Ok(target_under(Scope::RepoRoot, provider, &root))
    }

    fn git_root(&self, dir: &Path, what: &str) -> Result<PathBuf, SkillError> {
        self.git.git_root(dir).ok_or_else(|| {
            SkillError::Scope(format!(
                "could not find git repository root for {what} (from {})",
                dir.display()
            ))
        })
    }
}
