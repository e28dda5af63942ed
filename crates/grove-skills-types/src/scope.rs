//! Install scopes and agent providers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillError;

/// Where skills are installed relative to the user, project or system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    User,
    Project,
    RepoRoot,
    Admin,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Project => write!(f, "project"),
            Self::RepoRoot => write!(f, "repo-root"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Scope {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "project" => Ok(Self::Project),
            "repo-root" => Ok(Self::RepoRoot),
            "admin" => Ok(Self::Admin),
            other => Err(SkillError::Scope(format!(
                "invalid scope: {other} (valid: 'user', 'project', 'repo-root', 'admin')"
            ))),
        }
    }
}

/// Agent runtime that consumes installed skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Claude,
    Codex,
    OpenCode,
}

impl Provider {
    /// Path segments appended to a scope root to reach the skills directory.
    pub fn skills_dir_segments(self, scope: Scope) -> [&'static str; 2] {
        match (self, scope) {
            (Self::Codex, Scope::Admin) => ["codex", "skills"],
            (Self::Claude, _) => [".claude", "skills"],
            (Self::Codex, _) => [".codex", "skills"],
            (Self::OpenCode, _) => [".opencode", "skill"],
        }
    }

    /// Whether the system-wide `admin` scope exists for this provider.
    pub fn supports_admin(self) -> bool {
        matches!(self, Self::Codex)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Claude => write!(f, "claude"),
            Self::Codex => write!(f, "codex"),
            Self::OpenCode => write!(f, "opencode"),
        }
    }
}

impl FromStr for Provider {
    type Err = SkillError;

    /// Provider names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "claude" => Ok(Self::Claude),
            "codex" => Ok(Self::Codex),
            "opencode" => Ok(Self::OpenCode),
            _ => Err(SkillError::Scope(format!(
                "unsupported provider: {s} (valid: 'claude', 'codex', 'opencode')"
            ))),
        }
    }
}

/// A materialized install destination for one `(scope, provider)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeTarget {
    pub scope: Scope,
    pub provider: Provider,
    /// Absolute directory under which each skill gets its own subdirectory.
    pub root: PathBuf,
}

impl ScopeTarget {
    /// Directory a skill named `name` occupies under this target.
    pub fn skill_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
