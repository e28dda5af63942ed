//! Workspace topology as reported by workspace discovery.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of a discovered workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkspaceKind {
    StandaloneProject,
    Ecosystem,
    EcosystemSubproject,
    EcosystemWorktree,
    ProjectWorktree,
}

impl fmt::Display for WorkspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StandaloneProject => write!(f, "standalone-project"),
            Self::Ecosystem => write!(f, "ecosystem"),
            Self::EcosystemSubproject => write!(f, "ecosystem-subproject"),
            Self::EcosystemWorktree => write!(f, "ecosystem-worktree"),
            Self::ProjectWorktree => write!(f, "project-worktree"),
        }
    }
}

/// A single workspace known to discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: WorkspaceKind,
    /// Ecosystem this workspace sits in directly.
    #[serde(default)]
    pub parent_ecosystem: Option<PathBuf>,
    /// Outermost ecosystem this workspace belongs to.
    #[serde(default)]
    pub root_ecosystem: Option<PathBuf>,
}

impl WorkspaceNode {
    pub fn is_ecosystem(&self) -> bool {
        self.kind == WorkspaceKind::Ecosystem
    }

    pub fn is_worktree(&self) -> bool {
        matches!(
            self.kind,
            WorkspaceKind::EcosystemWorktree | WorkspaceKind::ProjectWorktree
        )
    }
}
