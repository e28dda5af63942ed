//! Workspace lookups the engine consumes but does not implement.
//!
//! Topology discovery, notebook layout and git-root detection are external
//! collaborators. grove-skills-infra provides the adapters.

use std::path::{Path, PathBuf};

use grove_skills_types::workspace::{WorkspaceKind, WorkspaceNode};

/// Answers "which workspace is this path in" and "which workspaces exist".
pub trait WorkspaceProvider {
    /// The deepest known workspace containing `path`.
    fn find_by_path(&self, path: &Path) -> Option<WorkspaceNode>;

    /// Every known workspace.
    fn all(&self) -> Vec<WorkspaceNode>;
}

/// Locates the notebook skills directory for a workspace.
pub trait NotebookLocator {
    fn skills_dir(&self, node: &WorkspaceNode) -> Option<PathBuf>;
}

/// Finds the enclosing git repository root of a path.
pub trait GitRootLocator {
    fn git_root(&self, path: &Path) -> Option<PathBuf>;
}

/// Child workspaces of `ecosystem`: those whose parent or root ecosystem is
/// the ecosystem's path, excluding worktrees and the ecosystem itself.
///
/// Sorted by path so fan-out order is stable.
pub fn ecosystem_children(
    provider: &dyn WorkspaceProvider,
    ecosystem: &WorkspaceNode,
) -> Vec<WorkspaceNode> {
    let mut children: Vec<_> = provider
        .all()
        .into_iter()
        .filter(|node| {
            let linked = node.parent_ecosystem.as_deref() == Some(ecosystem.path.as_path())
                || node.root_ecosystem.as_deref() == Some(ecosystem.path.as_path());
            linked && !node.is_worktree() && node.path != ecosystem.path
        })
        .collect();
    children.sort_by(|a, b| a.path.cmp(&b.path));
    children
}

/// A stand-in node for the root ecosystem of `node`, used to locate the
/// ecosystem's notebook skills. `None` when `node` is not inside an ecosystem.
pub fn root_ecosystem_node(node: &WorkspaceNode) -> Option<WorkspaceNode> {
    let root = node.root_ecosystem.as_ref()?;
    if root == &node.path {
        return None;
    }
    let name = root.file_name()?.to_string_lossy().into_owned();
    Some(WorkspaceNode {
        name,
        path: root.clone(),
        kind: WorkspaceKind::Ecosystem,
        parent_ecosystem: None,
        root_ecosystem: None,
    })
}
