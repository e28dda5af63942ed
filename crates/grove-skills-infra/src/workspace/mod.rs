//! Workspace discovery backed by `skills.toml`.

pub mod git;
pub mod notebook;

use std::path::Path;

use grove_skills_core::workspace::WorkspaceProvider;
use grove_skills_types::config::WorkspaceEntry;
use grove_skills_types::workspace::WorkspaceNode;

use crate::filesystem::expand_home;

/// Workspaces declared in the `[[workspaces]]` table.
#[derive(Debug, Clone, Default)]
pub struct ConfigWorkspaceProvider {
    nodes: Vec<WorkspaceNode>,
}

impl ConfigWorkspaceProvider {
    /// Build from config entries, expanding `~` in every path against `home`.
    pub fn from_entries(entries: &[WorkspaceEntry], home: Option<&Path>) -> Self {
        let expand = |p: &Path| expand_home(p, home);
        let nodes = entries
            .iter()
            .map(|entry| WorkspaceNode {
                name: entry.name.clone(),
                path: expand(&entry.path),
                kind: entry.kind,
                parent_ecosystem: entry.parent_ecosystem.as_deref().map(expand),
                root_ecosystem: entry.root_ecosystem.as_deref().map(expand),
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl WorkspaceProvider for ConfigWorkspaceProvider {
    /// The workspace whose path is the longest ancestor-or-self of `path`.
    fn find_by_path(&self, path: &Path) -> Option<WorkspaceNode> {
        self.nodes
            .iter()
            .filter(|node| path.starts_with(&node.path))
            .max_by_key(|node| node.path.components().count())
            .cloned()
    }

    fn all(&self) -> Vec<WorkspaceNode> {
        self.nodes.clone()
    }
}
