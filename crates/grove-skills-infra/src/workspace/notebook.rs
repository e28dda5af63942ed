//! Notebook layout: `{root}/workspaces/{workspace-name}/skills`.

use std::path::{Path, PathBuf};

use grove_skills_core::workspace::NotebookLocator;
use grove_skills_types::workspace::WorkspaceNode;

use crate::filesystem::expand_home;

/// Notebook rooted at a configured directory. Without a root no workspace
/// has notebook skills.
#[derive(Debug, Clone, Default)]
pub struct NotebookLayout {
    root: Option<PathBuf>,
}

impl NotebookLayout {
    pub fn new(root: Option<&Path>, home: Option<&Path>) -> Self {
        Self {
            root: root.map(|r| expand_home(r, home)),
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}

impl NotebookLocator for NotebookLayout {
    fn skills_dir(&self, node: &WorkspaceNode) -> Option<PathBuf> {
        let root = self.root.as_ref()?;
        Some(root.join("workspaces").join(&node.name).join("skills"))
    }
}
