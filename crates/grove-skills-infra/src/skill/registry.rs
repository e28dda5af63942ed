//! Source discovery: which skill sources are reachable from here.

use std::path::{Path, PathBuf};

use grove_skills_core::skill::source::SourceSet;
use grove_skills_core::workspace::{NotebookLocator, root_ecosystem_node};
use grove_skills_types::skill::SourceKind;
use grove_skills_types::workspace::WorkspaceNode;

use super::directory::DirectorySource;
use super::embedded::EmbeddedSource;
use crate::filesystem::user_skills_dir;

/// Enumerates the sources for one invocation.
///
/// - The built-in source is always present.
/// - The user source is present when the grove config directory is known.
/// - Notebook sources (project, and ecosystem when the workspace sits inside
///   one) are present only with a workspace context and an existing
///   notebook skills directory.
pub struct SourceRegistry<'a> {
    config_dir: Option<PathBuf>,
    notebooks: &'a dyn NotebookLocator,
    builtin: EmbeddedSource,
}

impl<'a> SourceRegistry<'a> {
    pub fn new(config_dir: Option<PathBuf>, notebooks: &'a dyn NotebookLocator) -> Self {
        Self {
            config_dir,
            notebooks,
            builtin: EmbeddedSource::builtin(),
        }
    }

    /// Replace the built-in skill table.
    pub fn with_builtin(mut self, builtin: EmbeddedSource) -> Self {
        self.builtin = builtin;
        self
    }

    pub fn enumerate(&self, workspace: Option<&WorkspaceNode>) -> SourceSet {
        let mut sources = SourceSet::new();
        sources.insert(Box::new(self.builtin));

        match &self.config_dir {
            Some(dir) => {
                sources.insert(Box::new(DirectorySource::new(
                    SourceKind::User,
                    user_skills_dir(dir),
                )));
            }
            None => tracing::warn!("Could not determine config directory, user skills unavailable"),
        }

        let Some(workspace) = workspace else {
            tracing::debug!("No workspace context, skipping notebook sources");
            return sources;
        };

        if let Some(ecosystem) = root_ecosystem_node(workspace)
            && let Some(dir) = self.notebook_dir(&ecosystem)
        {
            sources.insert(Box::new(DirectorySource::new(SourceKind::Ecosystem, dir)));
        }

        if let Some(dir) = self.notebook_dir(workspace) {
            sources.insert(Box::new(DirectorySource::new(SourceKind::Project, dir)));
        }

        tracing::debug!(workspace = %workspace.name, sources = ?sources.kinds(), "Enumerated skill sources");
        sources
    }

    fn notebook_dir(&self, node: &WorkspaceNode) -> Option<PathBuf> {
        let dir = self.notebooks.skills_dir(node)?;
        if is_dir(&dir) {
            Some(dir)
        } else {
            tracing::debug!(workspace = %node.name, path = %dir.display(), "No notebook skills directory");
            None
        }
    }
}

fn is_dir(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
