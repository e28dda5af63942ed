//! Configuration types for `skills.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::workspace::WorkspaceKind;

/// Top-level `skills.toml`, read from the grove config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Provider used when `--provider` is omitted.
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Scope used when `--scope` is omitted.
    #[serde(default = "default_scope")]
    pub default_scope: String,

    #[serde(default)]
    pub notebook: NotebookConfig,

    /// Known workspaces. Discovery is driven entirely by this list.
    #[serde(default)]
    pub workspaces: Vec<WorkspaceEntry>,
}

fn default_provider() -> String {
    "claude".to_string()
}

fn default_scope() -> String {
    "user".to_string()
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            default_scope: default_scope(),
            notebook: NotebookConfig::default(),
            workspaces: Vec::new(),
        }
    }
}

/// Notebook location. Skills of workspace `W` live in
/// `{root_dir}/workspaces/W/skills`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotebookConfig {
    #[serde(default)]
    pub root_dir: Option<PathBuf>,
}

/// One `[[workspaces]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: WorkspaceKind,
    #[serde(default)]
    pub parent_ecosystem: Option<PathBuf>,
    #[serde(default)]
    pub root_ecosystem: Option<PathBuf>,
}
