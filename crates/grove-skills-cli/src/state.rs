//! Application state for one `grove-skills` invocation.
//!
//! Built once in `main` and passed by reference to every command handler.
//! Pins the core engine's ports to the concrete infra adapters.

use std::path::PathBuf;

use anyhow::Context;

use grove_skills_core::scope::ScopeResolver;
use grove_skills_core::skill::source::SourceSet;
use grove_skills_core::workspace::WorkspaceProvider;
use grove_skills_infra::config::{configured_provider, configured_scope, load_config};
use grove_skills_infra::filesystem::{LocalFileSystem, resolve_config_dir};
use grove_skills_infra::skill::registry::SourceRegistry;
use grove_skills_infra::workspace::ConfigWorkspaceProvider;
use grove_skills_infra::workspace::git::DotGitLocator;
use grove_skills_infra::workspace::notebook::NotebookLayout;
use grove_skills_types::config::SkillsConfig;
use grove_skills_types::error::SkillError;
use grove_skills_types::scope::{Provider, Scope, ScopeTarget};
use grove_skills_types::workspace::WorkspaceNode;

pub struct AppState {
    pub config: SkillsConfig,
    pub config_dir: Option<PathBuf>,
    pub home: Option<PathBuf>,
    pub cwd: PathBuf,
    pub workspaces: ConfigWorkspaceProvider,
    pub notebooks: NotebookLayout,
    pub git: DotGitLocator,
    pub fs: LocalFileSystem,
}

impl AppState {
    /// Resolve directories from the environment and load `skills.toml`.
    pub fn init() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("could not get current directory")?;
        Ok(Self::from_parts(resolve_config_dir(), dirs::home_dir(), cwd))
    }

    pub fn from_parts(config_dir: Option<PathBuf>, home: Option<PathBuf>, cwd: PathBuf) -> Self {
        let config = match &config_dir {
            Some(dir) => load_config(dir),
            None => SkillsConfig::default(),
        };
        let workspaces = ConfigWorkspaceProvider::from_entries(&config.workspaces, home.as_deref());
        let notebooks = NotebookLayout::new(config.notebook.root_dir.as_deref(), home.as_deref());

        tracing::debug!(
            config_dir = ?config_dir,
            cwd = %cwd.display(),
            workspaces = workspaces.len(),
            "Initialized app state"
        );

        Self {
            config,
            config_dir,
            home,
            cwd,
            workspaces,
            notebooks,
            git: DotGitLocator,
            fs: LocalFileSystem::new(),
        }
    }

    /// The workspace containing the current directory, if any is configured.
    pub fn current_workspace(&self) -> Option<WorkspaceNode> {
        self.workspaces.find_by_path(&self.cwd)
    }

    /// Every skill source reachable from the current directory.
    pub fn sources(&self) -> SourceSet {
        let workspace = self.current_workspace();
        SourceRegistry::new(self.config_dir.clone(), &self.notebooks).enumerate(workspace.as_ref())
    }

    pub fn provider(&self, requested: Option<Provider>) -> Provider {
        requested.unwrap_or_else(|| configured_provider(&self.config))
    }

    pub fn scope(&self, requested: Option<Scope>) -> Scope {
        requested.unwrap_or_else(|| configured_scope(&self.config))
    }

    pub fn scope_resolver(&self) -> ScopeResolver<'_> {
        ScopeResolver::new(self.home.clone(), &self.git)
    }

    /// Destination for the requested (or configured) scope and provider,
    /// relative to the current directory.
    pub fn target(
        &self,
        scope: Option<Scope>,
        provider: Option<Provider>,
    ) -> Result<ScopeTarget, SkillError> {
        self.scope_resolver()
            .target(self.scope(scope), self.provider(provider), &self.cwd)
    }
}
