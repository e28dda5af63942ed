//! Fan a resolved view out to every child project of an ecosystem.

use std::path::PathBuf;

use grove_skills_types::error::SkillError;
use grove_skills_types::scope::Provider;
use grove_skills_types::workspace::WorkspaceNode;

use super::fs::FileSystem;
use super::sync::{SyncOptions, SyncReport, sync_skills};
use crate::scope::project_target;
use crate::skill::resolver::ResolvedView;
use crate::workspace::{WorkspaceProvider, ecosystem_children};

/// Sync result for one child project.
#[derive(Debug)]
pub struct ChildSync {
    pub workspace: WorkspaceNode,
    /// The child's own project-scope skills directory.
    pub target: PathBuf,
    pub report: SyncReport,
}

/// Result of an ecosystem-wide distribution.
#[derive(Debug)]
pub enum Distribution {
    /// The resolved view was empty; nothing was written.
    NoSkills,
    /// Discovery found no child projects. Not a failure: discovery may be partial.
    NoChildren,
    Synced(Vec<ChildSync>),
}

/// Fail with a scope error unless `node` is an ecosystem-kind workspace.
///
/// Callers run this before enumerating sources so a misplaced invocation
/// touches nothing.
pub fn require_ecosystem(node: &WorkspaceNode) -> Result<(), SkillError> {
    if node.is_ecosystem() {
        return Ok(());
    }
    Err(SkillError::Scope(format!(
        "--ecosystem requires running from an ecosystem root (current: {}, kind: {})",
        node.name, node.kind
    )))
}

/// Sync `view` into the project-scope directory of every child of `ecosystem`.
///
/// Fails with a scope error, before any I/O, unless `ecosystem` is an
/// ecosystem-kind workspace. An empty view is reported before children are
/// looked up. Each child is synced into a directory rooted at
/// the child's own path, always overwriting; `options.prune` applies per child.
pub fn distribute<F: FileSystem + ?Sized>(
    fs: &F,
    view: &ResolvedView<'_>,
    ecosystem: &WorkspaceNode,
    workspaces: &dyn WorkspaceProvider,
    provider: Provider,
    options: SyncOptions,
) -> Result<Distribution, SkillError> {
    require_ecosystem(ecosystem)?;

    if view.is_empty() {
        tracing::info!(ecosystem = %ecosystem.name, "No skills found to sync");
        return Ok(Distribution::NoSkills);
    }

    let children = ecosystem_children(workspaces, ecosystem);
    if children.is_empty() {
        tracing::info!(ecosystem = %ecosystem.name, "No child projects found in ecosystem");
        return Ok(Distribution::NoChildren);
    }

    tracing::info!(
        ecosystem = %ecosystem.name,
        skills = view.len(),
        children = children.len(),
        "Distributing skills across ecosystem"
    );

    let synced = children
        .into_iter()
        .map(|child| {
            let target = project_target(provider, &child.path);
            tracing::debug!(project = %child.name, path = %target.root.display(), "Syncing child project");
            let report = sync_skills(fs, view, &target.root, options);
            ChildSync {
                workspace: child,
                target: target.root,
                report,
            }
        })
        .collect();

    Ok(Distribution::Synced(synced))
}
