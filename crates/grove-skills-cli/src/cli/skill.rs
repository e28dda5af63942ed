//! CLI skill subcommands: list, install, sync and remove.

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use grove_skills_core::service::ecosystem::{Distribution, distribute, require_ecosystem};
use grove_skills_core::service::installer::{InstallOptions, install_skill, remove_skill};
use grove_skills_core::service::sync::{SyncFailure, SyncOptions, SyncReport, sync_skills};
use grove_skills_core::skill::resolver::{ResolvedView, resolve};
use grove_skills_types::error::SkillError;
use grove_skills_types::scope::{Provider, Scope, ScopeTarget};
use grove_skills_types::skill::SourceKind;

use crate::state::AppState;

/// Skill management subcommands.
#[derive(Subcommand)]
pub enum SkillCommand {
    /// List available skills from all sources.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Install a skill, or every available skill with `all`.
    Install(InstallArgs),

    /// Sync all available skills to the target directory.
    ///
    /// With --ecosystem, run from an ecosystem root, the skills are synced into
    /// every child project of the ecosystem instead.
    Sync(SyncArgs),

    /// Remove an installed skill.
    #[command(alias = "rm")]
    Remove(RemoveArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Show where each skill is loaded from.
    #[arg(long)]
    pub path: bool,
}

#[derive(Args)]
pub struct InstallArgs {
    /// Skill name, or `all`.
    pub name: String,

    /// Installation scope: user, project, repo-root, or admin (codex only).
    #[arg(long)]
    pub scope: Option<Scope>,

    /// Agent provider: claude, codex or opencode.
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Overwrite an existing installed skill.
    #[arg(short, long)]
    pub force: bool,

    /// Skip SKILL.md validation.
    #[arg(long)]
    pub skip_validation: bool,
}

#[derive(Args)]
pub struct SyncArgs {
    /// Sync scope: user, project, repo-root, or admin (codex only).
    #[arg(long, conflicts_with = "here")]
    pub scope: Option<Scope>,

    /// Agent provider: claude, codex or opencode.
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Remove skills from the destination that no longer exist in any source.
    #[arg(long)]
    pub prune: bool,

    /// Skip SKILL.md validation.
    #[arg(long)]
    pub skip_validation: bool,

    /// Sync into every child project of the ecosystem (run from the ecosystem root).
    #[arg(long, conflicts_with_all = ["here", "scope"])]
    pub ecosystem: bool,

    /// Sync into the git root of the current worktree.
    #[arg(long)]
    pub here: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Skill name to remove.
    pub name: String,

    /// Scope the skill was installed to.
    #[arg(long)]
    pub scope: Option<Scope>,

    /// Agent provider the skill was installed for.
    #[arg(long)]
    pub provider: Option<Provider>,
}

/// Handle a skill subcommand.
pub fn handle_skill_command(cmd: SkillCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        SkillCommand::List(args) => handle_list(&args, state, json),
        SkillCommand::Install(args) => handle_install(&args, state, json),
        SkillCommand::Sync(args) => handle_sync(&args, state, json),
        SkillCommand::Remove(args) => handle_remove(&args, state, json),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

fn handle_list(args: &ListArgs, state: &AppState, json: bool) -> Result<()> {
    let sources = state.sources();
    let view = resolve(&sources);

    if json {
        let out: Vec<_> = view
            .iter()
            .map(|(name, entry)| {
                serde_json::json!({
                    "name": name,
                    "source": entry.kind().to_string(),
                    "path": entry.location().describe(name),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if view.is_empty() {
        println!();
        println!("  No skills found.");
        println!();
        return Ok(());
    }

    let mut header = vec![Cell::new("SKILL").fg(Color::Cyan), Cell::new("SOURCE")];
    if args.path {
        header.push(Cell::new("PATH"));
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for (name, entry) in view.iter() {
        let kind = entry.kind();
        let mut row = vec![
            Cell::new(name),
            Cell::new(kind.to_string()).fg(source_color(kind)),
        ];
        if args.path {
            row.push(Cell::new(entry.location().describe(name)));
        }
        table.add_row(row);
    }

    println!();
    println!("{table}");
    println!();

    Ok(())
}

fn source_color(kind: SourceKind) -> Color {
    match kind {
        SourceKind::Builtin => Color::DarkGrey,
        SourceKind::User => Color::Green,
        SourceKind::Ecosystem => Color::Yellow,
        SourceKind::Project => Color::Magenta,
    }
}

// ---------------------------------------------------------------------------
// Install
// ---------------------------------------------------------------------------

fn handle_install(args: &InstallArgs, state: &AppState, json: bool) -> Result<()> {
    let target = state.target(args.scope, args.provider)?;
    let sources = state.sources();
    let view = resolve(&sources);
    let options = InstallOptions {
        overwrite: args.force,
        skip_validation: args.skip_validation,
    };

    if args.name == "all" {
        return install_all(&view, &target, options, state, json);
    }

    let skill = view.read(&args.name)?;
    let dest = install_skill(&state.fs, &skill, &target.root, options)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "installed": args.name,
                "path": dest,
                "scope": target.scope,
                "provider": target.provider,
            }))?
        );
    } else {
        println!();
        println!(
            "  {} Installed skill '{}' for {} ({} scope)",
            style("*").green().bold(),
            style(&args.name).cyan(),
            target.provider,
            target.scope
        );
        println!("  {}", style(dest.display()).dim());
        println!();
    }

    Ok(())
}

/// Install every resolved skill. Per-skill failures are reported and skipped.
fn install_all(
    view: &ResolvedView<'_>,
    target: &ScopeTarget,
    options: InstallOptions,
    state: &AppState,
    json: bool,
) -> Result<()> {
    let mut installed = Vec::new();
    let mut failed = Vec::new();

    for name in view.names() {
        let result = view
            .read(name)
            .and_then(|skill| install_skill(&state.fs, &skill, &target.root, options));
        match result {
            Ok(_) => installed.push(name.to_string()),
            Err(e) => {
                tracing::warn!(skill = %name, error = %e, "Failed to install skill");
                failed.push(SyncFailure {
                    name: name.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "installed": installed,
                "failed": failed,
                "target": target,
            }))?
        );
        return Ok(());
    }

    println!();
    print_failures(&failed, "install");
    println!(
        "  {} Installed {} of {} skills to {} for {}.",
        style("*").green().bold(),
        style(installed.len()).cyan(),
        view.len(),
        target.scope,
        target.provider
    );
    println!("  {}", style(target.root.display()).dim());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// Sync
// ---------------------------------------------------------------------------

fn handle_sync(args: &SyncArgs, state: &AppState, json: bool) -> Result<()> {
    let options = SyncOptions {
        prune: args.prune,
        skip_validation: args.skip_validation,
    };

    if args.ecosystem {
        return sync_ecosystem(args, options, state, json);
    }

    let target = if args.here {
        state
            .scope_resolver()
            .worktree_target(state.provider(args.provider), &state.cwd)?
    } else {
        state.target(args.scope, args.provider)?
    };

    let sources = state.sources();
    let view = resolve(&sources);

    if !json {
        println!();
        println!(
            "  {} Syncing {} skills to {} for {}...",
            style("*").cyan(),
            view.len(),
            target.scope,
            target.provider
        );
    }

    let report = sync_skills(&state.fs, &view, &target.root, options);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "target": target,
                "report": report,
            }))?
        );
        return Ok(());
    }

    print_report(&report, "  ");
    println!("  {} Sync complete.", style("*").green().bold());
    println!("  {}", style(target.root.display()).dim());
    println!();

    Ok(())
}

fn sync_ecosystem(args: &SyncArgs, options: SyncOptions, state: &AppState, json: bool) -> Result<()> {
    let node = state.current_workspace().ok_or_else(|| {
        SkillError::Scope(format!(
            "--ecosystem requires running from an ecosystem root (no workspace found for {})",
            state.cwd.display()
        ))
    })?;
    require_ecosystem(&node)?;

    let provider = state.provider(args.provider);
    let sources = state.sources();
    let view = resolve(&sources);

    let outcome = distribute(&state.fs, &view, &node, &state.workspaces, provider, options)?;

    let children = match outcome {
        Distribution::NoSkills => {
            report_nothing_to_do(json, "no_skills", "No skills found to sync.");
            return Ok(());
        }
        Distribution::NoChildren => {
            report_nothing_to_do(
                json,
                "no_children",
                "No child projects found in this ecosystem.",
            );
            return Ok(());
        }
        Distribution::Synced(children) => children,
    };

    if json {
        let out: Vec<_> = children
            .iter()
            .map(|child| {
                serde_json::json!({
                    "project": child.workspace.name,
                    "target": child.target,
                    "report": child.report,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "ecosystem": node.name,
                "provider": provider,
                "projects": out,
            }))?
        );
        return Ok(());
    }

    println!();
    println!(
        "  {} Synced {} skills across {} projects in '{}'.",
        style("*").cyan(),
        view.len(),
        children.len(),
        style(&node.name).cyan()
    );
    for child in &children {
        println!(
            "  {} {} {}",
            style("-").dim(),
            style(&child.workspace.name).bold(),
            style(child.target.display()).dim()
        );
        print_report(&child.report, "    ");
    }
    println!("  {} Ecosystem sync complete.", style("*").green().bold());
    println!();

    Ok(())
}

fn report_nothing_to_do(json: bool, status: &str, message: &str) {
    if json {
        println!("{}", serde_json::json!({ "status": status }));
    } else {
        println!();
        println!("  {message}");
        println!();
    }
}

fn print_report(report: &SyncReport, indent: &str) {
    println!(
        "{indent}{} installed, {} pruned, {} failed",
        style(report.installed.len()).green(),
        style(report.pruned.len()).yellow(),
        style(report.failed.len()).red()
    );
    for name in &report.pruned {
        println!("{indent}{} Pruned skill '{}'", style("-").yellow(), name);
    }
    for failure in &report.failed {
        println!(
            "{indent}{} Failed to sync skill '{}': {}",
            style("!").yellow(),
            style(&failure.name).cyan(),
            failure.error
        );
    }
}

fn print_failures(failed: &[SyncFailure], verb: &str) {
    for failure in failed {
        println!(
            "  {} Failed to {verb} skill '{}': {}",
            style("!").yellow(),
            style(&failure.name).cyan(),
            failure.error
        );
    }
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

fn handle_remove(args: &RemoveArgs, state: &AppState, json: bool) -> Result<()> {
    let target = state.target(args.scope, args.provider)?;
    let removed = remove_skill(&state.fs, &args.name, &target.root)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"removed": args.name, "path": removed})
        );
    } else {
        println!();
        println!(
            "  {} Removed skill '{}'",
            style("*").green().bold(),
            style(&args.name).cyan()
        );
        println!("  {}", style(removed.display()).dim());
        println!();
    }

    Ok(())
}
