//! Bulk install of a resolved view, with optional pruning.

use std::io;
use std::path::Path;

use serde::Serialize;

use grove_skills_types::error::SkillError;

use super::fs::FileSystem;
use super::installer::{InstallOptions, install_skill};
use crate::skill::resolver::ResolvedView;

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Remove destination skills that are not in the resolved view.
    pub prune: bool,
    pub skip_validation: bool,
}

/// A skill that could not be installed or pruned.
#[derive(Debug, Clone, Serialize)]
pub struct SyncFailure {
    pub name: String,
    pub error: String,
}

/// Outcome of one sync run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub installed: Vec<String>,
    pub pruned: Vec<String>,
    pub failed: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Install every skill of `view` into `root`, always overwriting.
///
/// Per-skill failures are logged and recorded in the report; the batch keeps
/// going. With `prune`, every top-level directory of `root` whose name is not
/// in `view` is then removed, so afterwards the destination holds exactly the
/// view's skills (plus any whose install failed and were already present).
///
/// Like `install_skill`, this assumes it is the only writer to `root`.
pub fn sync_skills<F: FileSystem + ?Sized>(
    fs: &F,
    view: &ResolvedView<'_>,
    root: &Path,
    options: SyncOptions,
) -> SyncReport {
    let mut report = SyncReport::default();
    let install = InstallOptions {
        overwrite: true,
        skip_validation: options.skip_validation,
    };

    for (name, entry) in view.iter() {
        let result = entry
            .source()
            .read(name)
            .and_then(|skill| install_skill(fs, &skill, root, install));

        match result {
            Ok(_) => report.installed.push(name.to_string()),
            Err(e) => {
                tracing::warn!(skill = %name, source = %entry.kind(), error = %e, "Failed to sync skill");
                report.failed.push(SyncFailure {
                    name: name.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    if options.prune {
        prune(fs, view, root, &mut report);
    }

    report
}

fn prune<F: FileSystem + ?Sized>(
    fs: &F,
    view: &ResolvedView<'_>,
    root: &Path,
    report: &mut SyncReport,
) {
    let existing = match fs.list_dirs(root) {
        Ok(dirs) => dirs,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return,
        Err(e) => {
            let err = SkillError::io(root, e);
            tracing::warn!(error = %err, "Failed to scan destination for pruning");
            report.failed.push(SyncFailure {
                name: root.display().to_string(),
                error: err.to_string(),
            });
            return;
        }
    };

    for name in existing {
        if view.contains(&name) {
            continue;
        }
        let path = root.join(&name);
        match fs.remove_dir_all(&path) {
            Ok(()) => {
                tracing::info!(skill = %name, path = %path.display(), "Pruned skill");
                report.pruned.push(name);
            }
            Err(e) => {
                let err = SkillError::io(&path, e);
                tracing::warn!(skill = %name, error = %err, "Failed to prune skill");
                report.failed.push(SyncFailure {
                    name,
                    error: err.to_string(),
                });
            }
        }
    }
}
