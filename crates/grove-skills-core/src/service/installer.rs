//! Materialize one skill under a destination root.

use std::path::{Component, Path, PathBuf};

use grove_skills_types::error::SkillError;
use grove_skills_types::skill::{Skill, is_plain_entry_name};

use super::fs::FileSystem;
use crate::skill::manifest::validate_skill;

/// Knobs for a single install.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Replace an existing destination directory.
    pub overwrite: bool,
    /// Skip the manifest contract check. A missing `SKILL.md` is still rejected.
    pub skip_validation: bool,
}

/// Install `skill` into `{root}/{skill.name}` and return that directory.
///
/// - Unless `skip_validation` is set, the manifest is validated first and any
///   violation aborts before the filesystem is touched.
/// - An existing destination fails with `AlreadyExists` unless `overwrite` is
///   set, in which case the whole directory is removed before the files are
///   written, so no file from a previous install survives.
/// - A failure part way through writing leaves a partial directory behind; it
///   is reported, not rolled back.
///
/// The existence check and the removal/write that follow are not atomic.
/// Concurrent installs into the same root are unsafe.
pub fn install_skill<F: FileSystem + ?Sized>(
    fs: &F,
    skill: &Skill,
    root: &Path,
    options: InstallOptions,
) -> Result<PathBuf, SkillError> {
    let name = skill.name();
    if !is_plain_entry_name(name) {
        return Err(SkillError::Malformed {
            name: name.to_string(),
            reason: "skill name is not a plain directory name".to_string(),
        });
    }

    if options.skip_validation {
        if skill.manifest_bytes().is_none() {
            return Err(SkillError::Malformed {
                name: name.to_string(),
                reason: "missing required SKILL.md file".to_string(),
            });
        }
    } else {
        validate_skill(skill)?;
    }

    for rel in skill.files().keys() {
        if !is_contained(rel) {
            return Err(SkillError::Malformed {
                name: name.to_string(),
                reason: format!("file path '{rel}' escapes the skill directory"),
            });
        }
    }

    let dest = root.join(name);
    if fs.exists(&dest) {
        if !options.overwrite {
            return Err(SkillError::AlreadyExists {
                name: name.to_string(),
                path: dest,
            });
        }
        tracing::debug!(skill = %name, path = %dest.display(), "Removing existing skill before reinstall");
        fs.remove_dir_all(&dest)
            .map_err(|e| SkillError::io(&dest, e))?;
    }

    fs.create_dir_all(&dest)
        .map_err(|e| SkillError::io(&dest, e))?;

    for (rel, contents) in skill.files() {
        let path = dest.join(rel);
        fs.write_file(&path, contents)
            .map_err(|e| SkillError::io(&path, e))?;
    }

    tracing::info!(skill = %name, path = %dest.display(), files = skill.files().len(), "Installed skill");
    Ok(dest)
}

/// Delete the installed skill `{root}/{name}` and return the removed path.
///
/// `name` must be a single path component so the removal cannot leave `root`.
/// Fails with `NotFound` if the directory does not exist.
pub fn remove_skill<F: FileSystem + ?Sized>(
    fs: &F,
    name: &str,
    root: &Path,
) -> Result<PathBuf, SkillError> {
    if !is_plain_entry_name(name) {
        return Err(SkillError::Scope(format!(
            "invalid skill name '{name}': must be a single directory name"
        )));
    }

    let dest = root.join(name);
    if !fs.exists(&dest) {
        return Err(SkillError::not_found(name));
    }

    fs.remove_dir_all(&dest)
        .map_err(|e| SkillError::io(&dest, e))?;
    tracing::info!(skill = %name, path = %dest.display(), "Removed skill");
    Ok(dest)
}

/// True if `rel` only descends (no root, prefix or `..` components).
fn is_contained(rel: &str) -> bool {
    !rel.is_empty()
        && Path::new(rel)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
