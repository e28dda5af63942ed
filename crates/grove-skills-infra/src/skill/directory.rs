//! On-disk skill source.
//!
//! A source root holds one subdirectory per skill:
//!
//! ```text
//! {root}/{skill-name}/
//!   SKILL.md
//!   references/...
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use grove_skills_core::skill::source::SkillSource;
use grove_skills_types::error::SkillError;
use grove_skills_types::skill::{Skill, SourceKind, SourceLocation, is_plain_entry_name};

/// Skills read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    kind: SourceKind,
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(kind: SourceKind, root: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SkillSource for DirectorySource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::Directory(self.root.clone())
    }

    fn list_names(&self) -> Result<Vec<String>, SkillError> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SkillError::io(&self.root, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SkillError::io(&self.root, e))?;
            // Follows symlinks, so a linked skill directory counts.
            if !entry.path().is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<Skill, SkillError> {
        if !is_plain_entry_name(name) {
            return Err(SkillError::not_found(name));
        }

        let skill_root = self.root.join(name);
        if !skill_root.is_dir() {
            return Err(SkillError::not_found(name));
        }

        let files = read_tree(&skill_root)?;
        if files.is_empty() {
            tracing::debug!(skill = %name, path = %skill_root.display(), "Skill directory holds no files");
            return Err(SkillError::not_found(name));
        }

        Ok(Skill::new(name, files))
    }
}

/// Read every regular file below `root` into relative-path/content pairs.
fn read_tree(root: &Path) -> Result<BTreeMap<String, Vec<u8>>, SkillError> {
    let mut files = BTreeMap::new();

    for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            SkillError::io(path, io::Error::other(e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let contents =
            std::fs::read(entry.path()).map_err(|e| SkillError::io(entry.path(), e))?;
        files.insert(rel, contents);
    }

    Ok(files)
}
