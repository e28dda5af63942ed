//! In-memory sources and filesystem for engine tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use grove_skills_types::error::SkillError;
use grove_skills_types::skill::{Skill, SourceKind, SourceLocation};
use grove_skills_types::workspace::WorkspaceNode;

use crate::service::fs::FileSystem;
use crate::skill::source::SkillSource;
use crate::workspace::WorkspaceProvider;

pub fn manifest_for(name: &str) -> String {
    format!("---\nname: {name}\ndescription: The {name} skill\n---\n\n# {name}\n")
}

pub fn skill_with(name: &str, files: &[(&str, &str)]) -> Skill {
    let files = files
        .iter()
        .map(|(path, content)| (path.to_string(), content.as_bytes().to_vec()))
        .collect();
    Skill::new(name, files)
}

/// A source backed by a map of skill name to files.
pub struct MemorySource {
    kind: SourceKind,
    skills: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
}

impl MemorySource {
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            skills: BTreeMap::new(),
        }
    }

    /// Add a skill with a valid manifest plus the given extra files.
    pub fn with_skill(mut self, name: &str, extra: &[(&str, &str)]) -> Self {
        let mut files = BTreeMap::new();
        files.insert("SKILL.md".to_string(), manifest_for(name).into_bytes());
        for (path, content) in extra {
            files.insert(path.to_string(), content.as_bytes().to_vec());
        }
        self.skills.insert(name.to_string(), files);
        self
    }

    /// Add a skill with exactly the given files.
    pub fn with_raw_skill(mut self, name: &str, files: &[(&str, &str)]) -> Self {
        self.skills
            .insert(name.to_string(), skill_with(name, files).files().clone());
        self
    }
}

impl SkillSource for MemorySource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::Directory(PathBuf::from(format!("/mem/{}", self.kind)))
    }

    fn list_names(&self) -> Result<Vec<String>, SkillError> {
        Ok(self.skills.keys().cloned().collect())
    }

    fn read(&self, name: &str) -> Result<Skill, SkillError> {
        match self.skills.get(name) {
            Some(files) if !files.is_empty() => Ok(Skill::new(name, files.clone())),
            _ => Err(SkillError::not_found(name)),
        }
    }
}

/// Filesystem held entirely in memory, with optional write failure injection.
#[derive(Default)]
pub struct MemoryFileSystem {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    fail_writes_under: RefCell<Option<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `write_file` below `prefix` fail.
    pub fn fail_writes_under(&self, prefix: impl Into<PathBuf>) {
        *self.fail_writes_under.borrow_mut() = Some(prefix.into());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Relative paths of every file below `root`.
    pub fn files_under(&self, root: impl AsRef<Path>) -> Vec<String> {
        let root = root.as_ref();
        self.files
            .borrow()
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path) || self.files.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(prefix) = self.fail_writes_under.borrow().as_ref()
            && path.starts_with(prefix)
        {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"));
        }
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        if !self.dirs.borrow().contains(path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        self.dirs.borrow_mut().retain(|d| !d.starts_with(path));
        self.files.borrow_mut().retain(|f, _| !f.starts_with(path));
        Ok(())
    }

    fn list_dirs(&self, path: &Path) -> io::Result<Vec<String>> {
        let dirs = self.dirs.borrow();
        if !dirs.contains(path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        Ok(dirs
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| d.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect())
    }
}

/// Workspace provider over a fixed list of nodes.
pub struct StaticWorkspaces(pub Vec<WorkspaceNode>);

impl WorkspaceProvider for StaticWorkspaces {
    fn find_by_path(&self, path: &Path) -> Option<WorkspaceNode> {
        self.0.iter().find(|n| n.path == path).cloned()
    }

    fn all(&self) -> Vec<WorkspaceNode> {
        self.0.clone()
    }
}
