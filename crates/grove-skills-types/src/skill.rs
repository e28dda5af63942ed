//! Skill and source domain types.
//!
//! A skill is a directory holding a `SKILL.md` manifest plus any auxiliary
//! files. Sources are the precedence-ranked places skills are read from.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Relative path of the manifest inside every skill directory.
pub const MANIFEST_FILE: &str = "SKILL.md";

/// Maximum length of a skill name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum length of a skill description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1024;

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// An immutable snapshot of every file belonging to one skill.
///
/// Keys are relative paths using `/` as separator, values are raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    name: String,
    files: BTreeMap<String, Vec<u8>>,
}

impl Skill {
    pub fn new(name: impl Into<String>, files: BTreeMap<String, Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }

    /// Directory-derived name of the skill.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.files
    }

    /// Raw bytes of `SKILL.md`, if present.
    pub fn manifest_bytes(&self) -> Option<&[u8]> {
        self.files.get(MANIFEST_FILE).map(Vec::as_slice)
    }
}

/// Structured header of a `SKILL.md` file.
///
/// Both fields default to empty so that missing keys surface as validation
/// violations instead of parse failures. An explicit null (`~`) counts as
/// missing too.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillManifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Kind of a skill source. The declaration order is the precedence order:
/// a later variant overrides an earlier one on name collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Builtin,
    User,
    Ecosystem,
    Project,
}

impl SourceKind {
    /// All kinds in ascending precedence.
    pub const ALL: [SourceKind; 4] = [Self::Builtin, Self::User, Self::Ecosystem, Self::Project];

    /// Fixed precedence rank. Higher wins.
    pub fn rank(self) -> u8 {
        match self {
            Self::Builtin => 0,
            Self::User => 1,
            Self::Ecosystem => 2,
            Self::Project => 3,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::User => write!(f, "user"),
            Self::Ecosystem => write!(f, "ecosystem"),
            Self::Project => write!(f, "project"),
        }
    }
}

/// Where a source keeps its skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum SourceLocation {
    /// Compiled into the binary.
    Embedded,
    /// A directory whose subdirectories are skills.
    Directory(PathBuf),
}

impl SourceLocation {
    /// Human-readable location of skill `name` within this source.
    pub fn describe(&self, name: &str) -> String {
        match self {
            Self::Embedded => "(builtin)".to_string(),
            Self::Directory(root) => root.join(name).display().to_string(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "(builtin)"),
            Self::Directory(root) => write!(f, "{}", root.display()),
        }
    }
}

/// True if `name` is a single, normal path component usable as a directory
/// name under a source or destination root.
pub fn is_plain_entry_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}
