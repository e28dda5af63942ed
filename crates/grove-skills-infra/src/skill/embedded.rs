//! Built-in skills compiled into the binary.

use std::collections::BTreeMap;

use grove_skills_core::skill::source::SkillSource;
use grove_skills_types::error::SkillError;
use grove_skills_types::skill::{Skill, SourceKind, SourceLocation, is_plain_entry_name};

/// `(path relative to data/skills, contents)` for every bundled file.
///
/// The first path component is the skill name.
static BUILTIN_FILES: &[(&str, &[u8])] = &[
    (
        "commit-message/SKILL.md",
        include_bytes!("../../data/skills/commit-message/SKILL.md"),
    ),
    (
        "commit-message/references/style.md",
        include_bytes!("../../data/skills/commit-message/references/style.md"),
    ),
    (
        "explain-with-analogy/SKILL.md",
        include_bytes!("../../data/skills/explain-with-analogy/SKILL.md"),
    ),
];

/// Skill source backed by a static file table.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    files: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedSource {
    /// The skills shipped with grove-skills.
    pub fn builtin() -> Self {
        Self::from_table(BUILTIN_FILES)
    }

    pub fn from_table(files: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { files }
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SkillSource for EmbeddedSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Builtin
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::Embedded
    }

    fn list_names(&self) -> Result<Vec<String>, SkillError> {
        let mut names: Vec<String> = self
            .files
            .iter()
            .filter_map(|(path, _)| path.split_once('/').map(|(name, _)| name.to_string()))
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<Skill, SkillError> {
        if !is_plain_entry_name(name) {
            return Err(SkillError::not_found(name));
        }

        let files: BTreeMap<String, Vec<u8>> = self
            .files
            .iter()
            .filter_map(|(path, contents)| {
                let (skill, rel) = path.split_once('/')?;
                (skill == name && !rel.is_empty()).then(|| (rel.to_string(), contents.to_vec()))
            })
            .collect();

        if files.is_empty() {
            return Err(SkillError::not_found(name));
        }
        Ok(Skill::new(name, files))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_skills_core::skill::manifest::validate_skill;

    static TABLE: &[(&str, &[u8])] = &[
        ("beta/SKILL.md", b"beta manifest"),
        ("alpha/SKILL.md", b"alpha manifest"),
        ("alpha/references/notes.md", b"notes"),
        ("stray.md", b"no skill directory"),
    ];

    #[test]
    fn lists_distinct_sorted_names() {
        let source = EmbeddedSource::from_table(TABLE);
        assert_eq!(source.list_names().unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn reads_files_relative_to_skill() {
        let source = EmbeddedSource::from_table(TABLE);
        let skill = source.read("alpha").unwrap();

        let paths: Vec<_> = skill.files().keys().cloned().collect();
        assert_eq!(paths, vec!["SKILL.md", "references/notes.md"]);
        assert_eq!(skill.manifest_bytes(), Some(&b"alpha manifest"[..]));
    }

    #[test]
    fn unknown_skill_is_not_found() {
        let source = EmbeddedSource::from_table(TABLE);
        assert!(matches!(source.read("gamma"), Err(SkillError::NotFound { .. })));
        assert!(matches!(source.read(".."), Err(SkillError::NotFound { .. })));
    }

    #[test]
    fn builtin_kind_and_location() {
        let source = EmbeddedSource::builtin();
        assert_eq!(source.kind(), SourceKind::Builtin);
        assert_eq!(source.location(), SourceLocation::Embedded);
    }

    #[test]
    fn shipped_skills_are_valid() {
        let source = EmbeddedSource::builtin();
        let names = source.list_names().unwrap();
        assert!(names.contains(&"explain-with-analogy".to_string()));

        for name in names {
            let skill = source.read(&name).unwrap();
            let manifest = validate_skill(&skill)
                .unwrap_or_else(|e| panic!("builtin skill '{name}' is invalid: {e}"));
            assert_eq!(manifest.name, name);
        }
    }
}
