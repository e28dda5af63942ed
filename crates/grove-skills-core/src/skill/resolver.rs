//! Precedence resolution across skill sources.
//!
//! Every caller (list, install, sync, ecosystem sync) goes through `resolve`
//! so that what `list` shows is exactly what the other commands act on.

use std::collections::BTreeMap;
use std::fmt;

use grove_skills_types::error::SkillError;
use grove_skills_types::skill::{Skill, SourceKind, SourceLocation, is_plain_entry_name};

use super::source::{SkillSource, SourceSet};

/// The winning source for one skill name.
#[derive(Clone, Copy)]
pub struct ResolvedSkill<'a> {
    source: &'a dyn SkillSource,
}

impl<'a> ResolvedSkill<'a> {
    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub fn rank(&self) -> u8 {
        self.source.kind().rank()
    }

    pub fn location(&self) -> SourceLocation {
        self.source.location()
    }

    pub fn source(&self) -> &'a dyn SkillSource {
        self.source
    }
}

impl fmt::Debug for ResolvedSkill<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSkill")
            .field("kind", &self.kind())
            .field("rank", &self.rank())
            .finish()
    }
}

/// Skill name to winning source, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct ResolvedView<'a> {
    entries: BTreeMap<String, ResolvedSkill<'a>>,
}

impl<'a> ResolvedView<'a> {
    pub fn get(&self, name: &str) -> Option<ResolvedSkill<'a>> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Skill names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ResolvedSkill<'a>)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), *entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read skill `name` from its winning source.
    pub fn read(&self, name: &str) -> Result<Skill, SkillError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| SkillError::not_found(name))?;
        entry.source.read(name)
    }

    /// Winning kind per name, for comparisons and display.
    pub fn kinds(&self) -> BTreeMap<String, SourceKind> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.kind()))
            .collect()
    }
}

/// Merge the skill names of every source into one view.
///
/// Sources are scanned in ascending rank and each hit overwrites any earlier
/// entry, so every name ends up mapped to the highest-ranked source offering
/// it. A source that cannot be listed is skipped with a warning.
pub fn resolve(sources: &SourceSet) -> ResolvedView<'_> {
    let mut entries = BTreeMap::new();

    for source in sources.iter() {
        let names = match source.list_names() {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(
                    source = %source.kind(),
                    location = %source.location(),
                    error = %e,
                    "Skipping unreadable skill source"
                );
                continue;
            }
        };

        tracing::debug!(source = %source.kind(), count = names.len(), "Scanned skill source");

        for name in names {
            if !is_plain_entry_name(&name) {
                continue;
            }
            entries.insert(name, ResolvedSkill { source });
        }
    }

    ResolvedView { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemorySource;

    fn set(sources: Vec<MemorySource>) -> SourceSet {
        sources
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn SkillSource>)
            .collect()
    }

    #[test]
    fn higher_rank_wins_collisions() {
        let sources = set(vec![
            MemorySource::new(SourceKind::Builtin)
                .with_skill("foo", &[])
                .with_skill("only-builtin", &[]),
            MemorySource::new(SourceKind::User).with_skill("foo", &[]),
            MemorySource::new(SourceKind::Project).with_skill("foo", &[]),
            MemorySource::new(SourceKind::Ecosystem)
                .with_skill("foo", &[])
                .with_skill("eco", &[]),
        ]);

        let view = resolve(&sources);
        assert_eq!(view.get("foo").unwrap().kind(), SourceKind::Project);
        assert_eq!(view.get("foo").unwrap().rank(), 3);
        assert_eq!(view.get("eco").unwrap().kind(), SourceKind::Ecosystem);
        assert_eq!(view.get("only-builtin").unwrap().kind(), SourceKind::Builtin);
        assert_eq!(
            view.names().collect::<Vec<_>>(),
            vec!["eco", "foo", "only-builtin"]
        );
    }

    #[test]
    fn resolution_is_independent_of_insertion_order() {
        let build = |order: &[SourceKind]| {
            let sources: SourceSet = order
                .iter()
                .map(|kind| {
                    Box::new(
                        MemorySource::new(*kind)
                            .with_skill("shared", &[])
                            .with_skill(&format!("own-{kind}"), &[]),
                    ) as Box<dyn SkillSource>
                })
                .collect();
            resolve(&sources).kinds()
        };

        let forward = build(&SourceKind::ALL);
        let mut reversed_order = SourceKind::ALL;
        reversed_order.reverse();
        let reversed = build(&reversed_order);

        assert_eq!(forward, reversed);
        assert_eq!(forward["shared"], SourceKind::Project);
    }

    #[test]
    fn removing_override_falls_back_to_lower_rank() {
        let with_both = set(vec![
            MemorySource::new(SourceKind::User).with_skill("foo", &[]),
            MemorySource::new(SourceKind::Project).with_skill("foo", &[]),
        ]);
        assert_eq!(resolve(&with_both).get("foo").unwrap().kind(), SourceKind::Project);

        let without_project = set(vec![
            MemorySource::new(SourceKind::User).with_skill("foo", &[]),
            MemorySource::new(SourceKind::Project),
        ]);
        assert_eq!(
            resolve(&without_project).get("foo").unwrap().kind(),
            SourceKind::User
        );
    }

    #[test]
    fn read_uses_winning_source() {
        let sources = set(vec![
            MemorySource::new(SourceKind::Builtin).with_skill("foo", &[("notes.md", "builtin")]),
            MemorySource::new(SourceKind::User).with_skill("foo", &[("notes.md", "user")]),
        ]);
        let view = resolve(&sources);
        let skill = view.read("foo").unwrap();
        assert_eq!(skill.files()["notes.md"], b"user".to_vec());
    }

    #[test]
    fn read_unknown_is_not_found() {
        let sources = set(vec![MemorySource::new(SourceKind::Builtin)]);
        let view = resolve(&sources);
        assert!(matches!(view.read("nope"), Err(SkillError::NotFound { .. })));
    }
}
