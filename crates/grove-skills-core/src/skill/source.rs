//! The `SkillSource` capability and the rank-ordered `SourceSet`.
//!
//! Embedded and on-disk sources implement the same trait so that the resolver
//! and readers never branch on where a skill lives. Concrete sources live in
//! `grove-skills-infra`.

use std::collections::BTreeMap;

use grove_skills_types::error::SkillError;
use grove_skills_types::skill::{Skill, SourceKind, SourceLocation};

/// A precedence-ranked origin of skills.
pub trait SkillSource {
    /// Kind of this source; its rank decides precedence.
    fn kind(&self) -> SourceKind;

    /// Where this source keeps its skills.
    fn location(&self) -> SourceLocation;

    /// Names of the top-level skill directories this source offers.
    ///
    /// A source whose root does not exist offers nothing.
    fn list_names(&self) -> Result<Vec<String>, SkillError>;

    /// Load every file of skill `name`.
    ///
    /// Fails with `NotFound` if the skill directory is absent or holds no
    /// regular files. Does not look at the manifest.
    fn read(&self, name: &str) -> Result<Skill, SkillError>;
}

/// At most one source per kind, iterated in ascending rank.
///
/// Keying by kind makes duplicate ranks impossible and keeps iteration order
/// independent of insertion order.
#[derive(Default)]
pub struct SourceSet {
    sources: BTreeMap<SourceKind, Box<dyn SkillSource>>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source, replacing any existing source of the same kind.
    pub fn insert(&mut self, source: Box<dyn SkillSource>) -> Option<Box<dyn SkillSource>> {
        self.sources.insert(source.kind(), source)
    }

    pub fn get(&self, kind: SourceKind) -> Option<&dyn SkillSource> {
        self.sources.get(&kind).map(Box::as_ref)
    }

    /// Sources in ascending rank.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SkillSource> {
        self.sources.values().map(Box::as_ref)
    }

    pub fn kinds(&self) -> Vec<SourceKind> {
        self.sources.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl FromIterator<Box<dyn SkillSource>> for SourceSet {
    fn from_iter<I: IntoIterator<Item = Box<dyn SkillSource>>>(iter: I) -> Self {
        let mut set = Self::new();
        for source in iter {
            set.insert(source);
        }
        set
    }
}

impl std::fmt::Debug for SourceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sources.values().map(|s| (s.kind(), s.location())))
            .finish()
    }
}
