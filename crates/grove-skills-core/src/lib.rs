//! Skill resolution and distribution engine for grove-skills.
//!
//! This crate defines the "ports" (`SkillSource`, `FileSystem`, workspace
//! lookups) that the infrastructure layer implements, and the engine that runs
//! on top of them: manifest validation, precedence resolution, installation,
//! sync with pruning, and ecosystem fan-out. It depends only on
//! `grove-skills-types` -- never on `grove-skills-infra`.

pub mod scope;
pub mod service;
pub mod skill;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;
