//! Infrastructure layer for grove-skills.
//!
//! Contains implementations of the ports defined in `grove-skills-core`: the
//! local filesystem, on-disk and embedded skill sources, the source registry,
//! `skills.toml` loading, and the workspace, notebook and git lookups.

pub mod config;
pub mod filesystem;
pub mod skill;
pub mod workspace;
