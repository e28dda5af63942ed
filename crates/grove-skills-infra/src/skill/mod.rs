//! Skill sources and source discovery.

pub mod directory;
pub mod embedded;
pub mod registry;
