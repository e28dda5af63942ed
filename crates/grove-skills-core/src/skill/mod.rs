//! Skill manifests, sources and precedence resolution.

pub mod manifest;
pub mod resolver;
pub mod source;
