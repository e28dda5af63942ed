//! Shared domain types for grove-skills.
//!
//! Skills, sources, scope targets, workspace nodes, configuration and the
//! error taxonomy used across the engine.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod scope;
pub mod skill;
pub mod workspace;
