//! Operations that materialize resolved skills on a filesystem.
//!
//! All of these assume a single writer per destination directory. Existence
//! checks and the writes or removals that follow are not locked, so two
//! invocations against the same destination can interleave destructively.

pub mod ecosystem;
pub mod fs;
pub mod installer;
pub mod sync;
