use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by skill resolution, validation and installation.
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("skill '{name}' not found")]
    NotFound { name: String },

    #[error("skill '{name}' validation failed: {}", violations.join("; "))]
    Validation {
        name: String,
        violations: Vec<String>,
    },

    #[error("skill '{name}' is malformed: {reason}")]
    Malformed { name: String, reason: String },

    #[error("skill '{name}' already exists at {} (use --force to overwrite)", path.display())]
    AlreadyExists { name: String, path: PathBuf },

    #[error("{0}")]
    Scope(String),

    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SkillError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_violation() {
        let err = SkillError::Validation {
            name: "demo".to_string(),
            violations: vec![
                "missing required field 'name'".to_string(),
                "missing required field 'description'".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("skill 'demo' validation failed"));
        assert!(msg.contains("'name'"));
        assert!(msg.contains("'description'"));
    }

    #[test]
    fn already_exists_mentions_force() {
        let err = SkillError::AlreadyExists {
            name: "demo".to_string(),
            path: PathBuf::from("/tmp/skills/demo"),
        };
        assert_eq!(
            err.to_string(),
            "skill 'demo' already exists at /tmp/skills/demo (use --force to overwrite)"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        let err = SkillError::io(
            "/nope",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("/nope"));
    }
}
