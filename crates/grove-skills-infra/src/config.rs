//! Configuration loader for grove-skills.
//!
//! Reads `skills.toml` from the grove config directory and deserializes it
//! into [`SkillsConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use grove_skills_types::config::SkillsConfig;
use grove_skills_types::scope::{Provider, Scope};

/// File name of the config inside the grove config directory.
pub const CONFIG_FILE: &str = "skills.toml";

/// Load configuration from `{config_dir}/skills.toml`.
///
/// - If the file does not exist, returns [`SkillsConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub fn load_config(config_dir: &Path) -> SkillsConfig {
    let config_path = config_dir.join(CONFIG_FILE);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {CONFIG_FILE} found at {}, using defaults", config_path.display());
            return SkillsConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return SkillsConfig::default();
        }
    };

    match toml::from_str::<SkillsConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            SkillsConfig::default()
        }
    }
}

/// The configured default provider, or Claude if the value is unknown.
pub fn configured_provider(config: &SkillsConfig) -> Provider {
    config.default_provider.parse().unwrap_or_else(|err| {
        tracing::warn!("Ignoring default_provider in {CONFIG_FILE}: {err}");
        Provider::Claude
    })
}

/// The configured default scope, or user scope if the value is unknown.
pub fn configured_scope(config: &SkillsConfig) -> Scope {
    config.default_scope.parse().unwrap_or_else(|err| {
        tracing::warn!("Ignoring default_scope in {CONFIG_FILE}: {err}");
        Scope::User
    })
}
