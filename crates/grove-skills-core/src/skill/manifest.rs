//! SKILL.md manifest parsing and validation.
//!
//! A manifest starts with a `---` delimiter line, carries a flat YAML block of
//! `key: value` pairs, closes with another `---` line and continues with free
//! form instructions for the agent runtime. Only the header is interpreted.

use std::sync::LazyLock;

use regex::Regex;

use grove_skills_types::error::SkillError;
use grove_skills_types::skill::{
    MANIFEST_FILE, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, Skill, SkillManifest,
};

/// Lowercase alphanumeric segments joined by single hyphens.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid name pattern"));

/// Extract YAML frontmatter and markdown body from a SKILL.md file.
///
/// Content must start with `---`, and a closing `\n---` separates the YAML
/// from the body. Returns `(yaml, body)`, or a description of what is missing.
pub fn extract_frontmatter(content: &str) -> Result<(&str, &str), &'static str> {
    let Some(after_open) = content.strip_prefix("---") else {
        return Err("SKILL.md must start with '---' frontmatter delimiter");
    };

    let closing_pos = after_open
        .find("\n---")
        .ok_or("missing closing '---' frontmatter delimiter")?;

    let yaml = after_open[..closing_pos].trim_start_matches(['\r', '\n']);
    let remainder = &after_open[closing_pos + 4..];
    let body = remainder
        .strip_prefix("\r\n")
        .or_else(|| remainder.strip_prefix('\n'))
        .unwrap_or(remainder)
        .trim_start_matches(['\r', '\n']);

    Ok((yaml, body))
}

/// Parse the header of a SKILL.md file.
///
/// `name` is only used to label errors.
pub fn parse_manifest(name: &str, content: &[u8]) -> Result<SkillManifest, SkillError> {
    let malformed = |reason: String| SkillError::Malformed {
        name: name.to_string(),
        reason,
    };

    let text = std::str::from_utf8(content)
        .map_err(|_| malformed(format!("{MANIFEST_FILE} is not valid UTF-8")))?;
    let (yaml, _body) = extract_frontmatter(text).map_err(|e| malformed(e.to_string()))?;

    if yaml.trim().is_empty() {
        return Ok(SkillManifest::default());
    }

    serde_yaml_ng::from_str(yaml).map_err(|e| malformed(format!("invalid YAML in frontmatter: {e}")))
}

/// Check a parsed manifest against the naming and size contract.
///
/// Every violation is collected; an empty vector means the manifest is valid.
/// When `expected_name` is given, the manifest name must equal it.
pub fn manifest_violations(manifest: &SkillManifest, expected_name: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();

    if manifest.name.is_empty() {
        violations.push("missing required field 'name'".to_string());
    } else {
        let len = manifest.name.chars().count();
        if len > MAX_NAME_LEN {
            violations.push(format!(
                "name exceeds {MAX_NAME_LEN} characters (got {len})"
            ));
        }
        if !NAME_PATTERN.is_match(&manifest.name) {
            violations.push(
                "name must be lowercase alphanumeric with single hyphen separators (e.g., 'my-skill-name')"
                    .to_string(),
            );
        }
        if let Some(expected) = expected_name
            && !expected.is_empty()
            && manifest.name != expected
        {
            violations.push(format!(
                "name '{}' does not match directory name '{expected}'",
                manifest.name
            ));
        }
    }

    if manifest.description.is_empty() {
        violations.push("missing required field 'description'".to_string());
    } else {
        let len = manifest.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            violations.push(format!(
                "description exceeds {MAX_DESCRIPTION_LEN} characters (got {len})"
            ));
        }
    }

    violations
}

/// Validate a skill's manifest against its directory-derived name.
///
/// Fails with `Malformed` when `SKILL.md` is absent or unparseable, and with
/// `Validation` carrying every contract violation otherwise.
pub fn validate_skill(skill: &Skill) -> Result<SkillManifest, SkillError> {
    let content = skill.manifest_bytes().ok_or_else(|| SkillError::Malformed {
        name: skill.name().to_string(),
        reason: format!("missing required {MANIFEST_FILE} file"),
    })?;

    let manifest = parse_manifest(skill.name(), content)?;
    let violations = manifest_violations(&manifest, Some(skill.name()));
    if !violations.is_empty() {
        return Err(SkillError::Validation {
            name: skill.name().to_string(),
            violations,
        });
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::skill_with;

    const VALID: &str = r#"---
name: explain-with-analogy
description: Explain a concept using an analogy
license: MIT
---

# Explain With Analogy

Pick an everyday analogy.
"#;

    fn manifest(name: &str, description: &str) -> SkillManifest {
        SkillManifest {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn extract_frontmatter_splits_header_and_body() {
        let (yaml, body) = extract_frontmatter(VALID).unwrap();
        assert!(yaml.starts_with("name: explain-with-analogy"));
        assert!(yaml.contains("license: MIT"));
        assert!(body.starts_with("# Explain With Analogy"));
    }

    #[test]
    fn extract_frontmatter_requires_leading_delimiter() {
        let err = extract_frontmatter("# No Frontmatter\n").unwrap_err();
        assert!(err.contains("must start with '---'"));
    }

    #[test]
    fn extract_frontmatter_requires_closing_delimiter() {
        let err = extract_frontmatter("---\nname: broken\n").unwrap_err();
        assert!(err.contains("missing closing"));
    }

    #[test]
    fn parse_ignores_unknown_keys() {
        let m = parse_manifest("explain-with-analogy", VALID.as_bytes()).unwrap();
        assert_eq!(m.name, "explain-with-analogy");
        assert_eq!(m.description, "Explain a concept using an analogy");
    }

    #[test]
    fn parse_empty_header_yields_empty_manifest() {
        let m = parse_manifest("x", b"---\n---\nbody").unwrap();
        assert_eq!(m, SkillManifest::default());
    }

    #[test]
    fn parse_invalid_yaml_is_malformed() {
        let err = parse_manifest("x", b"---\nname: [unclosed\n---\n").unwrap_err();
        assert!(matches!(err, SkillError::Malformed { .. }));
        assert!(err.to_string().contains("invalid YAML"));
    }

    #[test]
    fn valid_manifest_has_no_violations() {
        let v = manifest_violations(&manifest("my-skill-2", "does things"), Some("my-skill-2"));
        assert!(v.is_empty(), "{v:?}");
    }

    #[test]
    fn missing_name_and_description_reported_together() {
        let v = manifest_violations(&SkillManifest::default(), Some("demo"));
        assert_eq!(
            v,
            vec![
                "missing required field 'name'".to_string(),
                "missing required field 'description'".to_string(),
            ]
        );
    }

    #[test]
    fn null_fields_count_as_missing() {
        let skill = skill_with("demo", &[("SKILL.md", "---\nname: ~\ndescription: ~\n---\n")]);
        let err = validate_skill(&skill).unwrap_err();
        let SkillError::Validation { violations, .. } = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(
            violations,
            vec![
                "missing required field 'name'".to_string(),
                "missing required field 'description'".to_string(),
            ]
        );

        let m = parse_manifest("demo", b"---\nname: null\ndescription: null\n---\n").unwrap();
        assert!(m.name.is_empty());
        assert!(m.description.is_empty());
    }

    #[test]
    fn name_pattern_rejections() {
        for bad in ["-lead", "trail-", "dou--ble", "Upper", "under_score", "sp ace"] {
            let v = manifest_violations(&manifest(bad, "d"), None);
            assert_eq!(v.len(), 1, "expected one violation for {bad}: {v:?}");
            assert!(v[0].contains("lowercase alphanumeric"));
        }
    }

    #[test]
    fn name_length_limit() {
        let at_limit = "a".repeat(MAX_NAME_LEN);
        assert!(manifest_violations(&manifest(&at_limit, "d"), None).is_empty());

        let too_long = "a".repeat(MAX_NAME_LEN + 1);
        let v = manifest_violations(&manifest(&too_long, "d"), None);
        assert_eq!(v, vec!["name exceeds 64 characters (got 65)".to_string()]);
    }

    #[test]
    fn description_length_limit() {
        let too_long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        let v = manifest_violations(&manifest("ok", &too_long), None);
        assert_eq!(
            v,
            vec!["description exceeds 1024 characters (got 1025)".to_string()]
        );
    }

    #[test]
    fn name_must_match_directory() {
        let v = manifest_violations(&manifest("other", "d"), Some("demo"));
        assert_eq!(
            v,
            vec!["name 'other' does not match directory name 'demo'".to_string()]
        );
    }

    #[test]
    fn validate_skill_collects_violations() {
        let skill = skill_with("demo", &[("SKILL.md", "---\nlicense: MIT\n---\nbody")]);
        match validate_skill(&skill).unwrap_err() {
            SkillError::Validation { name, violations } => {
                assert_eq!(name, "demo");
                assert_eq!(violations.len(), 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_skill_without_manifest_is_malformed() {
        let skill = skill_with("demo", &[("README.md", "hi")]);
        let err = validate_skill(&skill).unwrap_err();
        assert!(matches!(err, SkillError::Malformed { .. }));
        assert!(err.to_string().contains("missing required SKILL.md"));
    }
}
