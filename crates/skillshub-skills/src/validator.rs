//! Descriptor validation for a single skill directory
//!
//! Checks run in a fixed order and accumulate. Only a missing, unreadable
//! or unparsable `skill.json` stops the remaining checks, since there is
//! nothing left to inspect.

use chrono::NaiveDate;
use serde_json::Value;
use skillshub_types::{
    Descriptor, DESCRIPTOR_FILE, README_FILE, REQUIRED_FIELDS, VALID_LANGUAGES, VALID_PLATFORMS,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// A single problem found in a skill directory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// `skill.json` is absent
    #[error("Missing {} in {}", DESCRIPTOR_FILE, .dir.display())]
    MissingDescriptor {
        /// Skill directory
        dir: PathBuf,
    },

    /// `README.md` is absent
    #[error("Missing {} in {}", README_FILE, .dir.display())]
    MissingReadme {
        /// Skill directory
        dir: PathBuf,
    },

    /// `skill.json` exists but could not be read
    #[error("Could not read {}: {reason}", .path.display())]
    UnreadableDescriptor {
        /// Descriptor path
        path: PathBuf,
        /// I/O error text
        reason: String,
    },

    /// `skill.json` is not valid JSON
    #[error("Invalid JSON in {}: {reason}", .path.display())]
    InvalidJson {
        /// Descriptor path
        path: PathBuf,
        /// Parser error text
        reason: String,
    },

    /// `skill.json` parsed but is not a JSON object
    #[error("Descriptor {} must be a JSON object", .path.display())]
    NotAnObject {
        /// Descriptor path
        path: PathBuf,
    },

    /// A required field is absent
    #[error("Missing required field '{field}' in {}", .path.display())]
    MissingField {
        /// Field name
        field: &'static str,
        /// Descriptor path
        path: PathBuf,
    },

    /// `name` differs from the directory name
    #[error("Skill name '{name}' doesn't match folder name '{folder}'")]
    NameMismatch {
        /// Value of the `name` field
        name: String,
        /// Directory base name
        folder: String,
    },

    /// `version` is not `MAJOR.MINOR.PATCH`
    #[error("Invalid version format '{version}' - use semantic versioning (e.g., 1.0.0)")]
    InvalidVersion {
        /// Value of the `version` field
        version: String,
    },

    /// `language` is outside the accepted set
    #[error("Invalid language '{language}' - must be one of: {}", VALID_LANGUAGES.join(", "))]
    InvalidLanguage {
        /// Value of the `language` field
        language: String,
    },

    /// A list-valued field is not an array
    #[error("'{field}' must be an array")]
    NotAnArray {
        /// Field name
        field: &'static str,
    },

    /// `tags` is an empty array
    #[error("'tags' array cannot be empty")]
    EmptyTags,

    /// A `tested_on` entry is outside the accepted set
    #[error("Invalid platform '{platform}' - must be one of: {}", VALID_PLATFORMS.join(", "))]
    InvalidPlatform {
        /// Offending entry
        platform: String,
    },

    /// A date field is not `YYYY-MM-DD`
    #[error("Invalid date format for '{field}': {value} - use YYYY-MM-DD")]
    InvalidDate {
        /// Field name
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// `entrypoint` does not resolve to an existing path
    #[error("Entrypoint file '{entrypoint}' not found in {}", .dir.display())]
    EntrypointNotFound {
        /// Value of the `entrypoint` field
        entrypoint: String,
        /// Skill directory
        dir: PathBuf,
    },
}

/// Validate one skill directory, returning every issue found (empty = valid)
pub fn validate_skill(skill_dir: &Path) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let descriptor_path = skill_dir.join(DESCRIPTOR_FILE);

    if !descriptor_path.exists() {
        issues.push(ValidationIssue::MissingDescriptor {
            dir: skill_dir.to_path_buf(),
        });
        return issues;
    }

    if !skill_dir.join(README_FILE).exists() {
        issues.push(ValidationIssue::MissingReadme {
            dir: skill_dir.to_path_buf(),
        });
    }

    let descriptor = match read_descriptor(&descriptor_path) {
        Ok(descriptor) => descriptor,
        Err(issue) => {
            issues.push(issue);
            return issues;
        }
    };

    for field in REQUIRED_FIELDS {
        if !descriptor.contains_key(field) {
            issues.push(ValidationIssue::MissingField {
                field,
                path: descriptor_path.clone(),
            });
        }
    }

    if let Some(name) = descriptor.get("name") {
        let folder = skill_dir_name(skill_dir);
        if name.as_str() != Some(folder.as_str()) {
            issues.push(ValidationIssue::NameMismatch {
                name: render(name),
                folder,
            });
        }
    }

    if let Some(version) = descriptor.get("version") {
        if !version.as_str().is_some_and(is_valid_version) {
            issues.push(ValidationIssue::InvalidVersion {
                version: render(version),
            });
        }
    }

    if let Some(language) = descriptor.get("language") {
        if !in_set(language, &VALID_LANGUAGES) {
            issues.push(ValidationIssue::InvalidLanguage {
                language: render(language),
            });
        }
    }

    match descriptor.get("tags") {
        Some(Value::Array(tags)) if tags.is_empty() => issues.push(ValidationIssue::EmptyTags),
        Some(Value::Array(_)) | None => {}
        Some(_) => issues.push(ValidationIssue::NotAnArray { field: "tags" }),
    }

    // An empty requirements list is fine, unlike tags.
    if let Some(requirements) = descriptor.get("requirements") {
        if !requirements.is_array() {
            issues.push(ValidationIssue::NotAnArray {
                field: "requirements",
            });
        }
    }

    match descriptor.get("tested_on") {
        Some(Value::Array(platforms)) => {
            for platform in platforms {
                if !in_set(platform, &VALID_PLATFORMS) {
                    issues.push(ValidationIssue::InvalidPlatform {
                        platform: render(platform),
                    });
                }
            }
        }
        Some(_) => issues.push(ValidationIssue::NotAnArray { field: "tested_on" }),
        None => {}
    }

    for field in ["created_at", "updated_at"] {
        if let Some(value) = descriptor.get(field) {
            if !value.as_str().is_some_and(is_valid_date) {
                issues.push(ValidationIssue::InvalidDate {
                    field,
                    value: render(value),
                });
            }
        }
    }

    if let Some(entrypoint) = descriptor.get("entrypoint") {
        let exists = entrypoint
            .as_str()
            .is_some_and(|rel| skill_dir.join(rel).exists());
        if !exists {
            issues.push(ValidationIssue::EntrypointNotFound {
                entrypoint: render(entrypoint),
                dir: skill_dir.to_path_buf(),
            });
        }
    }

    debug!("Validated {:?}: {} issue(s)", skill_dir, issues.len());
    issues
}

/// Check a semantic version: exactly three dot-separated runs of digits
pub fn is_valid_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Check a calendar date written exactly as `YYYY-MM-DD`
pub fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    shape_ok && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

fn read_descriptor(path: &Path) -> Result<Descriptor, ValidationIssue> {
    let text = fs::read_to_string(path).map_err(|e| ValidationIssue::UnreadableDescriptor {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ValidationIssue::NotAnObject {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(ValidationIssue::InvalidJson {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Base name of a skill directory, resolving `.` and `..` through the
/// filesystem
pub fn skill_dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            dir.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_default()
}

fn in_set(value: &Value, allowed: &[&str]) -> bool {
    value
        .as_str()
        .is_some_and(|s| allowed.contains(&s.to_lowercase().as_str()))
}

/// Strings render bare, anything else as its JSON text
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        assert!(is_valid_version("1.0.0"));
        assert!(is_valid_version("10.20.300"));
        assert!(is_valid_version("01.0.0"));
        assert!(!is_valid_version("1.0"));
        assert!(!is_valid_version("1.0.a"));
        assert!(!is_valid_version("v1.0.0"));
        assert!(!is_valid_version("1.0.0.0"));
        assert!(!is_valid_version("1..0"));
        assert!(!is_valid_version("-1.0.0"));
        assert!(!is_valid_version(""));
    }

    #[test]
    fn test_date_format() {
        assert!(is_valid_date("2024-01-15"));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("01/15/2024"));
        assert!(!is_valid_date("2024-1-15"));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-01-15T00:00:00"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn test_in_set_is_case_insensitive() {
        assert!(in_set(&Value::from("Python"), &VALID_LANGUAGES));
        assert!(in_set(&Value::from("LINUX"), &VALID_PLATFORMS));
        assert!(!in_set(&Value::from("rust"), &VALID_LANGUAGES));
        assert!(!in_set(&Value::from(3), &VALID_LANGUAGES));
    }

    #[test]
    fn test_skill_dir_name_resolves_relative_markers() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("DocSheriff");
        fs::create_dir_all(skill.join("assets")).unwrap();

        assert_eq!(skill_dir_name(&skill), "DocSheriff");
        assert_eq!(skill_dir_name(&skill.join("assets").join("..")), "DocSheriff");
    }

    #[test]
    fn test_non_object_descriptor_stops_checks() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("Listy");
        fs::create_dir(&skill).unwrap();
        fs::write(skill.join(README_FILE), "# Listy").unwrap();
        fs::write(skill.join(DESCRIPTOR_FILE), "[\"name\", \"version\"]").unwrap();

        assert_eq!(
            validate_skill(&skill),
            vec![ValidationIssue::NotAnObject {
                path: skill.join(DESCRIPTOR_FILE)
            }]
        );
    }

    #[test]
    fn test_unreadable_descriptor_stops_checks() {
        let tmp = tempfile::tempdir().unwrap();
        let skill = tmp.path().join("Locked");
        fs::create_dir(&skill).unwrap();
        fs::write(skill.join(README_FILE), "# Locked").unwrap();
        // A directory in place of the file exists but cannot be read as text
        fs::create_dir(skill.join(DESCRIPTOR_FILE)).unwrap();

        let issues = validate_skill(&skill);
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            ValidationIssue::UnreadableDescriptor { path, .. } if *path == skill.join(DESCRIPTOR_FILE)
        ));
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&Value::from("1.0")), "1.0");
        assert_eq!(render(&Value::from(1)), "1");
        assert_eq!(render(&Value::Null), "null");
    }

    #[test]
    fn test_issue_messages() {
        let issue = ValidationIssue::NameMismatch {
            name: "Bar".into(),
            folder: "Foo".into(),
        };
        assert_eq!(
            issue.to_string(),
            "Skill name 'Bar' doesn't match folder name 'Foo'"
        );

        let issue = ValidationIssue::InvalidLanguage {
            language: "rust".into(),
        };
        assert!(issue.to_string().contains("markdown, python"));
    }
}
