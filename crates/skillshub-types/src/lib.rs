//! SkillsHub Types - Shared schema types for the skills registry
//!
//! Defines the descriptor schema constants and the generated index document.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor file name inside each skill directory
pub const DESCRIPTOR_FILE: &str = "skill.json";

/// Readme file name inside each skill directory
pub const README_FILE: &str = "README.md";

/// Index file name inside the skills directory
pub const INDEX_FILE: &str = "index.json";

/// Format version written into every index document
pub const INDEX_FORMAT_VERSION: &str = "1.0.0";

/// Fields every descriptor must carry
pub const REQUIRED_FIELDS: [&str; 13] = [
    "name",
    "version",
    "author",
    "license",
    "description",
    "tags",
    "entrypoint",
    "language",
    "requirements",
    "usage",
    "tested_on",
    "created_at",
    "updated_at",
];

/// Accepted values for `language` (compared lowercase)
pub const VALID_LANGUAGES: [&str; 5] = ["markdown", "python", "javascript", "typescript", "other"];

/// Accepted values for `tested_on` entries (compared lowercase)
pub const VALID_PLATFORMS: [&str; 3] = ["mac", "windows", "linux"];

/// A raw descriptor as read from `skill.json`
///
/// Kept untyped so that validation can report on wrong-typed fields
/// instead of failing deserialization outright.
pub type Descriptor = Map<String, Value>;

/// One skill's entry in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub version: String,
    pub author: String,
    pub license: String,
    pub description: String,
    pub tags: Vec<String>,
    pub entrypoint: String,
    pub language: String,
    /// Directory name relative to the skills directory
    pub path: String,
}

impl IndexEntry {
    /// Project a descriptor into an index entry, falling back to defaults
    /// for absent or wrong-typed fields.
    pub fn from_descriptor(dir_name: &str, descriptor: &Descriptor) -> Self {
        let text = |key: &str, default: &str| {
            descriptor
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(default)
                .to_string()
        };

        let tags = descriptor
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: text("name", dir_name),
            version: text("version", "0.0.0"),
            author: text("author", "Unknown"),
            license: text("license", "Unknown"),
            description: text("description", ""),
            tags,
            entrypoint: text("entrypoint", ""),
            language: text("language", ""),
            path: dir_name.to_string(),
        }
    }
}

/// The aggregated `index.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillIndex {
    pub version: String,
    /// ISO-8601 UTC timestamp ending in `Z`
    pub generated_at: String,
    pub skills: Vec<IndexEntry>,
    pub total_count: usize,
}

impl SkillIndex {
    /// Assemble an index stamped with the current time
    pub fn new(skills: Vec<IndexEntry>) -> Self {
        Self {
            version: INDEX_FORMAT_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            total_count: skills.len(),
            skills,
        }
    }

    /// Parse an index document from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize as pretty-printed JSON with two-space indent
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
