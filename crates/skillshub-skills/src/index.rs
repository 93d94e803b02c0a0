//! Index generation
//!
//! Rebuilds `index.json` from scratch on every run. Problems with a single
//! skill are logged and that skill is left out; they never fail the build.

use serde_json::Value;
use skillshub_types::{IndexEntry, SkillIndex, DESCRIPTOR_FILE, INDEX_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::error::{Result, SkillsError};
use crate::locator::list_skill_dirs;

/// Scan `skills_dir` and assemble a fresh index
pub fn build_index(skills_dir: &Path) -> Result<SkillIndex> {
    let mut entries = Vec::new();

    for dir in list_skill_dirs(skills_dir)? {
        if let Some(entry) = index_entry(&dir) {
            debug!("Indexed {}", entry.path);
            entries.push(entry);
        }
    }

    info!("Indexed {} skill(s) from {:?}", entries.len(), skills_dir);
    Ok(SkillIndex::new(entries))
}

/// Write `index` to `<skills_dir>/index.json`, replacing any previous file
pub fn write_index(skills_dir: &Path, index: &SkillIndex) -> Result<PathBuf> {
    let path = skills_dir.join(INDEX_FILE);
    let json = index.to_json_pretty()?;

    fs::write(&path, json).map_err(|e| SkillsError::io(&path, e))?;

    info!("Wrote {:?}", path);
    Ok(path)
}

/// Read a previously generated `<skills_dir>/index.json`
pub fn read_index(skills_dir: &Path) -> Result<SkillIndex> {
    let path = skills_dir.join(INDEX_FILE);
    let text = fs::read_to_string(&path).map_err(|e| SkillsError::io(&path, e))?;
    Ok(SkillIndex::from_json(&text)?)
}

fn index_entry(dir: &Path) -> Option<IndexEntry> {
    let dir_name = dir.file_name()?.to_string_lossy().into_owned();
    let descriptor_path = dir.join(DESCRIPTOR_FILE);

    if !descriptor_path.exists() {
        warn!("No {} in {}, skipping", DESCRIPTOR_FILE, dir_name);
        return None;
    }

    let text = match fs::read_to_string(&descriptor_path) {
        Ok(text) => text,
        Err(e) => {
            error!("Could not read {:?}: {}", descriptor_path, e);
            return None;
        }
    };

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(descriptor)) => Some(IndexEntry::from_descriptor(&dir_name, &descriptor)),
        Ok(_) => {
            error!("{:?} is not a JSON object, skipping", descriptor_path);
            None
        }
        Err(e) => {
            error!("Invalid JSON in {:?}: {}", descriptor_path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_skips_missing_descriptor() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Empty");
        fs::create_dir(&dir).unwrap();
        assert!(index_entry(&dir).is_none());
    }

    #[test]
    fn test_entry_skips_non_object_descriptor() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("List");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(DESCRIPTOR_FILE), "[1, 2, 3]").unwrap();
        assert!(index_entry(&dir).is_none());
    }

    #[test]
    fn test_write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let index = SkillIndex::new(Vec::new());

        let path = write_index(tmp.path(), &index).unwrap();
        assert_eq!(path, tmp.path().join(INDEX_FILE));
        assert_eq!(read_index(tmp.path()).unwrap(), index);
    }

    #[test]
    fn test_read_missing_index() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_index(tmp.path()),
            Err(SkillsError::Io { .. })
        ));
    }
}
