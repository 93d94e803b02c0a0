//! Skills directory discovery

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SkillsError};

/// Default name of the skills directory
pub const DEFAULT_DIR_NAME: &str = "skills";

/// Find the skills directory starting from the current working directory
pub fn find_skills_dir(dir_name: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| SkillsError::io(".", e))?;
    find_skills_dir_from(&cwd, dir_name)
}

/// Find `<ancestor>/<dir_name>` for the nearest ancestor of `start`.
///
/// Candidates are checked in order: `start` itself, its parent, then each
/// further ancestor up to and including the filesystem root.
pub fn find_skills_dir_from(start: &Path, dir_name: &str) -> Result<PathBuf> {
    for ancestor in start.ancestors() {
        let candidate = ancestor.join(dir_name);
        if candidate.is_dir() {
            debug!("Found skills directory at {:?}", candidate);
            return Ok(candidate);
        }
    }

    Err(SkillsError::SkillsDirNotFound {
        dir_name: dir_name.to_string(),
        start: start.to_path_buf(),
    })
}

/// List skill directories under `skills_dir` in sorted order
///
/// Hidden entries (leading `.`) and anything that is not a directory are
/// left out.
pub fn list_skill_dirs(skills_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(skills_dir).map_err(|e| SkillsError::io(skills_dir, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SkillsError::io(skills_dir, e))?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            debug!("Skipping hidden entry {:?}", path);
            continue;
        }
        if !path.is_dir() {
            continue;
        }
        dirs.push(path);
    }

    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_in_start_dir() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("skills")).unwrap();

        let found = find_skills_dir_from(tmp.path(), DEFAULT_DIR_NAME).unwrap();
        assert_eq!(found, tmp.path().join("skills"));
    }

    #[test]
    fn test_finds_in_parent_dir() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("skills")).unwrap();
        let scripts = tmp.path().join("scripts");
        fs::create_dir(&scripts).unwrap();

        let found = find_skills_dir_from(&scripts, DEFAULT_DIR_NAME).unwrap();
        assert_eq!(found, tmp.path().join("skills"));
    }

    #[test]
    fn test_walks_up_several_levels() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("skills")).unwrap();
        let deep = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();

        let found = find_skills_dir_from(&deep, DEFAULT_DIR_NAME).unwrap();
        assert_eq!(found, tmp.path().join("skills"));
    }

    #[test]
    fn test_nearest_wins() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("skills")).unwrap();
        let nested = tmp.path().join("repo");
        fs::create_dir_all(nested.join("skills")).unwrap();

        let found = find_skills_dir_from(&nested, DEFAULT_DIR_NAME).unwrap();
        assert_eq!(found, nested.join("skills"));
    }

    #[test]
    fn test_file_named_skills_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = tmp.path().join("repo");
        fs::create_dir(&repo).unwrap();
        fs::write(repo.join("skills"), "not a directory").unwrap();
        fs::create_dir(tmp.path().join("skills")).unwrap();

        let found = find_skills_dir_from(&repo, DEFAULT_DIR_NAME).unwrap();
        assert_eq!(found, tmp.path().join("skills"));
    }

    #[test]
    fn test_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = find_skills_dir_from(tmp.path(), "no-such-skills-dir-7f3a").unwrap_err();
        assert!(matches!(err, SkillsError::SkillsDirNotFound { .. }));
        assert!(err.to_string().contains("no-such-skills-dir-7f3a"));
    }

    #[test]
    fn test_list_skill_dirs_sorted_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["beta", "Alpha", "gamma", ".hidden"] {
            fs::create_dir(tmp.path().join(name)).unwrap();
        }
        fs::write(tmp.path().join("index.json"), "{}").unwrap();

        let dirs = list_skill_dirs(tmp.path()).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_list_skill_dirs_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let err = list_skill_dirs(&tmp.path().join("absent")).unwrap_err();
        assert!(matches!(err, SkillsError::Io { .. }));
    }
}
