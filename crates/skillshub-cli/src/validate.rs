use anyhow::{bail, Result};
use skillshub_skills::{list_skill_dirs, skill_dir_name, validate_skill, ValidationIssue};
use skillshub_types::INDEX_FILE;
use std::path::Path;
use tracing::debug;

use crate::config::Config;

/// Validate one skill directory, or every skill when `path` is `None`.
///
/// Returns `Ok(false)` when validation found problems.
pub fn run(config: &Config, path: Option<&Path>) -> Result<bool> {
    let mut all_issues = Vec::new();

    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Path '{}' does not exist", path.display());
            }
            if !path.is_dir() {
                bail!("Path '{}' is not a directory", path.display());
            }

            println!("Validating skill: {}", skill_dir_name(path));
            all_issues.extend(validate_skill(path));
        }
        None => {
            let skills_dir = config.locate_skills_dir()?;
            println!("Validating all skills in {}", skills_dir.display());

            let mut skill_count = 0;
            for dir in list_skill_dirs(&skills_dir)? {
                let name = skill_dir_name(&dir);
                if name == INDEX_FILE {
                    continue;
                }

                skill_count += 1;
                println!("  Validating: {}", name);
                all_issues.extend(validate_skill(&dir));
            }

            println!("\nValidated {} skill(s)", skill_count);
        }
    }

    Ok(report(&all_issues))
}

fn report(issues: &[ValidationIssue]) -> bool {
    if issues.is_empty() {
        println!("\nValidation passed!");
        return true;
    }

    debug!("{} validation issue(s)", issues.len());
    println!("\nValidation failed with {} error(s):\n", issues.len());
    for issue in issues {
        println!("  - {}", issue);
    }
    false
}
