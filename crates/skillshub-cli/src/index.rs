use anyhow::{Context, Result};
use skillshub_skills::{build_index, write_index};

use crate::config::Config;

/// Regenerate `index.json` in the located skills directory
pub fn run(config: &Config) -> Result<()> {
    println!("Building skills index...");
    let skills_dir = config.locate_skills_dir()?;

    let index = build_index(&skills_dir)?;
    for entry in &index.skills {
        println!("  Added: {}", entry.path);
    }

    let index_path = write_index(&skills_dir, &index)
        .with_context(|| format!("Failed to write index into {}", skills_dir.display()))?;

    println!(
        "\nGenerated {} with {} skill(s)",
        index_path.display(),
        index.total_count
    );
    Ok(())
}
