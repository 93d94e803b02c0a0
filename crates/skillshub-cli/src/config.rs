use serde::Deserialize;
use skillshub_skills::{find_skills_dir, SkillsError, DEFAULT_DIR_NAME};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional workspace config file, looked up as `./skillshub.toml`
const CONFIG_FILE: &str = "skillshub";

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SkillsConfig {
    /// Explicit skills directory; skips the upward search when set
    pub dir: Option<PathBuf>,
    /// Directory name the upward search looks for
    pub dir_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub skills: SkillsConfig,
}

/// Values given on the command line, applied over every other layer
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub skills_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Local file: ./skillshub.toml (optional)
    /// 3. Environment variables with SKILLSHUB__ prefix
    /// 4. Command-line flags (highest priority)
    pub fn load(overrides: &Overrides) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        Self::load_from(Path::new(CONFIG_FILE), overrides)
    }

    fn load_from(file: &Path, overrides: &Overrides) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("skills.dir_name", DEFAULT_DIR_NAME)?
            .add_source(config::File::from(file).required(false))
            .add_source(config::Environment::with_prefix("SKILLSHUB").separator("__"))
            .set_override_option("logging.level", overrides.log_level.clone())?
            .set_override_option(
                "skills.dir",
                overrides
                    .skills_dir
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            )?
            .build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Resolve the skills directory: the configured one, else the nearest
    /// `<dir_name>` found walking up from the working directory.
    pub fn locate_skills_dir(&self) -> Result<PathBuf, SkillsError> {
        match &self.skills.dir {
            Some(dir) if dir.is_dir() => {
                debug!("Using configured skills directory {:?}", dir);
                Ok(dir.clone())
            }
            Some(dir) => Err(SkillsError::ConfiguredDirMissing { path: dir.clone() }),
            None => find_skills_dir(&self.skills.dir_name),
        }
    }
}
