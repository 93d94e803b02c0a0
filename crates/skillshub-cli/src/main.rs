mod config;
mod index;
mod validate;

use clap::{Parser, Subcommand};
use config::{Config, Overrides};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "skillshub")]
#[command(about = "Validate skill descriptors and build the skills index", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins if set
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Use this skills directory instead of searching upward for one
    #[arg(long, global = true)]
    skills_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one skill directory, or every skill when no path is given
    Validate { path: Option<PathBuf> },
    /// Regenerate index.json from every skill.json
    BuildIndex,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = Overrides {
        log_level: cli.log_level,
        skills_dir: cli.skills_dir,
    };

    let config = match Config::load(&overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = skillshub_logging::init_logging(&config.logging.level) {
        eprintln!("Error: failed to initialize logging: {:#}", e);
        return ExitCode::FAILURE;
    }
    debug!("Loaded config: {:?}", config);

    let outcome = match cli.command {
        Commands::Validate { path } => validate::run(&config, path.as_deref()),
        Commands::BuildIndex => index::run(&config).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
