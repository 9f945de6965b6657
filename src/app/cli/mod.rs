//! CLI Adapter.

mod usage;

use std::error::Error as _;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::error::ErrorKind;

use crate::app::{api, logging};
use crate::domain::{AppError, Settings};

pub use usage::usage_text;

/// Exit status when the command line does not name exactly one config file.
pub const USAGE_EXIT_CODE: i32 = 22;

#[derive(Parser)]
#[command(name = "run-ecs")]
#[command(version)]
#[command(
    about = "Launch a containerized batch job on ECS from a JSON configuration file",
    long_about = None
)]
struct Cli {
    /// JSON configuration file, relative to the current directory
    config: PathBuf,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            match usage_text() {
                Ok(text) => println!("{}", text),
                Err(e) => eprintln!("Error: {}", e),
            }
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    if let Err(e) = run_launch(&cli.config) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  Caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run_launch(config_path: &Path) -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    logging::init_logger(&settings.log)?;

    let report = api::launch(config_path, &settings)?;

    if report.registered_definition {
        println!("✅ Registered task definition {}", report.task_definition);
    } else {
        println!("✅ Reused task definition {}", report.task_definition);
    }
    println!("✅ Started task {}", report.task.arn);
    println!(
        "\nFind results in {}\n\nThis link expires at {}",
        report.output.url,
        report.output.expires_at.to_rfc3339()
    );
    Ok(())
}
