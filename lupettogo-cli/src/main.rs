//! LupettoGo CLI tool

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{DoctorCommand, GenerateCommand, InitCommand};

#[derive(Parser)]
#[command(name = "lupettogo")]
#[command(version)]
#[command(about = "Scaffold Go API projects built on gin and gorm", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Go project
    Init(InitCommand),
    /// Generate code inside an existing project
    Generate {
        #[command(subcommand)]
        command: GenerateCommand,
    },
    /// Check the development environment
    Doctor,
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    lupettogo::observability::init(cli.verbose)?;

    match cli.command {
        Commands::Init(cmd) => cmd.execute()?,
        Commands::Generate { command } => command.execute()?,
        Commands::Doctor => DoctorCommand::execute()?,
        Commands::Version => commands::version::execute(),
    }

    Ok(())
}
