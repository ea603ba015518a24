//! amxd CLI
//!
//! Command-line interface for inspecting and repairing Power Trio devices

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "amxd")]
#[command(about = "amxd - Power Trio device inspector and repairer", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check every device against its expected configuration
    Check(commands::check::CheckArgs),
    /// Repair script paths (other findings are report-only)
    Fix(commands::fix::FixArgs),
}

fn main() {
    let cli = Cli::parse();
    commands::init_logging(&cli.global);

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(&cli.global, args),
        Commands::Fix(args) => commands::fix::execute(&cli.global, args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
