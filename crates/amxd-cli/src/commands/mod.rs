pub mod check;
pub mod fix;

use amxd_core::logging_facility::{init, Profile};
use amxd_store::catalog::{default_catalog, parse_catalog_file, CatalogV0};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Flags shared by every subcommand
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Device catalog (YAML); defaults to the built-in Power Trio set
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory holding the device files (overrides the catalog's)
    #[arg(long, global = true)]
    pub devices_dir: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs to stderr with the given profile
    #[arg(long, global = true, value_enum)]
    pub log_profile: Option<LogProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Dev,
    Prod,
}

pub fn init_logging(args: &GlobalArgs) {
    match args.log_profile {
        Some(LogProfile::Dev) => init(Profile::Development),
        Some(LogProfile::Prod) => init(Profile::Production),
        None => {}
    }
}

pub fn load_catalog(args: &GlobalArgs) -> Result<CatalogV0, Box<dyn std::error::Error>> {
    match &args.catalog {
        Some(path) => Ok(parse_catalog_file(path)?),
        None => Ok(default_catalog()),
    }
}

pub const RULE: &str = "============================================================";
