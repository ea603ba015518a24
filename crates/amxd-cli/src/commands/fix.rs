//! Fix command
//!
//! Usage: amxd fix [--catalog <FILE>] [--devices-dir <DIR>] [--json]

use amxd_engine::commands::{fix_devices, FixOutcome, FixSummary, RunContext};
use clap::Args;

use super::{load_catalog, GlobalArgs, RULE};

#[derive(Debug, Args)]
pub struct FixArgs {}

/// Execute fix command; `Ok(false)` when any device failed to process
pub fn execute(global: &GlobalArgs, _args: FixArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let catalog = load_catalog(global)?;
    let ctx = RunContext::new(&catalog, global.devices_dir.as_deref());
    let summary = fix_devices(&catalog, &ctx);

    if global.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(summary.success)
}

fn print_summary(summary: &FixSummary) {
    for report in &summary.devices {
        println!("\n{}", RULE);
        println!("Fixing: {}", report.label);
        println!("{}", RULE);

        match &report.outcome {
            FixOutcome::Repaired { nodes, backup, .. } => {
                if let Some(backup) = backup {
                    println!("   backup created: {}", backup.display());
                }
                for node in nodes {
                    println!(
                        "   {}: {} -> {}",
                        node.node_id.as_deref().unwrap_or("(no id)"),
                        node.previous.as_deref().unwrap_or("(none)"),
                        node.current
                    );
                }
                println!("   ✓ Device updated");
            }
            FixOutcome::Unchanged { .. } => println!("   No changes needed"),
            FixOutcome::NotFound => println!("   ✗ {} not found", report.path.display()),
            FixOutcome::Failed(failure) => {
                println!("   ✗ could not fix device: {}", failure.message)
            }
        }
    }

    println!("\n{}", RULE);
    println!("Summary");
    println!("{}", RULE);
    println!("Fixed {} device(s)", summary.repaired_count);
    if summary.repaired_count > 0 {
        println!("If issues occur, restore from the .backup files");
    }
}
