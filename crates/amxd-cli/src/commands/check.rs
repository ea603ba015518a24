//! Check command
//!
//! Usage: amxd check [--catalog <FILE>] [--devices-dir <DIR>] [--json]

use amxd_core::model::Severity;
use amxd_engine::commands::{check_devices, CheckOutcome, CheckSummary, RunContext};
use clap::Args;

use super::{load_catalog, GlobalArgs, RULE};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Only check the device with this file name
    #[arg(long)]
    pub only: Option<String>,
}

/// Execute check command; `Ok(false)` when any device did not pass
pub fn execute(global: &GlobalArgs, args: CheckArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let mut catalog = load_catalog(global)?;
    if let Some(only) = &args.only {
        catalog.devices.retain(|d| &d.file == only);
        if catalog.devices.is_empty() {
            return Err(format!("no device '{}' in catalog", only).into());
        }
    }

    let ctx = RunContext::new(&catalog, global.devices_dir.as_deref());
    let summary = check_devices(&catalog, &ctx);

    if global.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(summary.all_passed)
}

fn print_summary(summary: &CheckSummary) {
    for report in &summary.devices {
        println!("\n{}", RULE);
        println!("Analyzing: {}", report.label);
        println!("{}", RULE);

        match &report.outcome {
            CheckOutcome::NotFound => {
                println!("   ✗ {} not found", report.path.display());
            }
            CheckOutcome::Failed(failure) => {
                println!("   ✗ could not read device: {}", failure.message);
            }
            CheckOutcome::Checked {
                passed,
                findings,
                script_runner,
            } => {
                if let Some(script) = script_runner {
                    println!("   node.script: {}", script.content);
                    println!(
                        "   script file: {}",
                        script.file_reference.as_deref().unwrap_or("(none)")
                    );
                    println!(
                        "   autostart:   {}",
                        script
                            .autostart
                            .as_ref()
                            .map_or_else(|| "(absent)".to_string(), |v| v.to_string())
                    );
                }

                let (blocking, info): (Vec<_>, Vec<_>) = findings
                    .iter()
                    .partition(|f| f.severity == Severity::Blocking);
                if *passed {
                    println!("   ✓ All checks passed");
                } else {
                    println!("   ✗ Issues found:");
                    for finding in blocking {
                        println!("      - {}", finding);
                    }
                }
                for finding in info {
                    println!("   note: {}", finding);
                }
            }
        }
    }

    let failing = summary
        .devices
        .iter()
        .filter(|d| !d.outcome.passed())
        .count();
    println!("\n{}", RULE);
    println!("Summary");
    println!("{}", RULE);
    if summary.all_passed {
        println!("✓ All {} device(s) passed", summary.devices.len());
    } else {
        println!("✗ {} of {} device(s) need attention", failing, summary.devices.len());
    }
}
