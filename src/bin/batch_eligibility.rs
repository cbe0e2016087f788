//! Run eligibility for a whole member list
//!
//! Input CSV: member_id,deposits,monthly_contribution
//! Output CSV: one row per member with max loan and installments, or the
//! validation error for that member.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use sacco_portal::calculator::LoanCalculator;
use sacco_portal::format::format_kes;
use sacco_portal::member::{evaluate_batch, load_members, write_results};
use sacco_portal::PortalConfig;

#[derive(Debug, Parser)]
#[command(name = "batch_eligibility", about = "Loan eligibility for every member in a CSV")]
struct Args {
    /// Member CSV
    input: PathBuf,

    /// Output CSV (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Portal config JSON
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = PortalConfig::load_or_default(args.config.as_deref())?;

    let start = Instant::now();
    let records = load_members(&args.input)
        .with_context(|| format!("failed to load members from {}", args.input.display()))?;
    eprintln!("Loaded {} members in {:?}", records.len(), start.elapsed());

    let outcomes = evaluate_batch(
        &records,
        &LoanCalculator::standard(),
        config.negative_deposit_policy,
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_results(file, &outcomes)?;
            eprintln!("Output written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_results(stdout.lock(), &outcomes)?;
            io::stdout().flush()?;
        }
    }

    let eligible: Vec<f64> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok().map(|q| q.max_loan))
        .collect();
    let total: f64 = eligible.iter().sum();

    eprintln!("\nBatch Summary:");
    eprintln!("  Members quoted:  {}", eligible.len());
    eprintln!("  Members invalid: {}", outcomes.len() - eligible.len());
    eprintln!("  Total eligibility: {}", format_kes(total));
    eprintln!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
