//! Loan eligibility calculator
//!
//! Prints the maximum loan and the 12/24/48 month repayment table for a
//! deposit figure, optionally with a month-by-month breakdown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sacco_portal::calculator::{LoanCalculator, LoanDuration};
use sacco_portal::format::format_kes;
use sacco_portal::member::{ContributionOutlook, MemberInput, NegativeDepositPolicy};
use sacco_portal::PortalConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NegativeArg {
    Reject,
    Clamp,
    PassThrough,
}

impl From<NegativeArg> for NegativeDepositPolicy {
    fn from(arg: NegativeArg) -> Self {
        match arg {
            NegativeArg::Reject => NegativeDepositPolicy::Reject,
            NegativeArg::Clamp => NegativeDepositPolicy::ClampToZero,
            NegativeArg::PassThrough => NegativeDepositPolicy::PassThrough,
        }
    }
}

fn parse_duration(raw: &str) -> Result<LoanDuration, String> {
    let months: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of months", raw))?;
    LoanDuration::from_months(months).map_err(|e| e.to_string())
}

#[derive(Debug, Parser)]
#[command(name = "loan_calc", about = "Sacco loan eligibility and repayment calculator")]
struct Args {
    /// Current deposits (KES); defaults to the configured form value
    #[arg(short, long, allow_negative_numbers = true)]
    deposits: Option<f64>,

    /// Monthly contribution (KES); shown only, never changes installments
    #[arg(short, long)]
    contribution: Option<f64>,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,

    /// Month-by-month breakdown for a term (12, 24 or 48)
    #[arg(long, value_name = "MONTHS", value_parser = parse_duration)]
    amortize: Option<LoanDuration>,

    /// Months of contributions to project deposits forward
    #[arg(long, value_name = "MONTHS")]
    outlook: Option<u32>,

    /// Handling of negative deposits (overrides config)
    #[arg(long, value_enum)]
    negative: Option<NegativeArg>,

    /// Portal config JSON
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = PortalConfig::load_or_default(args.config.as_deref())?;
    let policy = args
        .negative
        .map(NegativeDepositPolicy::from)
        .unwrap_or(config.negative_deposit_policy);

    let input = MemberInput::with_policy(
        args.deposits.unwrap_or(config.default_deposits),
        args.contribution.unwrap_or(config.default_monthly_contribution),
        policy,
    )
    .context("rejected calculator input")?;

    let calculator = LoanCalculator::standard();
    let quote = calculator.quote_input(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("Current Deposits:         {}", format_kes(quote.deposits));
        println!("Monthly Contribution:     {}", format_kes(quote.monthly_contribution));
        println!("Maximum Loan Eligibility: {}", format_kes(quote.max_loan));
        println!("  *Based on 3X multiplier of your current deposits.");
        println!();
        println!("{:<12} {:>20}", "Duration", "Monthly Installment");
        for entry in &quote.schedule {
            println!(
                "{:<12} {:>20}",
                entry.duration.to_string(),
                format_kes(entry.monthly_installment)
            );
        }
        println!();
        println!("Interest calculated at 1.2% per month on a reducing balance basis.");
    }

    if let Some(months) = args.outlook {
        let outlook = ContributionOutlook::after_months(&calculator, &input, months);
        println!();
        println!(
            "After {} months of contributions: deposits {}, maximum loan {}",
            outlook.months,
            format_kes(outlook.projected_deposits),
            format_kes(outlook.projected_max_loan)
        );
    }

    if let Some(duration) = args.amortize {
        let table = calculator.amortize(quote.max_loan, duration);
        println!();
        println!(
            "{:>5} {:>16} {:>14} {:>14} {:>16}",
            "Month", "Opening", "Interest", "Principal", "Closing"
        );
        for row in &table.rows {
            println!(
                "{:>5} {:>16.2} {:>14.2} {:>14.2} {:>16.2}",
                row.month, row.opening_balance, row.interest, row.principal, row.closing_balance
            );
        }
        println!(
            "Total interest: {}  Total repaid: {}",
            format_kes(table.total_interest().round()),
            format_kes(table.total_paid().round())
        );
    }

    Ok(())
}
