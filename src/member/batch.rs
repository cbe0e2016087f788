//! Batch eligibility for a member list
//!
//! Reads `member_id,deposits,monthly_contribution` rows from CSV, quotes every
//! member in parallel and writes one output row per member. A member whose
//! figures fail validation gets an error column instead of aborting the run.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{MemberInput, NegativeDepositPolicy};
use crate::calculator::{LoanCalculator, LoanDuration, RepaymentQuote};
use crate::error::InputError;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub member_id: String,
    pub deposits: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
}

/// Quote or validation failure for one member
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub member_id: String,
    pub result: Result<RepaymentQuote, InputError>,
}

/// Flat CSV output row
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    member_id: &'a str,
    deposits: Option<f64>,
    max_loan: Option<f64>,
    installment_12: Option<f64>,
    installment_24: Option<f64>,
    installment_48: Option<f64>,
    error: Option<String>,
}

/// Load member records from a CSV file
pub fn load_members<P: AsRef<Path>>(path: P) -> Result<Vec<MemberRecord>, BatchError> {
    let file = File::open(path.as_ref())?;
    let records = load_members_from_reader(file)?;
    info!("Loaded {} members from {}", records.len(), path.as_ref().display());
    Ok(records)
}

/// Load member records from any reader (header row required)
pub fn load_members_from_reader<R: Read>(reader: R) -> Result<Vec<MemberRecord>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: MemberRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// Quote every member in parallel; order of the input is preserved
pub fn evaluate_batch(
    records: &[MemberRecord],
    calculator: &LoanCalculator,
    policy: NegativeDepositPolicy,
) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = records
        .par_iter()
        .map(|record| {
            let result = MemberInput::with_policy(record.deposits, record.monthly_contribution, policy)
                .map(|input| calculator.quote_input(&input));
            BatchOutcome {
                member_id: record.member_id.clone(),
                result,
            }
        })
        .collect();

    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    if rejected > 0 {
        warn!("{} of {} members failed validation", rejected, outcomes.len());
    }
    outcomes
}

/// Write outcomes as CSV
pub fn write_results<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> Result<(), BatchError> {
    let mut wtr = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let row = match &outcome.result {
            Ok(quote) => OutputRow {
                member_id: &outcome.member_id,
                deposits: Some(quote.deposits),
                max_loan: Some(quote.max_loan),
                installment_12: quote.installment_for(LoanDuration::Months12),
                installment_24: quote.installment_for(LoanDuration::Months24),
                installment_48: quote.installment_for(LoanDuration::Months48),
                error: None,
            },
            Err(e) => OutputRow {
                member_id: &outcome.member_id,
                deposits: None,
                max_loan: None,
                installment_12: None,
                installment_24: None,
                installment_48: None,
                error: Some(e.to_string()),
            },
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
