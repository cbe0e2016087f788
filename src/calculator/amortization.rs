//! Reducing-balance amortization
//!
//! Each month interest is charged on the outstanding balance and the rest of
//! the level installment repays principal, so the balance reaches zero after
//! the final installment.

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// Longest breakdown built on request (100 years)
pub const MAX_TERM_MONTHS: u32 = 1_200;

/// Unrounded level installment: P * r * (1+r)^n / ((1+r)^n - 1)
///
/// Callers must ensure `monthly_rate > 0` and `months >= 1`.
pub fn level_installment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let growth = (1.0 + monthly_rate).powf(months as f64);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// One month of the repayment breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Installment number, 1-indexed
    pub month: u32,
    pub opening_balance: f64,
    pub interest: f64,
    pub principal: f64,
    pub installment: f64,
    pub closing_balance: f64,
}

/// Full breakdown of a loan over its term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationTable {
    pub principal: f64,
    pub monthly_rate: f64,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationTable {
    /// Build without guards; rate and term must already be valid
    pub(crate) fn build(principal: f64, monthly_rate: f64, months: u32) -> Self {
        let payment = level_installment(principal, monthly_rate, months);
        let mut rows = Vec::with_capacity(months as usize);
        let mut balance = principal;

        for month in 1..=months {
            let interest = balance * monthly_rate;
            let (principal_paid, installment) = if month == months {
                // Last installment clears whatever floating residue is left
                (balance, balance + interest)
            } else {
                (payment - interest, payment)
            };
            let closing = if month == months { 0.0 } else { balance - principal_paid };

            rows.push(AmortizationRow {
                month,
                opening_balance: balance,
                interest,
                principal: principal_paid,
                installment,
                closing_balance: closing,
            });
            balance = closing;
        }

        Self {
            principal,
            monthly_rate,
            rows,
        }
    }

    /// Level installment (unrounded); zero for an empty table
    pub fn installment(&self) -> f64 {
        self.rows.first().map(|r| r.installment).unwrap_or(0.0)
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.rows.iter().map(|r| r.installment).sum()
    }

    pub fn months(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// Build the month-by-month breakdown for any positive rate and term
pub fn amortization_table(
    principal: f64,
    monthly_rate: f64,
    months: u32,
) -> Result<AmortizationTable, CalculatorError> {
    if months == 0 {
        return Err(CalculatorError::ZeroTerm);
    }
    if months > MAX_TERM_MONTHS {
        return Err(CalculatorError::TermTooLong {
            months,
            max: MAX_TERM_MONTHS,
        });
    }
    if !(monthly_rate > 0.0) || !monthly_rate.is_finite() {
        return Err(CalculatorError::NonPositiveRate(monthly_rate));
    }
    if !(1.0 + monthly_rate).powf(months as f64).is_finite() {
        return Err(CalculatorError::InstallmentOverflow {
            months,
            rate: monthly_rate,
        });
    }
    Ok(AmortizationTable::build(principal, monthly_rate, months))
}
