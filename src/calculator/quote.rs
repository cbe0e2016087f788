//! Maximum loan, level installments and the repayment quote shown to members

use log::debug;
use serde::{Deserialize, Serialize};

use super::amortization::{amortization_table, level_installment, AmortizationTable};
use super::{LoanDuration, LoanTerms};
use crate::error::CalculatorError;
use crate::member::MemberInput;

/// Maximum loan for the standard product: deposits x 3, unrounded and unbounded
pub fn compute_max_loan(deposits: f64) -> f64 {
    LoanCalculator::standard().max_loan(deposits)
}

/// Monthly installment for the standard product, rounded to whole currency units
pub fn compute_installment(max_loan: f64, duration: LoanDuration) -> f64 {
    LoanCalculator::standard().installment(max_loan, duration)
}

/// Round to the nearest integer with halves going toward +infinity
///
/// Matches the rounding the website has always displayed: 2.5 -> 3, -2.5 -> -2.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// One row of the repayment table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentEntry {
    pub duration: LoanDuration,
    pub monthly_installment: f64,
}

/// Everything the calculator shows for one pair of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentQuote {
    pub deposits: f64,
    /// Displayed alongside the quote; never enters the installment formula
    pub monthly_contribution: f64,
    pub max_loan: f64,
    pub schedule: Vec<RepaymentEntry>,
}

impl RepaymentQuote {
    /// Installment for a given duration, if it is part of the schedule
    pub fn installment_for(&self, duration: LoanDuration) -> Option<f64> {
        self.schedule
            .iter()
            .find(|entry| entry.duration == duration)
            .map(|entry| entry.monthly_installment)
    }
}

/// Calculator bound to a loan product
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoanCalculator {
    terms: LoanTerms,
}

impl LoanCalculator {
    pub fn new(terms: LoanTerms) -> Self {
        Self { terms }
    }

    pub fn standard() -> Self {
        Self::new(LoanTerms::standard())
    }

    pub fn terms(&self) -> LoanTerms {
        self.terms
    }

    pub fn max_loan(&self, deposits: f64) -> f64 {
        deposits * self.terms.multiplier()
    }

    /// P * r * (1+r)^n / ((1+r)^n - 1), rounded
    pub fn installment(&self, max_loan: f64, duration: LoanDuration) -> f64 {
        let raw = level_installment(max_loan, self.terms.monthly_rate(), duration.months());
        round_half_up(raw)
    }

    /// Installments for every offered duration, shortest first
    pub fn schedule(&self, max_loan: f64) -> Vec<RepaymentEntry> {
        LoanDuration::ALL
            .iter()
            .map(|&duration| RepaymentEntry {
                duration,
                monthly_installment: self.installment(max_loan, duration),
            })
            .collect()
    }

    /// Quote straight from raw figures; no validation is applied here
    pub fn quote(&self, deposits: f64, monthly_contribution: f64) -> RepaymentQuote {
        let max_loan = self.max_loan(deposits);
        let schedule = self.schedule(max_loan);
        debug!(
            "quote: deposits={} max_loan={} installments={:?}",
            deposits,
            max_loan,
            schedule.iter().map(|e| e.monthly_installment).collect::<Vec<_>>()
        );
        RepaymentQuote {
            deposits,
            monthly_contribution,
            max_loan,
            schedule,
        }
    }

    /// Quote for input that already passed boundary validation
    pub fn quote_input(&self, input: &MemberInput) -> RepaymentQuote {
        self.quote(input.deposits(), input.monthly_contribution())
    }

    /// Month-by-month breakdown of the maximum loan over a duration
    pub fn amortize(&self, max_loan: f64, duration: LoanDuration) -> AmortizationTable {
        // Rate and term are already guarded by LoanTerms and LoanDuration
        AmortizationTable::build(max_loan, self.terms.monthly_rate(), duration.months())
    }

    /// Breakdown over an arbitrary term, for durations outside the standard set
    pub fn amortize_months(
        &self,
        max_loan: f64,
        months: u32,
    ) -> Result<AmortizationTable, CalculatorError> {
        amortization_table(max_loan, self.terms.monthly_rate(), months)
    }
}
