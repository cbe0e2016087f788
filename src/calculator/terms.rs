//! Loan product terms: deposit multiplier, monthly rate and offered durations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DEPOSIT_MULTIPLIER, MONTHLY_INTEREST_RATE};
use crate::error::CalculatorError;

/// Repayment period offered on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanDuration {
    Months12,
    Months24,
    Months48,
}

impl LoanDuration {
    /// All offered durations, shortest first
    pub const ALL: [LoanDuration; 3] = [
        LoanDuration::Months12,
        LoanDuration::Months24,
        LoanDuration::Months48,
    ];

    /// Number of monthly installments
    pub fn months(self) -> u32 {
        match self {
            LoanDuration::Months12 => 12,
            LoanDuration::Months24 => 24,
            LoanDuration::Months48 => 48,
        }
    }

    pub fn from_months(months: u32) -> Result<Self, CalculatorError> {
        match months {
            12 => Ok(LoanDuration::Months12),
            24 => Ok(LoanDuration::Months24),
            48 => Ok(LoanDuration::Months48),
            other => Err(CalculatorError::UnsupportedDuration(other)),
        }
    }
}

impl TryFrom<u32> for LoanDuration {
    type Error = CalculatorError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Self::from_months(months)
    }
}

impl From<LoanDuration> for u32 {
    fn from(duration: LoanDuration) -> Self {
        duration.months()
    }
}

impl fmt::Display for LoanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Months", self.months())
    }
}

/// Multiplier and rate of a loan product
///
/// The standard product is fixed; `new` exists for product definitions in
/// code and is never fed from member input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanTerms {
    multiplier: f64,
    monthly_rate: f64,
}

impl LoanTerms {
    /// 3x deposits at 1.2% per month, reducing balance
    pub const fn standard() -> Self {
        Self {
            multiplier: DEPOSIT_MULTIPLIER,
            monthly_rate: MONTHLY_INTEREST_RATE,
        }
    }

    /// Define a product; a zero (or NaN) rate would make the installment divide by zero
    pub fn new(multiplier: f64, monthly_rate: f64) -> Result<Self, CalculatorError> {
        if !(monthly_rate > 0.0) || !monthly_rate.is_finite() {
            return Err(CalculatorError::NonPositiveRate(monthly_rate));
        }
        if !(multiplier > 0.0) || !multiplier.is_finite() {
            return Err(CalculatorError::NonPositiveMultiplier(multiplier));
        }
        Ok(Self {
            multiplier,
            monthly_rate,
        })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self::standard()
    }
}
