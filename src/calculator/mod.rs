//! Loan eligibility and reducing-balance repayment calculator

mod terms;
mod quote;
pub mod amortization;

pub use terms::{LoanDuration, LoanTerms};
pub use quote::{
    compute_installment, compute_max_loan, round_half_up, LoanCalculator, RepaymentEntry,
    RepaymentQuote,
};
pub use amortization::{
    amortization_table, level_installment, AmortizationRow, AmortizationTable, MAX_TERM_MONTHS,
};

// ============================================================================
// Standard Loan Product
// ============================================================================
// Members may borrow up to three times their deposits. Interest is charged
// monthly on the reducing balance and repaid in equal installments.

/// Maximum loan as a multiple of current deposits
pub const DEPOSIT_MULTIPLIER: f64 = 3.0;

/// Monthly interest rate on the reducing balance (1.2%)
pub const MONTHLY_INTEREST_RATE: f64 = 0.012;
