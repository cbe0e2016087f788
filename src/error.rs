//! Error types shared by the calculator and the input boundary

use thiserror::Error;

/// Errors raised when defining loan product terms or durations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// Monthly rate must be strictly positive or the installment formula divides by zero
    #[error("monthly interest rate must be positive, got {0}")]
    NonPositiveRate(f64),

    #[error("deposit multiplier must be positive, got {0}")]
    NonPositiveMultiplier(f64),

    /// Only the standard 12/24/48 month terms are offered
    #[error("unsupported loan duration: {0} months (expected 12, 24 or 48)")]
    UnsupportedDuration(u32),

    #[error("loan term must be at least one month")]
    ZeroTerm,

    #[error("loan term of {months} months exceeds the {max} month limit")]
    TermTooLong { months: u32, max: u32 },

    /// (1+r)^n is not representable, so no finite installment exists
    #[error("installment overflows for {months} months at rate {rate}")]
    InstallmentOverflow { months: u32, rate: f64 },
}

/// Errors raised by boundary validation before the pure calculator runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("invalid deposit amount: {0}")]
    InvalidDeposit(f64),

    #[error("invalid monthly contribution: {0}")]
    InvalidContribution(f64),
}
