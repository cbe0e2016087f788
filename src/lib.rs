//! Sacco Portal - loan eligibility calculator and member portal core
//!
//! This library provides:
//! - Maximum loan eligibility (3x deposits) and reducing-balance installments
//! - Month-by-month amortization breakdowns
//! - Boundary validation of member input and CSV batch evaluation
//! - Immutable site reference data (charter, resources, tenders, governance)
//! - Serializable view state and a credential verification interface

pub mod auth;
pub mod calculator;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod member;
pub mod view;

// Re-export commonly used types
pub use calculator::{
    compute_installment, compute_max_loan, LoanCalculator, LoanDuration, LoanTerms,
    RepaymentEntry, RepaymentQuote,
};
pub use config::{ConfigError, PortalConfig};
pub use content::SiteContent;
pub use error::{CalculatorError, InputError};
pub use member::{MemberInput, NegativeDepositPolicy};
pub use view::{ViewEvent, ViewState};
