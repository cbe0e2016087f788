//! Member input at the calculator boundary and batch eligibility runs

mod input;
pub mod batch;

pub use input::{ContributionOutlook, MemberInput, NegativeDepositPolicy};
pub use batch::{
    evaluate_batch, load_members, load_members_from_reader, write_results, BatchError,
    BatchOutcome, MemberRecord,
};

/// Deposits pre-filled on the calculator form
pub const DEFAULT_DEPOSITS: f64 = 100_000.0;

/// Monthly contribution pre-filled on the calculator form
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 5_000.0;
