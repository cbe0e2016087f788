//! Validation of raw calculator input
//!
//! The calculator itself never rejects anything. Input coming from members is
//! checked here first so a negative or NaN deposit never turns into a
//! "maximum loan".

use log::warn;
use serde::{Deserialize, Serialize};

use super::{DEFAULT_DEPOSITS, DEFAULT_MONTHLY_CONTRIBUTION};
use crate::calculator::LoanCalculator;
use crate::error::InputError;

/// What to do with a negative deposit figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativeDepositPolicy {
    /// Fail with `InputError::InvalidDeposit`
    #[default]
    Reject,
    /// Treat as zero deposits
    ClampToZero,
    /// Hand the value to the calculator unchanged (negative max loan)
    PassThrough,
}

/// Deposits and contribution that passed boundary validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemberInput {
    deposits: f64,
    monthly_contribution: f64,
}

impl MemberInput {
    /// Validate with the default policy (reject negatives)
    pub fn new(deposits: f64, monthly_contribution: f64) -> Result<Self, InputError> {
        Self::with_policy(deposits, monthly_contribution, NegativeDepositPolicy::Reject)
    }

    pub fn with_policy(
        deposits: f64,
        monthly_contribution: f64,
        policy: NegativeDepositPolicy,
    ) -> Result<Self, InputError> {
        if !deposits.is_finite() {
            return Err(InputError::InvalidDeposit(deposits));
        }
        let deposits = if deposits < 0.0 {
            match policy {
                NegativeDepositPolicy::Reject => {
                    return Err(InputError::InvalidDeposit(deposits));
                }
                NegativeDepositPolicy::ClampToZero => {
                    warn!("negative deposits {} clamped to zero", deposits);
                    0.0
                }
                NegativeDepositPolicy::PassThrough => deposits,
            }
        } else {
            deposits
        };

        if !monthly_contribution.is_finite() || monthly_contribution < 0.0 {
            return Err(InputError::InvalidContribution(monthly_contribution));
        }

        Ok(Self {
            deposits,
            monthly_contribution,
        })
    }

    pub fn deposits(&self) -> f64 {
        self.deposits
    }

    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }
}

impl Default for MemberInput {
    fn default() -> Self {
        Self {
            deposits: DEFAULT_DEPOSITS,
            monthly_contribution: DEFAULT_MONTHLY_CONTRIBUTION,
        }
    }
}

/// Deposits and eligibility after some months of regular contributions
///
/// Informational only: contributions accumulate without interest and never
/// feed the installment formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionOutlook {
    pub months: u32,
    pub projected_deposits: f64,
    pub projected_max_loan: f64,
}

impl ContributionOutlook {
    pub fn after_months(
        calculator: &LoanCalculator,
        input: &MemberInput,
        months: u32,
    ) -> Self {
        let projected_deposits = input.deposits() + input.monthly_contribution() * months as f64;
        Self {
            months,
            projected_deposits,
            projected_max_loan: calculator.max_loan(projected_deposits),
        }
    }

    /// Months of contributions needed before the max loan reaches `target`
    ///
    /// `None` when the target is out of reach (no contribution, or a target
    /// that is not a finite amount).
    pub fn months_to_reach(
        calculator: &LoanCalculator,
        input: &MemberInput,
        target_max_loan: f64,
    ) -> Option<u32> {
        if !target_max_loan.is_finite() {
            return None;
        }
        let required_deposits = target_max_loan / calculator.terms().multiplier();
        let shortfall = required_deposits - input.deposits();
        if shortfall <= 0.0 {
            return Some(0);
        }
        if input.monthly_contribution() <= 0.0 {
            return None;
        }
        let months = (shortfall / input.monthly_contribution()).ceil();
        if months > u32::MAX as f64 {
            None
        } else {
            Some(months as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = MemberInput::new(100_000.0, 5_000.0).unwrap();
        assert_eq!(input.deposits(), 100_000.0);
        assert_eq!(input.monthly_contribution(), 5_000.0);
        assert_eq!(MemberInput::default(), input);
    }

    #[test]
    fn test_zero_is_valid() {
        assert!(MemberInput::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_rejects_negative_deposit_by_default() {
        assert_eq!(
            MemberInput::new(-1.0, 0.0),
            Err(InputError::InvalidDeposit(-1.0))
        );
    }

    #[test]
    fn test_rejects_non_finite_deposit_under_every_policy() {
        for policy in [
            NegativeDepositPolicy::Reject,
            NegativeDepositPolicy::ClampToZero,
            NegativeDepositPolicy::PassThrough,
        ] {
            assert!(MemberInput::with_policy(f64::NAN, 0.0, policy).is_err());
            assert!(MemberInput::with_policy(f64::INFINITY, 0.0, policy).is_err());
            assert!(MemberInput::with_policy(f64::NEG_INFINITY, 0.0, policy).is_err());
        }
    }

    #[test]
    fn test_clamp_and_pass_through() {
        let clamped =
            MemberInput::with_policy(-500.0, 0.0, NegativeDepositPolicy::ClampToZero).unwrap();
        assert_eq!(clamped.deposits(), 0.0);

        let passed =
            MemberInput::with_policy(-500.0, 0.0, NegativeDepositPolicy::PassThrough).unwrap();
        assert_eq!(passed.deposits(), -500.0);
        assert_eq!(LoanCalculator::standard().quote_input(&passed).max_loan, -1_500.0);
    }

    #[test]
    fn test_rejects_bad_contribution() {
        assert_eq!(
            MemberInput::new(1_000.0, -1.0),
            Err(InputError::InvalidContribution(-1.0))
        );
        assert!(MemberInput::new(1_000.0, f64::NAN).is_err());
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&NegativeDepositPolicy::ClampToZero).unwrap();
        assert_eq!(json, "\"clamp-to-zero\"");
        let parsed: NegativeDepositPolicy = serde_json::from_str("\"pass-through\"").unwrap();
        assert_eq!(parsed, NegativeDepositPolicy::PassThrough);
    }

    #[test]
    fn test_contribution_outlook() {
        let calc = LoanCalculator::standard();
        let input = MemberInput::new(100_000.0, 5_000.0).unwrap();

        let outlook = ContributionOutlook::after_months(&calc, &input, 12);
        assert_eq!(outlook.projected_deposits, 160_000.0);
        assert_eq!(outlook.projected_max_loan, 480_000.0);

        let now = ContributionOutlook::after_months(&calc, &input, 0);
        assert_eq!(now.projected_max_loan, 300_000.0);
    }

    #[test]
    fn test_months_to_reach() {
        let calc = LoanCalculator::standard();
        let input = MemberInput::new(100_000.0, 5_000.0).unwrap();

        // Already eligible
        assert_eq!(ContributionOutlook::months_to_reach(&calc, &input, 300_000.0), Some(0));
        // Need 200k deposits: 100k shortfall / 5k = 20 months
        assert_eq!(ContributionOutlook::months_to_reach(&calc, &input, 600_000.0), Some(20));
        // Partial month rounds up
        assert_eq!(ContributionOutlook::months_to_reach(&calc, &input, 303_000.0), Some(1));

        let idle = MemberInput::new(100_000.0, 0.0).unwrap();
        assert_eq!(ContributionOutlook::months_to_reach(&calc, &idle, 600_000.0), None);
    }

    #[test]
    fn test_months_to_reach_non_finite_target() {
        let calc = LoanCalculator::standard();
        let input = MemberInput::new(100_000.0, 5_000.0).unwrap();

        assert_eq!(ContributionOutlook::months_to_reach(&calc, &input, f64::NAN), None);
        assert_eq!(ContributionOutlook::months_to_reach(&calc, &input, f64::INFINITY), None);
        assert_eq!(
            ContributionOutlook::months_to_reach(&calc, &input, f64::NEG_INFINITY),
            None
        );
        // Any finite target below current eligibility is already met
        assert_eq!(ContributionOutlook::months_to_reach(&calc, &input, -1.0), Some(0));
    }
}
