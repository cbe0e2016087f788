//! End-to-end checks of the public calculator API

use approx::assert_relative_eq;
use sacco_portal::calculator::{LoanCalculator, LoanDuration};
use sacco_portal::format::format_kes;
use sacco_portal::member::{ContributionOutlook, MemberInput};
use sacco_portal::{compute_installment, compute_max_loan, InputError};

#[test]
fn test_default_form_values() {
    let input = MemberInput::default();
    let quote = LoanCalculator::standard().quote_input(&input);

    assert_eq!(format_kes(quote.max_loan), "KES 300,000");
    let displayed: Vec<(String, String)> = quote
        .schedule
        .iter()
        .map(|e| (e.duration.to_string(), format_kes(e.monthly_installment)))
        .collect();
    assert_eq!(
        displayed,
        vec![
            ("12 Months".to_string(), "KES 26,993".to_string()),
            ("24 Months".to_string(), "KES 14,461".to_string()),
            ("48 Months".to_string(), "KES 8,258".to_string()),
        ]
    );
}

#[test]
fn test_max_loan_linear() {
    for deposits in [0.0, 1.0, 2_500.0, 100_000.0, 7_654_321.0] {
        assert_eq!(compute_max_loan(deposits), 3.0 * deposits);
    }
}

#[test]
fn test_installment_scales_with_loan() {
    // Doubling the loan doubles the unrounded installment
    let small = compute_installment(1_000_000.0, LoanDuration::Months48);
    let large = compute_installment(2_000_000.0, LoanDuration::Months48);
    assert!((large - 2.0 * small).abs() <= 1.0);
}

#[test]
fn test_boundary_rejects_before_calculation() {
    assert_eq!(
        MemberInput::new(-50_000.0, 5_000.0),
        Err(InputError::InvalidDeposit(-50_000.0))
    );
    assert!(MemberInput::new(f64::NAN, 5_000.0).is_err());
}

#[test]
fn test_amortization_agrees_with_rounded_installment() {
    let calc = LoanCalculator::standard();
    for duration in LoanDuration::ALL {
        let table = calc.amortize(300_000.0, duration);
        assert_eq!(table.months(), duration.months());
        assert_eq!(table.installment().round(), calc.installment(300_000.0, duration));
        assert_relative_eq!(
            table.total_paid() - table.total_interest(),
            300_000.0,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_outlook_never_changes_installments() {
    let calc = LoanCalculator::standard();
    let input = MemberInput::new(100_000.0, 5_000.0).unwrap();
    let before = calc.quote_input(&input);
    let _ = ContributionOutlook::after_months(&calc, &input, 24);
    assert_eq!(calc.quote_input(&input), before);
}
