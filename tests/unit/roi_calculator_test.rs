//! Unit tests for the ROI calculator service.

use rstest::rstest;

use sitemanager::services::roi_calculator::{RoiCalculator, RoiCalculatorTrait};
use sitemanager::types::errors::RoiError;

#[rstest]
#[case(10_000.0, 15_000.0, 2_000.0, 30.0)]
#[case(10_000.0, 12_000.0, 2_000.0, 0.0)]
#[case(10_000.0, 10_000.0, 2_000.0, -20.0)]
#[case(1_000.0, 5_000.0, 0.0, 400.0)]
#[case(500.0, 0.0, 0.0, -100.0)]
fn test_known_roi_values(
    #[case] investment: f64,
    #[case] revenue: f64,
    #[case] costs: f64,
    #[case] expected: f64,
) {
    let calc = RoiCalculator::new();
    let roi = calc.calculate(investment, revenue, costs).unwrap();
    assert!((roi - expected).abs() < 1e-9, "got {}, expected {}", roi, expected);
}

#[test]
fn test_zero_investment_is_rejected() {
    let calc = RoiCalculator::new();
    assert!(matches!(
        calc.calculate(0.0, 15_000.0, 2_000.0),
        Err(RoiError::ZeroInvestment)
    ));
}

#[rstest]
#[case(f64::NAN, 1.0, 1.0)]
#[case(1.0, f64::NAN, 1.0)]
#[case(1.0, 1.0, f64::NAN)]
#[case(f64::INFINITY, 1.0, 1.0)]
fn test_non_finite_inputs_are_rejected(
    #[case] investment: f64,
    #[case] revenue: f64,
    #[case] costs: f64,
) {
    let calc = RoiCalculator::new();
    assert!(matches!(
        calc.calculate(investment, revenue, costs),
        Err(RoiError::InvalidInput(_))
    ));
}

#[test]
fn test_format_roi_two_decimals_with_percent() {
    let calc = RoiCalculator::new();
    assert_eq!(calc.format_roi(30.0), "30.00%");
    assert_eq!(calc.format_roi(-20.5), "-20.50%");
    assert_eq!(calc.format_roi(33.333_333), "33.33%");
}
