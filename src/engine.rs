//! Net salary calculation engine.
//!
//! The `engine` module is responsible for turning a [`GrossInput`] into a
//! [`Paycheck`].  The calculation is a single deterministic pass: the
//! input is normalised to an exact decimal, validated, the deduction
//! rules from the [`crate::tax`] module are applied in order, and the
//! remainder is rounded to currency precision.

use crate::error::SalaryError;
use crate::models::{DeductionLine, GrossInput, Paycheck};
use crate::tax::{DeductionRule, IncomeTax, SocialSecurity};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept in the final net figure.
const CURRENCY_SCALE: u32 = 2;

/// The withholdings applied to every paycheck, in the order they are
/// taken.
fn withholdings() -> [&'static dyn DeductionRule; 2] {
    [&SocialSecurity, &IncomeTax]
}

/// Calculates the net salary for a gross amount.
///
/// Accepts any [`GrossInput`] representation (integer, float, decimal
/// string or exact decimal) and returns the net figure rounded to two
/// decimal places.  Equal inputs yield equal outputs regardless of
/// representation: `1000`, `1000.0` and `"1000"` all net the same.
///
/// Fails with [`SalaryError::InvalidInput`] when the gross salary does
/// not parse or is not strictly positive.
pub fn calculate_net_salary(gross: impl Into<GrossInput>) -> Result<f64, SalaryError> {
    let paycheck = compute_paycheck(gross.into())?;
    // A two-decimal currency amount always fits in an f64.
    Ok(paycheck.net.to_f64().unwrap_or_default())
}

/// Runs the full calculation and returns the paycheck breakdown.
///
/// This is the engine behind [`calculate_net_salary`]; callers that need
/// the individual withholding amounts (such as the HTTP API) use this
/// directly.
pub fn compute_paycheck(input: GrossInput) -> Result<Paycheck, SalaryError> {
    let gross = input.to_decimal()?;
    if gross <= Decimal::ZERO {
        return Err(SalaryError::InvalidInput(
            "gross salary must be greater than zero".to_string(),
        ));
    }

    let mut deductions = Vec::with_capacity(2);
    let mut withheld = Decimal::ZERO;
    for rule in withholdings() {
        let amount = rule.apply(gross);
        withheld += amount;
        deductions.push(DeductionLine {
            code: rule.code().to_string(),
            amount,
        });
    }

    let net = round_to_currency(gross - withheld);
    Ok(Paycheck {
        gross,
        deductions,
        net,
    })
}

/// Rounds a monetary amount to two decimal places, half up.
///
/// Exact halves round away from zero.  The plain `round_dp` default is
/// banker's rounding, which would send `1136.085` to `1136.08` instead
/// of `1136.09`.
pub fn round_to_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn withholds_only_social_security_under_the_tax_threshold() {
        // 8% of 1000 is 80; no income tax at or below 2000.
        assert_eq!(calculate_net_salary(1000).unwrap(), 920.0);
    }

    #[test]
    fn withholds_both_deductions_above_the_tax_threshold() {
        // INSS 240 + IRRF 300.
        assert_eq!(calculate_net_salary(3000).unwrap(), 2460.0);
    }

    #[test]
    fn social_security_is_capped_for_large_salaries() {
        // INSS capped at 500 (8% would be 800), IRRF 1000.
        assert_eq!(calculate_net_salary(10000).unwrap(), 8500.0);
    }

    #[test]
    fn the_tax_threshold_itself_is_exempt() {
        // Exactly 2000: INSS 160, no IRRF.
        assert_eq!(calculate_net_salary(2000).unwrap(), 1840.0);
    }

    #[test]
    fn zero_and_negative_gross_are_invalid() {
        assert!(matches!(
            calculate_net_salary(0),
            Err(SalaryError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_net_salary(-50),
            Err(SalaryError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_net_salary("-0.01"),
            Err(SalaryError::InvalidInput(_))
        ));
        let err = calculate_net_salary(0).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn unparseable_input_is_invalid() {
        assert!(calculate_net_salary("abc").is_err());
        assert!(calculate_net_salary(f64::NAN).is_err());
    }

    #[test]
    fn representation_does_not_change_the_result() {
        let from_int = calculate_net_salary(1000).unwrap();
        let from_float = calculate_net_salary(1000.0).unwrap();
        let from_text = calculate_net_salary("1000").unwrap();
        let from_decimal = calculate_net_salary(dec!(1000)).unwrap();
        assert_eq!(from_int, 920.0);
        assert_eq!(from_int, from_float);
        assert_eq!(from_int, from_text);
        assert_eq!(from_int, from_decimal);
    }

    #[test]
    fn calculation_is_idempotent() {
        let first = calculate_net_salary("3456.78").unwrap();
        let second = calculate_net_salary("3456.78").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn paycheck_breaks_out_each_withholding() {
        let paycheck = compute_paycheck(GrossInput::from(3000)).unwrap();
        assert_eq!(paycheck.gross, dec!(3000));
        assert_eq!(paycheck.deductions.len(), 2);
        assert_eq!(paycheck.deductions[0].code, "INSS");
        assert_eq!(paycheck.deductions[0].amount, dec!(240.00));
        assert_eq!(paycheck.deductions[1].code, "IRRF");
        assert_eq!(paycheck.deductions[1].amount, dec!(300.00));
        assert_eq!(paycheck.net, dec!(2460.00));
    }

    #[test]
    fn rounds_exact_halves_away_from_zero() {
        // 1234.875 - 98.79 INSS = 1136.085; banker's rounding would
        // give 1136.08 here.
        let paycheck = compute_paycheck(GrossInput::from("1234.875")).unwrap();
        assert_eq!(paycheck.net, dec!(1136.09));
    }

    #[test]
    fn round_to_currency_is_half_up() {
        assert_eq!(round_to_currency(dec!(2.005)), dec!(2.01));
        assert_eq!(round_to_currency(dec!(2.004)), dec!(2.00));
        assert_eq!(round_to_currency(dec!(-2.005)), dec!(-2.01));
    }
}
