//! Deduction rules.
//!
//! The `tax` module defines the withholdings applied to a gross salary.
//! It provides the `DeductionRule` trait, which individual withholdings
//! implement, plus the rate and limit constants they share.  All rates
//! and limits are exact decimals so that no rule ever introduces binary
//! rounding drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flat social security withholding rate (8%).
pub const SOCIAL_SECURITY_RATE: Decimal = dec!(0.08);
/// Upper bound on the social security withholding per paycheck.
pub const SOCIAL_SECURITY_CAP: Decimal = dec!(500.00);

/// Gross amounts at or below this limit withhold no income tax.
pub const INCOME_TAX_EXEMPTION_LIMIT: Decimal = dec!(2000.00);
/// Flat income tax rate (10%) applied above the exemption limit.
pub const INCOME_TAX_RATE: Decimal = dec!(0.10);

/// A deduction rule determines how much to withhold from a gross salary.
///
/// Rules are pure functions of the gross amount and must be thread-safe
/// (`Send + Sync`); callers are free to apply them concurrently since
/// they touch no shared state.
pub trait DeductionRule: Send + Sync {
    /// Short code identifying the withholding on a paycheck (e.g. `"INSS"`).
    fn code(&self) -> &str;
    /// Calculates the amount to withhold from `gross`.
    fn apply(&self, gross: Decimal) -> Decimal;
}

/// Social security withholding (INSS-style): a flat 8% of gross, capped
/// at 500.00 currency units.
pub struct SocialSecurity;

impl DeductionRule for SocialSecurity {
    fn code(&self) -> &str {
        "INSS"
    }

    fn apply(&self, gross: Decimal) -> Decimal {
        (gross * SOCIAL_SECURITY_RATE).min(SOCIAL_SECURITY_CAP)
    }
}

/// Income tax withholding (IRRF-style): nothing up to and including the
/// exemption limit, then a flat 10% of the whole gross amount.  The rate
/// is not marginal; once the limit is exceeded it applies to every unit.
pub struct IncomeTax;

impl DeductionRule for IncomeTax {
    fn code(&self) -> &str {
        "IRRF"
    }

    fn apply(&self, gross: Decimal) -> Decimal {
        if gross <= INCOME_TAX_EXEMPTION_LIMIT {
            Decimal::ZERO
        } else {
            gross * INCOME_TAX_RATE
        }
    }
}
