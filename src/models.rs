//! Data models for the Salary Engine.
//!
//! The `models` module defines the serialisable types that form the
//! engine's input and output structures: the representations under which
//! a gross salary may be supplied, and the computed paycheck.  These
//! data types derive `Serialize` and `Deserialize` so that they can be
//! easily transmitted over a network.

use crate::error::SalaryError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A gross salary as supplied by a caller.
///
/// Callers may hand the engine a whole number, a float, a decimal string
/// such as `"1234.56"`, or an exact [`Decimal`].  The enum is untagged,
/// so on the wire a JSON number or string maps onto the matching variant
/// directly.
///
/// Every representation is converted to an exact base-10 [`Decimal`] via
/// its string form.  Floats in particular are never widened through their
/// binary representation: `1234.56f64` becomes the decimal `1234.56`, not
/// the nearest binary approximation of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrossInput {
    /// A whole-currency amount, e.g. `1000`.
    Int(i64),
    /// A floating point amount, e.g. `1000.0`.
    Float(f64),
    /// A decimal string, e.g. `"1000"` or `"1234.56"`.
    Text(String),
    /// An exact decimal amount.
    Exact(Decimal),
}

impl GrossInput {
    /// Converts the input into an exact decimal.
    ///
    /// Fails with [`SalaryError::InvalidInput`] when the value does not
    /// parse as a number, e.g. `"abc"` or a non-finite float.  Whether
    /// the amount is positive is not checked here; the engine validates
    /// that separately.
    pub fn to_decimal(&self) -> Result<Decimal, SalaryError> {
        match self {
            GrossInput::Int(value) => Ok(Decimal::from(*value)),
            GrossInput::Float(value) => parse_decimal(&value.to_string()),
            GrossInput::Text(text) => parse_decimal(text.trim()),
            GrossInput::Exact(value) => Ok(*value),
        }
    }
}

fn parse_decimal(text: &str) -> Result<Decimal, SalaryError> {
    Decimal::from_str(text).map_err(|_| {
        SalaryError::InvalidInput(format!("gross salary is not a valid number: {text:?}"))
    })
}

impl From<i64> for GrossInput {
    fn from(value: i64) -> Self {
        GrossInput::Int(value)
    }
}

impl From<i32> for GrossInput {
    fn from(value: i32) -> Self {
        GrossInput::Int(i64::from(value))
    }
}

impl From<u32> for GrossInput {
    fn from(value: u32) -> Self {
        GrossInput::Int(i64::from(value))
    }
}

impl From<f64> for GrossInput {
    fn from(value: f64) -> Self {
        GrossInput::Float(value)
    }
}

impl From<&str> for GrossInput {
    fn from(value: &str) -> Self {
        GrossInput::Text(value.to_string())
    }
}

impl From<String> for GrossInput {
    fn from(value: String) -> Self {
        GrossInput::Text(value)
    }
}

impl From<Decimal> for GrossInput {
    fn from(value: Decimal) -> Self {
        GrossInput::Exact(value)
    }
}

/// One withholding taken from a paycheck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionLine {
    /// Short code identifying the withholding, e.g. `"INSS"`.
    pub code: String,
    /// Amount withheld.
    pub amount: Decimal,
}

/// The result of a net salary calculation.
///
/// Monetary fields are exact decimals and serialise as decimal strings.
/// `net` has already been rounded to currency precision; the deduction
/// amounts are kept at their computed scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paycheck {
    /// The gross salary the calculation started from.
    pub gross: Decimal,
    /// The withholdings that were applied, in the order they were taken.
    pub deductions: Vec<DeductionLine>,
    /// Gross minus all deductions, rounded to two decimal places.
    pub net: Decimal,
}
