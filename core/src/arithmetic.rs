//! Arithmetic on two `f64` operands.
//!
//! Plain operations follow IEEE-754: dividing by zero yields an infinity or
//! NaN instead of an error. [`checked_div`] is the variant for callers that
//! want a defined error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`; `b == 0.0` gives `±inf` or `NaN`.
pub fn div(a: f64, b: f64) -> f64 {
    a / b
}

/// Divide, rejecting a zero divisor and non-finite results
pub fn checked_div(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(FixtureError::division_by_zero(a));
    }

    let quotient = a / b;
    if !quotient.is_finite() {
        return Err(FixtureError::non_finite(quotient));
    }

    Ok(quotient)
}

/// The four binary operations, addressable by name
#[derive(Debug, Clone, Copy, Hash, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// Apply the operation to a numeric pair
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => add(a, b),
            Operation::Sub => sub(a, b),
            Operation::Mul => mul(a, b),
            Operation::Div => div(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Operation {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "sub" => Ok(Operation::Sub),
            "mul" => Ok(Operation::Mul),
            "div" => Ok(Operation::Div),
            other => Err(FixtureError::Validation(format!(
                "Unknown operation '{other}'. Must be one of: add, sub, mul, div"
            ))),
        }
    }
}
