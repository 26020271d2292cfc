//! Summary statistics over an ordered sequence of numbers.
//!
//! Filters keep the original relative order of the elements they select.
//! Zero is neither positive nor negative; NaN matches no filter at all.

use serde::{Deserialize, Serialize};

/// Total of all elements, `0.0` for an empty sequence
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Elements strictly greater than zero
pub fn positive(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| *v > 0.0).collect()
}

/// Elements strictly less than zero
pub fn negative(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| *v < 0.0).collect()
}

/// Elements equal to zero (either sign)
pub fn zeros(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| *v == 0.0).collect()
}

/// All statistics of one sequence, computed together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Summary {
    pub sum: f64,
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
    pub zeros: Vec<f64>,
}

impl Summary {
    pub fn of(values: &[f64]) -> Self {
        Self {
            sum: sum(values),
            positive: positive(values),
            negative: negative(values),
            zeros: zeros(values),
        }
    }
}
