//! Prediction result types.

use serde::{Deserialize, Serialize};

/// Binary attrition outcome: whether an employee is predicted to leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attrition {
    /// The employee is predicted to leave.
    Yes,
    /// The employee is predicted to stay.
    No,
}

impl Attrition {
    /// Returns true when the employee is predicted to leave.
    pub fn will_leave(&self) -> bool {
        matches!(self, Attrition::Yes)
    }
}

/// The combined output of the prediction pipeline.
///
/// Owned solely by the caller of the pipeline and immutable after
/// construction. `predicted_salary` is rounded to two decimal places at
/// this boundary only; the raw value feeds the attrition model and the
/// loss formula. `estimated_loss` is 0 whenever `attrition` is
/// [`Attrition::No`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted monthly salary, rounded to two decimal places.
    pub predicted_salary: f64,
    /// Whether the employee is predicted to leave.
    pub attrition: Attrition,
    /// Estimated cost of losing the employee, in whole currency units.
    pub estimated_loss: u64,
}
