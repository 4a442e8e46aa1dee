//! Financial loss estimation for a predicted departure.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};

/// Estimates the cost of losing an employee.
///
/// The estimate is a deterministic closed-form figure over four inputs:
///
/// ```text
/// loss = floor(salary * 3
///              + years_at_company * 10000
///              + performance_rating * 15000
///              + training_times_last_year * 5000)
/// ```
///
/// The total is truncated toward zero and clamped at 0, so the result is
/// always a non-negative whole currency amount. The salary is the raw
/// (unrounded) monthly prediction.
///
/// # Errors
///
/// Returns [`EngineError::LossComputation`] when `salary` is not a finite
/// number or the total exceeds the representable range. Neither is
/// expected in normal operation; the pipeline rejects a non-finite
/// salary at the predictor boundary.
///
/// # Examples
///
/// ```
/// use attrition_engine::pipeline::calculate_loss;
///
/// let loss = calculate_loss(50000.0, 5, 3, 2).unwrap();
/// assert_eq!(loss, 255_000);
/// ```
pub fn calculate_loss(
    salary: f64,
    years_at_company: u32,
    performance_rating: u32,
    training_times_last_year: u32,
) -> EngineResult<u64> {
    let salary = Decimal::from_f64_retain(salary).ok_or_else(|| EngineError::LossComputation {
        message: format!("salary must be a finite number, got {salary}"),
    })?;

    let overflow = || EngineError::LossComputation {
        message: "loss exceeds the representable range".to_string(),
    };

    let replacement_cost = salary.checked_mul(Decimal::from(3)).ok_or_else(overflow)?;
    let knowledge_loss = Decimal::from(years_at_company) * Decimal::from(10_000);
    let performance_loss = Decimal::from(performance_rating) * Decimal::from(15_000);
    let training_loss = Decimal::from(training_times_last_year) * Decimal::from(5_000);

    let total = replacement_cost
        .checked_add(knowledge_loss + performance_loss + training_loss)
        .ok_or_else(overflow)?
        .trunc();

    if total.is_sign_negative() {
        return Ok(0);
    }
    total.to_u64().ok_or_else(overflow)
}
