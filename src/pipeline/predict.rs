//! The prediction-and-loss pipeline.
//!
//! One operation, [`predict`]: validate the record, run the salary
//! regression, inject the prediction as the `MonthlyIncome` feature, run
//! the attrition classifier, and (only for predicted leavers) apply the
//! loss formula. Any failure aborts the request; no partial result is
//! ever returned, and nothing is retried since inference is a pure
//! function of the loaded models and the record.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::EngineResult;
use crate::models::{Attrition, AugmentedRecord, EmployeeRecord, PredictionResult};
use crate::pipeline::loss::calculate_loss;
use crate::predictor::{ModelStore, Predictor};

/// Runs the full prediction pipeline for one employee record.
///
/// # Arguments
///
/// * `record` - The employee record to predict for
/// * `models` - The loaded salary and attrition models
///
/// # Returns
///
/// Returns a [`PredictionResult`] with the salary rounded to two decimal
/// places, the attrition label, and the estimated loss (0 for predicted
/// stayers). Fails with a schema error before any inference runs when a
/// field is out of domain, or with a predictor error when an inference
/// cannot be computed.
pub fn predict(record: &EmployeeRecord, models: &ModelStore) -> EngineResult<PredictionResult> {
    record.validate()?;

    let salary = models.salary().predict(&record.feature_row())?;

    // The attrition model was fit with the raw salary prediction as a
    // feature; it must see the unrounded value.
    let augmented = AugmentedRecord::new(record.clone(), salary);
    let attrition = models.attrition().predict(&augmented.feature_row())?;

    let estimated_loss = match attrition {
        Attrition::Yes => calculate_loss(
            salary,
            record.years_at_company,
            record.performance_rating,
            record.training_times_last_year,
        )?,
        Attrition::No => 0,
    };

    Ok(PredictionResult {
        predicted_salary: round_to_cents(salary),
        attrition,
        estimated_loss,
    })
}

/// Rounds a salary to two decimal places for the response boundary.
///
/// Internal consumers (the attrition model, the loss formula) always see
/// the raw value; only the returned result is rounded.
fn round_to_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .and_then(|d| d.round_dp(2).to_f64())
        .unwrap_or(value)
}
