//! Employee record augmented with the predicted monthly income.

use crate::models::EmployeeRecord;
use crate::predictor::{FeatureRow, FeatureValue};

/// The derived feature column injected between the two model inferences.
pub const MONTHLY_INCOME_COLUMN: &str = "MonthlyIncome";

/// An [`EmployeeRecord`] extended with the salary prediction.
///
/// The attrition classifier was fit against the employee schema plus a
/// `MonthlyIncome` column, so the raw (unrounded) salary prediction must be
/// injected before the second inference. Created transiently per request
/// and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedRecord {
    employee: EmployeeRecord,
    monthly_income: f64,
}

impl AugmentedRecord {
    /// Attaches a predicted monthly income to an employee record.
    pub fn new(employee: EmployeeRecord, monthly_income: f64) -> Self {
        Self {
            employee,
            monthly_income,
        }
    }

    /// Returns the underlying employee record.
    pub fn employee(&self) -> &EmployeeRecord {
        &self.employee
    }

    /// Returns the injected monthly income.
    pub fn monthly_income(&self) -> f64 {
        self.monthly_income
    }

    /// Builds the 27-column feature row consumed by the attrition predictor.
    ///
    /// The row is the employee's feature row with exactly one additional
    /// column, `MonthlyIncome`; the original 26 columns are unchanged.
    pub fn feature_row(&self) -> FeatureRow {
        let mut row = self.employee.feature_row();
        row.insert(MONTHLY_INCOME_COLUMN, FeatureValue::number(self.monthly_income));
        row
    }
}
