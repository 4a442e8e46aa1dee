//! Core data models for the prediction engine.
//!
//! This module contains all the domain models used throughout the engine.

mod augmented;
mod employee;
mod prediction;

pub use augmented::{AugmentedRecord, MONTHLY_INCOME_COLUMN};
pub use employee::{
    BusinessTravel, Department, EducationField, EmployeeRecord, FEATURE_COLUMNS, Gender,
    MaritalStatus, OverTime,
};
pub use prediction::{Attrition, PredictionResult};
