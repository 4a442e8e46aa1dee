//! Request types for the prediction API.
//!
//! This module defines the JSON request structure for the `/predict`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{
    BusinessTravel, Department, EducationField, EmployeeRecord, Gender, MaritalStatus, OverTime,
};

/// Request body for the `/predict` endpoint.
///
/// Carries exactly the 26 named employee attributes the predictors were
/// fit against; an unknown field is rejected at deserialization, and a
/// missing field is a deserialization error: the record either matches
/// the feature schema exactly or the request never reaches the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct EmployeeRequest {
    /// Age in years (18-60).
    pub age: u32,
    /// Business travel frequency.
    pub business_travel: BusinessTravel,
    /// Daily pay rate (103-1499).
    pub daily_rate: u32,
    /// Department.
    pub department: Department,
    /// Commute distance in kilometres (1-29).
    pub distance_from_home: u32,
    /// Education level (1-5).
    pub education: u32,
    /// Field of education.
    pub education_field: EducationField,
    /// Gender.
    pub gender: Gender,
    /// Job level (1-5).
    pub job_level: u32,
    /// Job role (e.g. "Sales Executive").
    pub job_role: String,
    /// Job satisfaction score (1-4).
    pub job_satisfaction: u32,
    /// Marital status.
    pub marital_status: MaritalStatus,
    /// Number of companies previously worked at (0-9).
    pub num_companies_worked: u32,
    /// Whether the employee works overtime.
    pub over_time: OverTime,
    /// Performance rating (1-4).
    pub performance_rating: u32,
    /// Relationship satisfaction score (1-4).
    pub relationship_satisfaction: u32,
    /// Stock option level (0-3).
    pub stock_option_level: u32,
    /// Total years in the workforce (0-40).
    pub total_working_years: u32,
    /// Training sessions attended last year (0-6).
    pub training_times_last_year: u32,
    /// Work-life balance score (1-4).
    pub work_life_balance: u32,
    /// Years at this company (0-40).
    pub years_at_company: u32,
    /// Years in the current role (0-18).
    pub years_in_current_role: u32,
    /// Years since the last promotion (0-15).
    pub years_since_last_promotion: u32,
    /// Years with the current manager (0-17).
    pub years_with_curr_manager: u32,
    /// Environment satisfaction score (1-4).
    pub environment_satisfaction: u32,
    /// Job involvement score (1-4).
    pub job_involvement: u32,
}

impl From<EmployeeRequest> for EmployeeRecord {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeRecord {
            age: req.age,
            business_travel: req.business_travel,
            daily_rate: req.daily_rate,
            department: req.department,
            distance_from_home: req.distance_from_home,
            education: req.education,
            education_field: req.education_field,
            gender: req.gender,
            job_level: req.job_level,
            job_role: req.job_role,
            job_satisfaction: req.job_satisfaction,
            marital_status: req.marital_status,
            num_companies_worked: req.num_companies_worked,
            over_time: req.over_time,
            performance_rating: req.performance_rating,
            relationship_satisfaction: req.relationship_satisfaction,
            stock_option_level: req.stock_option_level,
            total_working_years: req.total_working_years,
            training_times_last_year: req.training_times_last_year,
            work_life_balance: req.work_life_balance,
            years_at_company: req.years_at_company,
            years_in_current_role: req.years_in_current_role,
            years_since_last_promotion: req.years_since_last_promotion,
            years_with_curr_manager: req.years_with_curr_manager,
            environment_satisfaction: req.environment_satisfaction,
            job_involvement: req.job_involvement,
        }
    }
}
