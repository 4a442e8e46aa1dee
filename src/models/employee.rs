//! Employee record and related types.
//!
//! This module defines the [`EmployeeRecord`] struct and the enumerations
//! for its categorical attributes, matching the feature schema the
//! predictive models were fit against.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::predictor::{FeatureRow, FeatureValue};

/// The 26 feature columns the predictors were fit against, in schema order.
///
/// Every [`EmployeeRecord`] produces a feature row with exactly these
/// columns; an extra or missing column is a contract violation at the
/// predictor boundary.
pub const FEATURE_COLUMNS: [&str; 26] = [
    "Age",
    "BusinessTravel",
    "DailyRate",
    "Department",
    "DistanceFromHome",
    "Education",
    "EducationField",
    "Gender",
    "JobLevel",
    "JobRole",
    "JobSatisfaction",
    "MaritalStatus",
    "NumCompaniesWorked",
    "OverTime",
    "PerformanceRating",
    "RelationshipSatisfaction",
    "StockOptionLevel",
    "TotalWorkingYears",
    "TrainingTimesLastYear",
    "WorkLifeBalance",
    "YearsAtCompany",
    "YearsInCurrentRole",
    "YearsSinceLastPromotion",
    "YearsWithCurrManager",
    "EnvironmentSatisfaction",
    "JobInvolvement",
];

/// How often an employee travels for business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessTravel {
    /// Occasional business travel.
    #[serde(rename = "Travel_Rarely")]
    TravelRarely,
    /// Frequent business travel.
    #[serde(rename = "Travel_Frequently")]
    TravelFrequently,
    /// No business travel.
    #[serde(rename = "Non-Travel")]
    NonTravel,
}

impl BusinessTravel {
    /// Returns the dataset label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessTravel::TravelRarely => "Travel_Rarely",
            BusinessTravel::TravelFrequently => "Travel_Frequently",
            BusinessTravel::NonTravel => "Non-Travel",
        }
    }
}

/// The department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    /// Sales department.
    Sales,
    /// Research & Development department.
    #[serde(rename = "Research & Development")]
    ResearchAndDevelopment,
    /// Human Resources department.
    #[serde(rename = "Human Resources")]
    HumanResources,
}

impl Department {
    /// Returns the dataset label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::ResearchAndDevelopment => "Research & Development",
            Department::HumanResources => "Human Resources",
        }
    }
}

/// The field an employee was educated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationField {
    /// Life sciences.
    #[serde(rename = "Life Sciences")]
    LifeSciences,
    /// Medical studies.
    Medical,
    /// Marketing.
    Marketing,
    /// A technical degree.
    #[serde(rename = "Technical Degree")]
    TechnicalDegree,
    /// Any other field.
    Other,
}

impl EducationField {
    /// Returns the dataset label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationField::LifeSciences => "Life Sciences",
            EducationField::Medical => "Medical",
            EducationField::Marketing => "Marketing",
            EducationField::TechnicalDegree => "Technical Degree",
            EducationField::Other => "Other",
        }
    }
}

/// Employee gender as recorded in the source dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Returns the dataset label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Marital status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    /// Single.
    Single,
    /// Married.
    Married,
    /// Divorced.
    Divorced,
}

impl MaritalStatus {
    /// Returns the dataset label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
        }
    }
}

/// Whether an employee regularly works overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverTime {
    /// Works overtime.
    Yes,
    /// Does not work overtime.
    No,
}

impl OverTime {
    /// Returns the dataset label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverTime::Yes => "Yes",
            OverTime::No => "No",
        }
    }
}

/// A single employee's attributes, matching the schema the predictors were
/// fit against.
///
/// Field names serialize in the dataset's PascalCase form (e.g.
/// `YearsAtCompany`). Integer fields carry bounded domains checked by
/// [`EmployeeRecord::validate`]; categorical fields are closed enums, except
/// `JobRole` which is collected as free text; membership in the fitted
/// category set is the salary predictor's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeRecord {
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

impl EmployeeRecord {
    /// Validates every field against its declared domain.
    ///
    /// Returns `Ok(())` when all values are in range, or an
    /// [`EngineError::InvalidField`] naming the first offending field.
    /// Validation runs before any predictor is invoked, so an out-of-domain
    /// value never reaches a model.
    pub fn validate(&self) -> EngineResult<()> {
        check_range("Age", self.age, 18, 60)?;
        check_range("DailyRate", self.daily_rate, 103, 1499)?;
        check_range("DistanceFromHome", self.distance_from_home, 1, 29)?;
        check_range("Education", self.education, 1, 5)?;
        check_range("JobLevel", self.job_level, 1, 5)?;
        check_range("JobSatisfaction", self.job_satisfaction, 1, 4)?;
        check_range("NumCompaniesWorked", self.num_companies_worked, 0, 9)?;
        check_range("PerformanceRating", self.performance_rating, 1, 4)?;
        check_range(
            "RelationshipSatisfaction",
            self.relationship_satisfaction,
            1,
            4,
        )?;
        check_range("StockOptionLevel", self.stock_option_level, 0, 3)?;
        check_range("TotalWorkingYears", self.total_working_years, 0, 40)?;
        check_range(
            "TrainingTimesLastYear",
            self.training_times_last_year,
            0,
            6,
        )?;
        check_range("WorkLifeBalance", self.work_life_balance, 1, 4)?;
        check_range("YearsAtCompany", self.years_at_company, 0, 40)?;
        check_range("YearsInCurrentRole", self.years_in_current_role, 0, 18)?;
        check_range(
            "YearsSinceLastPromotion",
            self.years_since_last_promotion,
            0,
            15,
        )?;
        check_range(
            "YearsWithCurrManager",
            self.years_with_curr_manager,
            0,
            17,
        )?;
        check_range(
            "EnvironmentSatisfaction",
            self.environment_satisfaction,
            1,
            4,
        )?;
        check_range("JobInvolvement", self.job_involvement, 1, 4)?;

        if self.job_role.trim().is_empty() {
            return Err(EngineError::InvalidField {
                field: "JobRole".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Builds the 26-column feature row consumed by the salary predictor.
    ///
    /// Numeric attributes become [`FeatureValue::Number`]; categorical
    /// attributes become [`FeatureValue::Text`] carrying the dataset label.
    /// Column order is irrelevant; the row is named, not positional.
    pub fn feature_row(&self) -> FeatureRow {
        let mut row = FeatureRow::new();
        row.insert("Age", FeatureValue::number(self.age));
        row.insert("BusinessTravel", FeatureValue::text(self.business_travel.as_str()));
        row.insert("DailyRate", FeatureValue::number(self.daily_rate));
        row.insert("Department", FeatureValue::text(self.department.as_str()));
        row.insert("DistanceFromHome", FeatureValue::number(self.distance_from_home));
        row.insert("Education", FeatureValue::number(self.education));
        row.insert("EducationField", FeatureValue::text(self.education_field.as_str()));
        row.insert("Gender", FeatureValue::text(self.gender.as_str()));
        row.insert("JobLevel", FeatureValue::number(self.job_level));
        row.insert("JobRole", FeatureValue::text(self.job_role.clone()));
        row.insert("JobSatisfaction", FeatureValue::number(self.job_satisfaction));
        row.insert("MaritalStatus", FeatureValue::text(self.marital_status.as_str()));
        row.insert("NumCompaniesWorked", FeatureValue::number(self.num_companies_worked));
        row.insert("OverTime", FeatureValue::text(self.over_time.as_str()));
        row.insert("PerformanceRating", FeatureValue::number(self.performance_rating));
        row.insert(
            "RelationshipSatisfaction",
            FeatureValue::number(self.relationship_satisfaction),
        );
        row.insert("StockOptionLevel", FeatureValue::number(self.stock_option_level));
        row.insert("TotalWorkingYears", FeatureValue::number(self.total_working_years));
        row.insert(
            "TrainingTimesLastYear",
            FeatureValue::number(self.training_times_last_year),
        );
        row.insert("WorkLifeBalance", FeatureValue::number(self.work_life_balance));
        row.insert("YearsAtCompany", FeatureValue::number(self.years_at_company));
        row.insert("YearsInCurrentRole", FeatureValue::number(self.years_in_current_role));
        row.insert(
            "YearsSinceLastPromotion",
            FeatureValue::number(self.years_since_last_promotion),
        );
        row.insert(
            "YearsWithCurrManager",
            FeatureValue::number(self.years_with_curr_manager),
        );
        row.insert(
            "EnvironmentSatisfaction",
            FeatureValue::number(self.environment_satisfaction),
        );
        row.insert("JobInvolvement", FeatureValue::number(self.job_involvement));
        row
    }
}

/// Checks that `value` lies in `min..=max`, naming `field` on failure.
fn check_range(field: &str, value: u32, min: u32, max: u32) -> EngineResult<()> {
    if value < min || value > max {
        return Err(EngineError::InvalidField {
            field: field.to_string(),
            message: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}
