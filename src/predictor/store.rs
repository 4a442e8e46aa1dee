//! Model artifact loading and the process-wide model cache.
//!
//! The two fitted predictors are loaded from YAML artifacts in a models
//! directory and held as immutable, read-only resources for the lifetime
//! of the process. [`ModelStore::shared`] provides the one-time-load
//! cache; predictors hold no per-call mutable state, so a single store is
//! safe for concurrent use across requests.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{EngineError, EngineResult};
use crate::models::{FEATURE_COLUMNS, MONTHLY_INCOME_COLUMN};
use crate::predictor::linear::{AttritionModel, ModelSpec, SalaryModel};

/// Default directory holding the model artifacts.
pub const DEFAULT_MODELS_DIR: &str = "./models";

/// File name of the salary regression artifact.
pub const SALARY_MODEL_FILE: &str = "monthly_income.yaml";

/// File name of the attrition classifier artifact.
pub const ATTRITION_MODEL_FILE: &str = "attrition.yaml";

static SHARED_STORE: OnceLock<Arc<ModelStore>> = OnceLock::new();

/// The two loaded predictors.
///
/// # Example
///
/// ```no_run
/// use attrition_engine::predictor::ModelStore;
///
/// let store = ModelStore::load("./models")?;
/// println!("salary model: {}", store.salary().name());
/// # Ok::<(), attrition_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ModelStore {
    salary: SalaryModel,
    attrition: AttritionModel,
}

impl ModelStore {
    /// Builds a store from two already-constructed models, checking their
    /// schemas against the employee feature schema.
    ///
    /// The salary model must be fit against exactly the 26 employee
    /// columns; the attrition model against those plus `MonthlyIncome`.
    pub fn new(salary: SalaryModel, attrition: AttritionModel) -> EngineResult<Self> {
        let employee_columns: HashSet<&str> = FEATURE_COLUMNS.iter().copied().collect();
        check_schema(salary.name(), salary.columns(), &employee_columns)?;

        let mut augmented_columns = employee_columns;
        augmented_columns.insert(MONTHLY_INCOME_COLUMN);
        check_schema(attrition.name(), attrition.columns(), &augmented_columns)?;

        Ok(Self { salary, attrition })
    }

    /// Loads both model artifacts from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `dir` - Path to the models directory (e.g. "./models")
    ///
    /// # Returns
    ///
    /// Returns a `ModelStore` on success, or an error if an artifact file
    /// is missing, fails to parse, or carries an invalid parameter set.
    pub fn load<P: AsRef<Path>>(dir: P) -> EngineResult<Self> {
        let dir = dir.as_ref();

        let salary_spec = Self::load_yaml::<ModelSpec>(&dir.join(SALARY_MODEL_FILE))?;
        let attrition_spec = Self::load_yaml::<ModelSpec>(&dir.join(ATTRITION_MODEL_FILE))?;

        Self::new(
            SalaryModel::from_spec(salary_spec)?,
            AttritionModel::from_spec(attrition_spec)?,
        )
    }

    /// Returns the process-wide shared store, loading it on first use.
    ///
    /// The first successful call loads the artifacts from `dir` and caches
    /// the store for the lifetime of the process; later calls return the
    /// same `Arc` regardless of `dir`. Loading is idempotent: concurrent
    /// first calls may each load, but only one result is kept. A failed
    /// load is not cached, so a later call can retry.
    pub fn shared<P: AsRef<Path>>(dir: P) -> EngineResult<Arc<Self>> {
        if let Some(store) = SHARED_STORE.get() {
            return Ok(Arc::clone(store));
        }
        let loaded = Arc::new(Self::load(dir)?);
        Ok(Arc::clone(SHARED_STORE.get_or_init(|| loaded)))
    }

    /// Loads and parses a YAML artifact file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ModelNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ModelParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the salary regression model.
    pub fn salary(&self) -> &SalaryModel {
        &self.salary
    }

    /// Returns the attrition classifier.
    pub fn attrition(&self) -> &AttritionModel {
        &self.attrition
    }
}

/// Checks a model's fitted columns against the expected schema.
fn check_schema(model: &str, columns: &[String], expected: &HashSet<&str>) -> EngineResult<()> {
    for column in columns {
        if !expected.contains(column.as_str()) {
            return Err(EngineError::InvalidModel {
                model: model.to_string(),
                message: format!("fit against unknown feature column '{column}'"),
            });
        }
    }
    if columns.len() != expected.len() {
        let present: HashSet<&str> = columns.iter().map(String::as_str).collect();
        let missing = expected
            .iter()
            .find(|column| !present.contains(**column))
            .copied()
            .unwrap_or("?");
        return Err(EngineError::InvalidModel {
            model: model.to_string(),
            message: format!("missing feature column '{missing}'"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::Predictor;
    use crate::predictor::row::{FeatureRow, FeatureValue};
    use std::collections::HashMap;

    fn models_dir() -> &'static str {
        DEFAULT_MODELS_DIR
    }

    #[test]
    fn test_load_shipped_artifacts() {
        let store = ModelStore::load(models_dir());
        assert!(store.is_ok(), "Failed to load models: {:?}", store.err());

        let store = store.unwrap();
        assert_eq!(store.salary().name(), "monthly_income");
        assert_eq!(store.attrition().name(), "attrition");
    }

    #[test]
    fn test_loaded_schemas_match_employee_schema() {
        let store = ModelStore::load(models_dir()).unwrap();

        assert_eq!(store.salary().columns().len(), FEATURE_COLUMNS.len());
        assert_eq!(
            store.attrition().columns().len(),
            FEATURE_COLUMNS.len() + 1
        );
        assert!(
            store
                .attrition()
                .columns()
                .iter()
                .any(|c| c == MONTHLY_INCOME_COLUMN)
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ModelStore::load("/nonexistent/path");
        assert!(result.is_err());

        match result.unwrap_err() {
            EngineError::ModelNotFound { path } => {
                assert!(path.contains(SALARY_MODEL_FILE));
            }
            other => panic!("Expected ModelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let first = ModelStore::shared(models_dir()).unwrap();
        let second = ModelStore::shared(models_dir()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_new_rejects_wrong_salary_schema() {
        let store = ModelStore::load(models_dir()).unwrap();

        let spec = ModelSpec {
            name: "tiny".to_string(),
            columns: vec!["Age".to_string()],
            encoders: vec![],
            scaling: Default::default(),
            intercept: 0.0,
            weights: HashMap::from([("Age".to_string(), 1.0)]),
            threshold: None,
        };
        let tiny = SalaryModel::from_spec(spec).unwrap();

        match ModelStore::new(tiny, store.attrition().clone()).unwrap_err() {
            EngineError::InvalidModel { model, message } => {
                assert_eq!(model, "tiny");
                assert!(message.contains("missing feature column"));
            }
            other => panic!("Expected InvalidModel, got {:?}", other),
        }
    }

    #[test]
    fn test_loaded_salary_model_predicts_a_finite_value() {
        let store = ModelStore::load(models_dir()).unwrap();

        let mut row = FeatureRow::new();
        for column in FEATURE_COLUMNS {
            let value = match column {
                "BusinessTravel" => FeatureValue::text("Travel_Rarely"),
                "Department" => FeatureValue::text("Sales"),
                "EducationField" => FeatureValue::text("Life Sciences"),
                "Gender" => FeatureValue::text("Male"),
                "JobRole" => FeatureValue::text("Sales Executive"),
                "MaritalStatus" => FeatureValue::text("Single"),
                "OverTime" => FeatureValue::text("No"),
                _ => FeatureValue::number(3.0),
            };
            row.insert(column, value);
        }

        let salary = store.salary().predict(&row).unwrap();
        assert!(salary.is_finite());
    }
}
