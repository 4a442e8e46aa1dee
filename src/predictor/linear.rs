//! Linear model pipelines with embedded preprocessing.
//!
//! Both shipped predictors are linear pipelines: ordinal encoding for
//! categorical columns, selective standard scaling, then a weighted sum.
//! The salary model exposes the raw regression value; the attrition model
//! pushes the score through a sigmoid and applies its fitted decision
//! threshold. Callers only ever see the [`Predictor`] interface; the
//! internal transform chain is opaque to them.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Attrition;
use crate::predictor::transform::{CategoryEncoder, SelectiveScaler};
use crate::predictor::{FeatureRow, FeatureValue, Predictor};

/// A fitted model artifact as deserialized from a YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSpec {
    /// Model name, used in error reporting.
    pub name: String,
    /// The exact column schema the model was fit against.
    pub columns: Vec<String>,
    /// Ordinal encoders for the categorical columns.
    #[serde(default)]
    pub encoders: Vec<CategoryEncoder>,
    /// Selective scaling parameters.
    #[serde(default)]
    pub scaling: SelectiveScaler,
    /// Regression intercept.
    pub intercept: f64,
    /// Per-column weights; columns absent from the table contribute zero.
    #[serde(default)]
    pub weights: HashMap<String, f64>,
    /// Decision threshold, present only on classifier artifacts.
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// A validated linear pipeline: schema check, encode, scale, weighted sum.
#[derive(Debug, Clone)]
pub struct LinearPipeline {
    name: String,
    columns: Vec<String>,
    encoders: HashMap<String, CategoryEncoder>,
    scaling: SelectiveScaler,
    intercept: f64,
    weights: HashMap<String, f64>,
}

impl LinearPipeline {
    /// Validates a parsed artifact and builds the pipeline.
    ///
    /// Rejects artifacts whose encoders, scaling parameters, or weights
    /// refer to columns outside the declared schema, and any non-finite or
    /// degenerate parameter.
    pub fn from_spec(spec: ModelSpec) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidModel {
            model: spec.name.clone(),
            message,
        };

        if spec.columns.is_empty() {
            return Err(invalid("column schema is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for column in &spec.columns {
            if !seen.insert(column.as_str()) {
                return Err(invalid(format!("duplicate column '{column}' in schema")));
            }
        }

        if !spec.intercept.is_finite() {
            return Err(invalid("intercept is not a finite number".to_string()));
        }

        for (column, weight) in &spec.weights {
            if !seen.contains(column.as_str()) {
                return Err(invalid(format!("weight refers to unknown column '{column}'")));
            }
            if !weight.is_finite() {
                return Err(invalid(format!(
                    "weight for column '{column}' is not a finite number"
                )));
            }
        }

        let mut encoders = HashMap::new();
        for encoder in spec.encoders {
            if !seen.contains(encoder.column.as_str()) {
                return Err(invalid(format!(
                    "encoder refers to unknown column '{}'",
                    encoder.column
                )));
            }
            if encoder.categories.is_empty() {
                return Err(invalid(format!(
                    "encoder for column '{}' has no categories",
                    encoder.column
                )));
            }
            if encoders.insert(encoder.column.clone(), encoder).is_some() {
                return Err(invalid("duplicate encoder column".to_string()));
            }
        }

        for (column, scaling) in spec.scaling.entries() {
            if !seen.contains(column) {
                return Err(invalid(format!(
                    "scaling refers to unknown column '{column}'"
                )));
            }
            if !scaling.mean.is_finite() || !scaling.std.is_finite() || scaling.std <= 0.0 {
                return Err(invalid(format!(
                    "scaling for column '{column}' is degenerate"
                )));
            }
        }

        Ok(Self {
            name: spec.name,
            columns: spec.columns,
            encoders,
            scaling: spec.scaling,
            intercept: spec.intercept,
            weights: spec.weights,
        })
    }

    /// Returns the model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column schema the model was fit against.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Checks that `row` carries exactly the fitted column set.
    fn check_schema(&self, row: &FeatureRow) -> EngineResult<()> {
        for column in &self.columns {
            if !row.contains(column) {
                return Err(self.failed(format!("input row is missing column '{column}'")));
            }
        }
        if row.len() != self.columns.len() {
            let expected: HashSet<&str> = self.columns.iter().map(String::as_str).collect();
            let extra = row
                .columns()
                .find(|column| !expected.contains(column))
                .unwrap_or("?");
            return Err(self.failed(format!("input row has unexpected column '{extra}'")));
        }
        Ok(())
    }

    /// Computes the linear score for one row.
    pub fn score(&self, row: &FeatureRow) -> EngineResult<f64> {
        self.check_schema(row)?;

        let mut total = self.intercept;
        for column in &self.columns {
            let value = match row.get(column) {
                Some(value) => value,
                None => return Err(self.failed(format!("input row is missing column '{column}'"))),
            };

            let numeric = match value {
                FeatureValue::Number(number) => {
                    if !number.is_finite() {
                        return Err(self.failed(format!(
                            "non-finite value in column '{column}'"
                        )));
                    }
                    *number
                }
                FeatureValue::Text(label) => match self.encoders.get(column) {
                    Some(encoder) => encoder.encode(label).ok_or_else(|| {
                        self.failed(format!("unseen category '{label}' in column '{column}'"))
                    })?,
                    None => {
                        return Err(self.failed(format!(
                            "no fitted encoding for text column '{column}'"
                        )));
                    }
                },
            };

            let scaled = self.scaling.transform(column, numeric);
            total += scaled * self.weights.get(column).copied().unwrap_or(0.0);
        }

        if !total.is_finite() {
            return Err(self.failed("inference produced a non-finite value".to_string()));
        }
        Ok(total)
    }

    fn failed(&self, message: String) -> EngineError {
        EngineError::PredictionFailed {
            model: self.name.clone(),
            message,
        }
    }
}

/// The monthly-salary regression model.
#[derive(Debug, Clone)]
pub struct SalaryModel {
    pipeline: LinearPipeline,
}

impl SalaryModel {
    /// Builds the salary model from a parsed artifact.
    ///
    /// A regression artifact must not carry a decision threshold.
    pub fn from_spec(spec: ModelSpec) -> EngineResult<Self> {
        if spec.threshold.is_some() {
            return Err(EngineError::InvalidModel {
                model: spec.name,
                message: "regression artifact must not carry a decision threshold".to_string(),
            });
        }
        Ok(Self {
            pipeline: LinearPipeline::from_spec(spec)?,
        })
    }

    /// Returns the model name.
    pub fn name(&self) -> &str {
        self.pipeline.name()
    }

    /// Returns the column schema the model was fit against.
    pub fn columns(&self) -> &[String] {
        self.pipeline.columns()
    }
}

impl Predictor for SalaryModel {
    type Output = f64;

    fn predict(&self, row: &FeatureRow) -> EngineResult<f64> {
        self.pipeline.score(row)
    }
}

/// The binary attrition classifier.
#[derive(Debug, Clone)]
pub struct AttritionModel {
    pipeline: LinearPipeline,
    threshold: f64,
}

impl AttritionModel {
    /// Builds the attrition model from a parsed artifact.
    ///
    /// A classifier artifact must carry a decision threshold in (0, 1).
    pub fn from_spec(spec: ModelSpec) -> EngineResult<Self> {
        let threshold = spec.threshold.ok_or_else(|| EngineError::InvalidModel {
            model: spec.name.clone(),
            message: "missing decision threshold".to_string(),
        })?;
        if !threshold.is_finite() || threshold <= 0.0 || threshold >= 1.0 {
            return Err(EngineError::InvalidModel {
                model: spec.name,
                message: format!("decision threshold must lie in (0, 1), got {threshold}"),
            });
        }
        Ok(Self {
            pipeline: LinearPipeline::from_spec(spec)?,
            threshold,
        })
    }

    /// Returns the model name.
    pub fn name(&self) -> &str {
        self.pipeline.name()
    }

    /// Returns the column schema the model was fit against.
    pub fn columns(&self) -> &[String] {
        self.pipeline.columns()
    }

    /// Returns the fitted decision threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Predictor for AttritionModel {
    type Output = Attrition;

    fn predict(&self, row: &FeatureRow) -> EngineResult<Attrition> {
        let score = self.pipeline.score(row)?;
        let probability = sigmoid(score);
        if probability >= self.threshold {
            Ok(Attrition::Yes)
        } else {
            Ok(Attrition::No)
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
