//! Column-level preprocessing embedded in the predictors.
//!
//! A fitted pipeline carries its own preprocessing: ordinal encodings for
//! categorical columns and standard scaling applied to a subset of numeric
//! columns. Both are internal to the predictor that owns them; the
//! prediction pipeline never sees encoded or scaled values.

use std::collections::HashMap;

use serde::Deserialize;

/// An ordinal encoding fitted for one categorical column.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEncoder {
    /// The column this encoder applies to.
    pub column: String,
    /// Mapping from raw category label to its fitted numeric code.
    pub categories: HashMap<String, f64>,
}

impl CategoryEncoder {
    /// Encodes a raw label, or `None` when the category was not seen
    /// during fitting.
    pub fn encode(&self, label: &str) -> Option<f64> {
        self.categories.get(label).copied()
    }
}

/// Fitted scaling parameters for one column.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnScaling {
    /// Mean observed during fitting.
    pub mean: f64,
    /// Standard deviation observed during fitting.
    pub std: f64,
}

/// Standard scaling applied only to a configured subset of columns.
///
/// Columns without fitted parameters pass through unchanged, so a scaler
/// can sit in front of a model that mixes scaled and raw features.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SelectiveScaler {
    columns: HashMap<String, ColumnScaling>,
}

impl SelectiveScaler {
    /// Creates a scaler from fitted per-column parameters.
    pub fn new(columns: HashMap<String, ColumnScaling>) -> Self {
        Self { columns }
    }

    /// Returns true if `column` has fitted scaling parameters.
    pub fn scales(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Iterates over the columns this scaler is fitted for.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Returns the fitted parameters for `column`, if any.
    pub fn scaling(&self, column: &str) -> Option<&ColumnScaling> {
        self.columns.get(column)
    }

    /// Iterates over the fitted columns together with their parameters.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ColumnScaling)> {
        self.columns
            .iter()
            .map(|(column, scaling)| (column.as_str(), scaling))
    }

    /// Transforms one value: `(value - mean) / std` for fitted columns,
    /// pass-through for everything else.
    pub fn transform(&self, column: &str, value: f64) -> f64 {
        match self.columns.get(column) {
            Some(scaling) => (value - scaling.mean) / scaling.std,
            None => value,
        }
    }
}
