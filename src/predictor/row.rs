//! Named tabular rows exchanged with the predictors.

use std::collections::BTreeMap;

/// A single cell in a feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// A numeric feature.
    Number(f64),
    /// A categorical feature carrying its raw dataset label.
    Text(String),
}

impl FeatureValue {
    /// Creates a numeric feature value.
    pub fn number(value: impl Into<f64>) -> Self {
        FeatureValue::Number(value.into())
    }

    /// Creates a categorical feature value.
    pub fn text(value: impl Into<String>) -> Self {
        FeatureValue::Text(value.into())
    }

    /// Returns the numeric value, if this is a [`FeatureValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(value) => Some(*value),
            FeatureValue::Text(_) => None,
        }
    }

    /// Returns the label, if this is a [`FeatureValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Number(_) => None,
            FeatureValue::Text(value) => Some(value),
        }
    }
}

/// A single-row tabular record with named columns.
///
/// This is the boundary type every predictor consumes: a named,
/// order-irrelevant mapping from column name to value. Predictors check the
/// column set against their fitted schema, so an extra or missing column
/// is an inference failure, not a silent coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRow {
    values: BTreeMap<String, FeatureValue>,
}

impl FeatureRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column's value, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: FeatureValue) {
        self.values.insert(column.into(), value);
    }

    /// Returns a column's value, if present.
    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.values.get(column)
    }

    /// Returns true if the row has a value for `column`.
    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Returns the number of columns in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the column names in the row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
