//! Error types for the prediction engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during prediction.

use thiserror::Error;

/// The main error type for the prediction engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attrition_engine::error::EngineError;
///
/// let error = EngineError::ModelNotFound {
///     path: "/missing/model.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Model file not found: /missing/model.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Model artifact file was not found at the specified path.
    #[error("Model file not found: {path}")]
    ModelNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Model artifact file could not be parsed.
    #[error("Failed to parse model file '{path}': {message}")]
    ModelParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A model artifact parsed but contained inconsistent parameters.
    #[error("Invalid model '{model}': {message}")]
    InvalidModel {
        /// The name of the invalid model.
        model: String,
        /// A description of what made the model invalid.
        message: String,
    },

    /// An employee record field was outside its declared domain.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidField {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A model inference call failed.
    #[error("Prediction failed in model '{model}': {message}")]
    PredictionFailed {
        /// The name of the model that failed.
        model: String,
        /// A description of the inference failure.
        message: String,
    },

    /// The loss formula could not produce a value.
    #[error("Loss computation error: {message}")]
    LossComputation {
        /// A description of the loss computation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_displays_path() {
        let error = EngineError::ModelNotFound {
            path: "/missing/model.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Model file not found: /missing/model.yaml"
        );
    }

    #[test]
    fn test_model_parse_error_displays_path_and_message() {
        let error = EngineError::ModelParseError {
            path: "/models/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse model file '/models/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_model_displays_name_and_message() {
        let error = EngineError::InvalidModel {
            model: "attrition".to_string(),
            message: "missing decision threshold".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid model 'attrition': missing decision threshold"
        );
    }

    #[test]
    fn test_invalid_field_displays_field_and_message() {
        let error = EngineError::InvalidField {
            field: "Age".to_string(),
            message: "must be between 18 and 60, got 17".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'Age': must be between 18 and 60, got 17"
        );
    }

    #[test]
    fn test_prediction_failed_displays_model_and_message() {
        let error = EngineError::PredictionFailed {
            model: "monthly_income".to_string(),
            message: "unseen category 'Astronaut' in column 'JobRole'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Prediction failed in model 'monthly_income': unseen category 'Astronaut' in column 'JobRole'"
        );
    }

    #[test]
    fn test_loss_computation_displays_message() {
        let error = EngineError::LossComputation {
            message: "salary must be a finite number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Loss computation error: salary must be a finite number"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_model_not_found() -> EngineResult<()> {
            Err(EngineError::ModelNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_model_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
