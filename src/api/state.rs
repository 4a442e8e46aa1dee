//! Application state for the prediction API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::predictor::ModelStore;

/// Shared application state.
///
/// Holds the loaded predictors behind an `Arc`: after the one-time load the
/// models are immutable, read-only resources, so concurrent handlers share
/// them without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The loaded predictors.
    models: Arc<ModelStore>,
}

impl AppState {
    /// Creates a new application state owning the given model store.
    pub fn new(models: ModelStore) -> Self {
        Self {
            models: Arc::new(models),
        }
    }

    /// Creates an application state over an already-shared model store,
    /// such as the one returned by [`ModelStore::shared`].
    pub fn from_shared(models: Arc<ModelStore>) -> Self {
        Self { models }
    }

    /// Returns a reference to the model store.
    pub fn models(&self) -> &ModelStore {
        &self.models
    }
}
