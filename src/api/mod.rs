//! HTTP API module for the prediction engine.
//!
//! This module provides the REST endpoint for running the salary,
//! attrition, and loss prediction pipeline.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EmployeeRequest;
pub use response::ApiError;
pub use state::AppState;
