//! Travel cost calculator pricing engine.
//!
//! A small Axum JSON service: the form shell submits trip parameters
//! (destination, age group, activity, group composition, nights) and gets
//! back a cost estimate bounded to the displayable band. Two interchangeable
//! strategies - a deterministic multiplicative formula and a trained
//! regression artifact - are selected once at startup.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod pricing;

use pricing::engine::CostEstimator;

/// Shared application state.
///
/// Read-only after startup: the estimator holds the immutable weight tables
/// or the loaded model, and nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<CostEstimator>,
}

impl AppState {
    pub fn new(estimator: CostEstimator) -> Self {
        Self {
            estimator: Arc::new(estimator),
        }
    }
}
