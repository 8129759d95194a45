//! Pricing engine module for the travel cost calculator.
//!
//! Computes bounded trip cost estimates from form submissions. This module
//! is called by the form shell via HTTP/JSON; the shell owns all rendering
//! and widget concerns.

pub mod calculators;
pub mod engine;
pub mod model;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::round_money;
pub use engine::{CostEstimator, PricingError};
pub use models::{Activity, AgeGroup, Country, EstimatedCost, TripRequest, UnknownCategory};
pub use routes::router;
