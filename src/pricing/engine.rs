//! Strategy selection and the single estimate entry point.
//!
//! The strategy is picked once at startup (build/deploy time), never per
//! request. Both strategies route their raw result through the same bounds
//! policy so callers observe one output contract.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use tracing::info;

use crate::pricing::calculators::{clamp_to_band, formula_raw_cost};
use crate::pricing::model::{load_cost_model, CostModel, FeatureVector};
use crate::pricing::models::{EstimatedCost, TripRequest};

/// Pricing computation error types
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// The trained artifact could not be loaded at startup. Fatal for the
    /// model strategy; the deployer must fall back to the formula strategy.
    #[error("cost model unavailable at '{path}': {source}")]
    ModelUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A numeric minimum the form shell should have enforced.
    #[error("invalid trip request: {message}")]
    InvalidRequest { message: String },

    /// A model prediction that is not a finite number. Treated like an
    /// incompatible artifact rather than priced.
    #[error("cost model produced a non-finite prediction: {value}")]
    NonFinitePrediction { value: f64 },
}

/// Cost estimator holding the strategy selected at startup.
#[derive(Debug)]
pub enum CostEstimator {
    /// Deterministic multiplicative formula over fixed weight tables.
    Formula,
    /// Inference against an externally trained regression artifact.
    Model(CostModel),
}

impl CostEstimator {
    /// Build the formula-strategy estimator.
    pub fn formula() -> Self {
        CostEstimator::Formula
    }

    /// Build the model-strategy estimator by loading the artifact once.
    pub fn from_artifact(path: &Path) -> Result<Self, PricingError> {
        let model = load_cost_model(path).map_err(|source| PricingError::ModelUnavailable {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "loaded trained cost model");
        Ok(CostEstimator::Model(model))
    }

    pub fn strategy_name(&self) -> &'static str {
        match self {
            CostEstimator::Formula => "formula",
            CostEstimator::Model(_) => "model",
        }
    }

    /// Estimate the trip cost, bounded to the displayable band.
    pub fn estimate(&self, trip: &TripRequest) -> Result<EstimatedCost, PricingError> {
        if trip.nights_stayed < 1 {
            return Err(PricingError::InvalidRequest {
                message: "nights_stayed must be at least 1".to_string(),
            });
        }

        let raw_cost = match self {
            CostEstimator::Formula => formula_raw_cost(trip),
            CostEstimator::Model(model) => {
                let predicted = model.predict(&FeatureVector::from_trip(trip));
                if !predicted.is_finite() {
                    return Err(PricingError::NonFinitePrediction { value: predicted });
                }
                // Out-of-range f64 falls to zero and is caught by the floor
                Decimal::from_f64(predicted).unwrap_or(Decimal::ZERO)
            }
        };

        Ok(clamp_to_band(raw_cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{Activity, AgeGroup, Country};

    fn trip(
        country: Country,
        age_group: AgeGroup,
        activity: Activity,
        nights_stayed: u32,
        male_count: u32,
        female_count: u32,
    ) -> TripRequest {
        TripRequest {
            country,
            age_group,
            activity,
            nights_stayed,
            male_count,
            female_count,
        }
    }

    // ==================== formula strategy tests ====================

    #[test]
    fn test_formula_estimate_kenya_adult_beach() {
        let estimator = CostEstimator::formula();
        let cost = estimator
            .estimate(&trip(
                Country::Kenya,
                AgeGroup::Adult,
                Activity::Beach,
                3,
                1,
                1,
            ))
            .unwrap();
        assert_eq!(cost, 63000);
    }

    #[test]
    fn test_formula_estimate_clamps_to_ceiling() {
        let estimator = CostEstimator::formula();
        let cost = estimator
            .estimate(&trip(
                Country::Uk,
                AgeGroup::Senior,
                Activity::Hiking,
                10,
                0,
                5,
            ))
            .unwrap();
        assert_eq!(cost, 130000);
    }

    #[test]
    fn test_formula_estimate_clamps_to_floor() {
        let estimator = CostEstimator::formula();
        let cost = estimator
            .estimate(&trip(
                Country::Kenya,
                AgeGroup::Youth,
                Activity::Beach,
                1,
                1,
                0,
            ))
            .unwrap();
        assert_eq!(cost, 50000);
    }

    #[test]
    fn test_estimate_rejects_zero_nights() {
        let estimator = CostEstimator::formula();
        let err = estimator
            .estimate(&trip(
                Country::Kenya,
                AgeGroup::Adult,
                Activity::Beach,
                0,
                1,
                1,
            ))
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidRequest { .. }));
    }

    // ==================== model strategy tests ====================

    fn model_estimator(intercept: f64) -> CostEstimator {
        CostEstimator::Model(CostModel {
            intercept,
            coef_age_group: 1000.0,
            coef_total_people: 5000.0,
            coef_nights_stayed: 3000.0,
            coef_country: 700.0,
            coef_activity: 400.0,
            coef_female_count: 250.0,
        })
    }

    #[test]
    fn test_model_estimate_in_band() {
        let estimator = model_estimator(40000.0);
        let cost = estimator
            .estimate(&trip(
                Country::Uk,
                AgeGroup::Senior,
                Activity::Hiking,
                4,
                1,
                2,
            ))
            .unwrap();
        // predict = 72100, inside the band
        assert_eq!(cost, 72100);
    }

    #[test]
    fn test_model_estimate_uses_same_bounds_policy() {
        let low = model_estimator(-1_000_000.0);
        let high = model_estimator(10_000_000.0);
        let t = trip(Country::Kenya, AgeGroup::Adult, Activity::Beach, 2, 1, 0);
        assert_eq!(low.estimate(&t).unwrap(), 50000);
        assert_eq!(high.estimate(&t).unwrap(), 130000);
    }

    #[test]
    fn test_model_estimate_rejects_non_finite_prediction() {
        let estimator = model_estimator(f64::NAN);
        let err = estimator
            .estimate(&trip(Country::Kenya, AgeGroup::Adult, Activity::Beach, 2, 1, 0))
            .unwrap_err();
        assert!(matches!(err, PricingError::NonFinitePrediction { .. }));
    }

    #[test]
    fn test_missing_artifact_is_model_unavailable() {
        let err = CostEstimator::from_artifact(Path::new("/nonexistent/cost_model.json"))
            .unwrap_err();
        assert!(matches!(err, PricingError::ModelUnavailable { .. }));
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(CostEstimator::formula().strategy_name(), "formula");
        assert_eq!(model_estimator(0.0).strategy_name(), "model");
    }
}
