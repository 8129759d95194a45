//! Trained regression artifact for the model strategy.
//!
//! Training happens outside this service; the artifact is a JSON file of
//! fitted linear coefficients produced alongside the training run. This
//! module only rehydrates it and evaluates predictions - it never fits,
//! validates, or inspects the model.
//!
//! Training contract (category codes the model was fitted against):
//! - country: Kenya=0, USA=1, UK=2, Italy=3, South Africa=4
//! - age group (ordinal): Youth=0, Adult=1, Senior=2
//! - activity: Beach=0, Safari=1, City Tour=2, Hiking=3, Cultural Experience=4

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pricing::models::TripRequest;

/// Model input assembled in the exact order the model was trained with:
/// `[age_group_code, total_people, nights_stayed, country_code,
/// activity_code, female_count]`.
///
/// This ordering is the most fragile contract in the system - reordering
/// silently corrupts predictions. Named fields keep assembly explicit;
/// [`FeatureVector::to_array`] is the single place the order is spelled out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub age_group_code: f64,
    pub total_people: f64,
    pub nights_stayed: f64,
    pub country_code: f64,
    pub activity_code: f64,
    pub female_count: f64,
}

impl FeatureVector {
    /// Encode a trip using the training contract above.
    pub fn from_trip(trip: &TripRequest) -> Self {
        Self {
            age_group_code: f64::from(trip.age_group.model_code()),
            total_people: f64::from(trip.total_people()),
            nights_stayed: f64::from(trip.nights_stayed),
            country_code: f64::from(trip.country.model_code()),
            activity_code: f64::from(trip.activity.model_code()),
            female_count: f64::from(trip.female_count),
        }
    }

    /// The fixed training order.
    pub fn to_array(self) -> [f64; 6] {
        [
            self.age_group_code,
            self.total_people,
            self.nights_stayed,
            self.country_code,
            self.activity_code,
            self.female_count,
        ]
    }
}

/// Serializable fitted cost model.
///
/// One coefficient per feature plus an intercept:
/// ```text
/// cost = intercept
///      + coef_age_group * age_group_code
///      + coef_total_people * total_people
///      + coef_nights_stayed * nights_stayed
///      + coef_country * country_code
///      + coef_activity * activity_code
///      + coef_female_count * female_count
/// ```
///
/// Named fields ensure a mismatched artifact fails at deserialization time
/// instead of silently pairing coefficients with the wrong features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostModel {
    pub intercept: f64,
    pub coef_age_group: f64,
    pub coef_total_people: f64,
    pub coef_nights_stayed: f64,
    pub coef_country: f64,
    pub coef_activity: f64,
    pub coef_female_count: f64,
}

impl CostModel {
    /// Coefficients in the canonical feature order.
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.coef_age_group,
            self.coef_total_people,
            self.coef_nights_stayed,
            self.coef_country,
            self.coef_activity,
            self.coef_female_count,
        ]
    }

    /// Raw (pre-clamp) predicted cost for an encoded trip.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let inputs = features.to_array();
        self.intercept
            + self
                .coefficients()
                .iter()
                .zip(inputs.iter())
                .map(|(coef, x)| coef * x)
                .sum::<f64>()
    }
}

/// Load a `CostModel` from a JSON artifact.
///
/// Missing or incompatible artifacts are fatal for the model strategy; the
/// caller refuses to start rather than serve wrong numbers.
pub fn load_cost_model(path: &Path) -> std::io::Result<CostModel> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
