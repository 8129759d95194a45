//! Pricing route handlers

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::pricing::calculators::BASE_COST_PER_PERSON_PER_NIGHT;
use crate::pricing::models::{Activity, AgeGroup, Country};
use crate::pricing::requests::EstimateCostRequest;
use crate::pricing::responses::{
    EstimateCostResponse, FactorResponse, PricingFactorsResponse,
};
use crate::AppState;

/// Build the pricing router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/estimate", post(estimate))
        .route("/api/pricing/factors", get(factors))
        .route("/health", get(health))
}

/// Estimate the cost of a trip
async fn estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateCostRequest>,
) -> Result<Json<EstimateCostResponse>> {
    let trip = request.into_trip();
    let cost = state.estimator.estimate(&trip)?;

    tracing::debug!(
        country = %trip.country,
        nights = trip.nights_stayed,
        people = trip.total_people(),
        cost,
        "estimated trip cost"
    );

    Ok(Json(EstimateCostResponse::new(
        cost,
        state.estimator.strategy_name(),
    )))
}

/// The immutable formula weight tables
async fn factors() -> Json<PricingFactorsResponse> {
    Json(PricingFactorsResponse {
        base_cost_per_person_per_night: BASE_COST_PER_PERSON_PER_NIGHT,
        countries: Country::ALL
            .iter()
            .map(|c| FactorResponse {
                label: c.label(),
                weight: c.weight(),
            })
            .collect(),
        age_groups: AgeGroup::ALL
            .iter()
            .map(|a| FactorResponse {
                label: a.label(),
                weight: a.weight(),
            })
            .collect(),
        activities: Activity::ALL
            .iter()
            .map(|a| FactorResponse {
                label: a.label(),
                weight: a.weight(),
            })
            .collect(),
    })
}

/// Liveness probe, reports the active strategy
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "strategy": state.estimator.strategy_name(),
    }))
}
