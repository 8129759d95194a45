//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no state. The formula strategy
//! and the bounds policy both live here so the numbers are auditable in one
//! place.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use crate::pricing::models::{EstimatedCost, TripRequest};

/// Base cost per person per night, in Kenyan shillings.
pub const BASE_COST_PER_PERSON_PER_NIGHT: Decimal = dec!(10000);

/// Lowest estimate the product will display.
pub const COST_FLOOR: Decimal = dec!(50000);

/// Highest estimate the product will display.
pub const COST_CEILING: Decimal = dec!(130000);

/// Surcharge applied per woman in the travel group.
const FEMALE_SURCHARGE_PER_PERSON: Decimal = dec!(0.05);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Raw (pre-clamp) formula-strategy cost.
///
/// Multiplicative composition: each factor independently scales the base by
/// an economically-motivated percentage (destination markup, activity
/// intensity, seniority-linked services, per-woman surcharge), so each
/// weight can be recalibrated without re-deriving cross-terms.
///
/// ```text
/// raw = 10000 * total_people * nights
///     * age_weight * country_weight * activity_weight
///     * (1 + 0.05 * female_count)
/// ```
pub fn formula_raw_cost(trip: &TripRequest) -> Decimal {
    let female_surcharge =
        Decimal::ONE + FEMALE_SURCHARGE_PER_PERSON * Decimal::from(trip.female_count);

    BASE_COST_PER_PERSON_PER_NIGHT
        * Decimal::from(trip.total_people())
        * Decimal::from(trip.nights_stayed)
        * trip.age_group.weight()
        * trip.country.weight()
        * trip.activity.weight()
        * female_surcharge
}

/// Clamp a raw strategy result into the displayable band and round to a
/// whole-shilling integer.
///
/// Out-of-band values mean extreme inputs or model extrapolation; the
/// product floors/ceils instead of rejecting so the user always gets an
/// actionable number. Every strategy must pass through here - callers see
/// one uniform output contract.
pub fn clamp_to_band(raw_cost: Decimal) -> EstimatedCost {
    let bounded = raw_cost.max(COST_FLOOR).min(COST_CEILING);
    // Band endpoints fit comfortably in i64
    round_money(bounded, 0).to_i64().unwrap_or(0)
}
