//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use crate::pricing::models::{Activity, AgeGroup, Country, TripRequest};

/// Request to estimate the cost of a trip.
///
/// The form shell submits closed-set category labels and bounded numeric
/// inputs; serde rejects anything outside the enumerated domains.
#[derive(Debug, Deserialize)]
pub struct EstimateCostRequest {
    pub country: Country,
    pub age_group: AgeGroup,
    pub activity: Activity,
    pub nights_stayed: u32,
    #[serde(default)]
    pub male_count: u32,
    #[serde(default)]
    pub female_count: u32,
}

impl EstimateCostRequest {
    pub fn into_trip(self) -> TripRequest {
        TripRequest {
            country: self.country,
            age_group: self.age_group,
            activity: self.activity,
            nights_stayed: self.nights_stayed,
            male_count: self.male_count,
            female_count: self.female_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_request() {
        let request: EstimateCostRequest = serde_json::from_str(
            r#"{
                "country": "South Africa",
                "age_group": "Adult",
                "activity": "City Tour",
                "nights_stayed": 4,
                "male_count": 2,
                "female_count": 1
            }"#,
        )
        .unwrap();

        let trip = request.into_trip();
        assert_eq!(trip.country, Country::SouthAfrica);
        assert_eq!(trip.activity, Activity::CityTour);
        assert_eq!(trip.total_people(), 3);
    }

    #[test]
    fn test_people_counts_default_to_zero() {
        let request: EstimateCostRequest = serde_json::from_str(
            r#"{"country": "Kenya", "age_group": "Youth", "activity": "Beach", "nights_stayed": 1}"#,
        )
        .unwrap();
        assert_eq!(request.male_count, 0);
        assert_eq!(request.female_count, 0);
    }

    #[test]
    fn test_unknown_category_is_rejected_on_the_wire() {
        let result = serde_json::from_str::<EstimateCostRequest>(
            r#"{"country": "Narnia", "age_group": "Adult", "activity": "Beach", "nights_stayed": 1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_people_count_is_rejected() {
        let result = serde_json::from_str::<EstimateCostRequest>(
            r#"{"country": "Kenya", "age_group": "Adult", "activity": "Beach", "nights_stayed": 1, "male_count": -1}"#,
        );
        assert!(result.is_err());
    }
}
