//! Domain models for trip pricing.
//!
//! The three categorical fields are closed sets: the form shell renders them
//! as fixed option lists, so anything outside the set is a contract breach,
//! not user error. Each enum carries both representations the strategies
//! need: the multiplicative weight (formula strategy) and the integer code
//! the regression model was trained against (model strategy).

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A category value outside the closed option set.
///
/// The form shell uses closed-set widgets, so this is a defensive check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} category: '{value}'")]
pub struct UnknownCategory {
    pub field: &'static str,
    pub value: String,
}

/// Destination country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    Kenya,
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Italy,
    #[serde(rename = "South Africa")]
    SouthAfrica,
}

impl Country {
    /// Destination markup applied by the formula strategy.
    pub fn weight(&self) -> Decimal {
        match self {
            Country::Kenya => dec!(1.0),
            Country::Usa => dec!(1.2),
            Country::Uk => dec!(1.5),
            Country::Italy => dec!(1.3),
            Country::SouthAfrica => dec!(1.1),
        }
    }

    /// Training code: zero-based index in the canonical option list.
    pub fn model_code(&self) -> u8 {
        match self {
            Country::Kenya => 0,
            Country::Usa => 1,
            Country::Uk => 2,
            Country::Italy => 3,
            Country::SouthAfrica => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Country::Kenya => "Kenya",
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Italy => "Italy",
            Country::SouthAfrica => "South Africa",
        }
    }

    pub const ALL: [Country; 5] = [
        Country::Kenya,
        Country::Usa,
        Country::Uk,
        Country::Italy,
        Country::SouthAfrica,
    ];
}

impl FromStr for Country {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kenya" => Ok(Country::Kenya),
            "USA" => Ok(Country::Usa),
            "UK" => Ok(Country::Uk),
            "Italy" => Ok(Country::Italy),
            "South Africa" => Ok(Country::SouthAfrica),
            other => Err(UnknownCategory {
                field: "country",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Traveler age bracket.
///
/// Aliases accept the long labels the form shell's widgets display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(alias = "Youth (Below 18)")]
    Youth,
    #[serde(alias = "Adult (18-64)")]
    Adult,
    #[serde(alias = "Senior (65+)")]
    Senior,
}

impl AgeGroup {
    /// Seniority-linked services weight applied by the formula strategy.
    pub fn weight(&self) -> Decimal {
        match self {
            AgeGroup::Youth => dec!(0.8),
            AgeGroup::Adult => dec!(1.0),
            AgeGroup::Senior => dec!(1.3),
        }
    }

    /// Training code: ordinal bracket, Youth=0, Adult=1, Senior=2.
    pub fn model_code(&self) -> u8 {
        match self {
            AgeGroup::Youth => 0,
            AgeGroup::Adult => 1,
            AgeGroup::Senior => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Youth => "Youth",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }

    pub const ALL: [AgeGroup; 3] = [AgeGroup::Youth, AgeGroup::Adult, AgeGroup::Senior];
}

impl FromStr for AgeGroup {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Youth" | "Youth (Below 18)" => Ok(AgeGroup::Youth),
            "Adult" | "Adult (18-64)" => Ok(AgeGroup::Adult),
            "Senior" | "Senior (65+)" => Ok(AgeGroup::Senior),
            other => Err(UnknownCategory {
                field: "age_group",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Primary trip activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Beach,
    Safari,
    #[serde(rename = "City Tour")]
    CityTour,
    Hiking,
    #[serde(rename = "Cultural Experience")]
    CulturalExperience,
}

impl Activity {
    /// Activity-intensity weight applied by the formula strategy.
    pub fn weight(&self) -> Decimal {
        match self {
            Activity::Beach => dec!(1.0),
            Activity::Safari => dec!(1.3),
            Activity::CityTour => dec!(1.1),
            Activity::Hiking => dec!(1.3),
            Activity::CulturalExperience => dec!(1.2),
        }
    }

    /// Training code: zero-based index in the canonical option list.
    pub fn model_code(&self) -> u8 {
        match self {
            Activity::Beach => 0,
            Activity::Safari => 1,
            Activity::CityTour => 2,
            Activity::Hiking => 3,
            Activity::CulturalExperience => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Activity::Beach => "Beach",
            Activity::Safari => "Safari",
            Activity::CityTour => "City Tour",
            Activity::Hiking => "Hiking",
            Activity::CulturalExperience => "Cultural Experience",
        }
    }

    pub const ALL: [Activity; 5] = [
        Activity::Beach,
        Activity::Safari,
        Activity::CityTour,
        Activity::Hiking,
        Activity::CulturalExperience,
    ];
}

impl FromStr for Activity {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beach" => Ok(Activity::Beach),
            "Safari" => Ok(Activity::Safari),
            "City Tour" => Ok(Activity::CityTour),
            "Hiking" => Ok(Activity::Hiking),
            "Cultural Experience" => Ok(Activity::CulturalExperience),
            other => Err(UnknownCategory {
                field: "activity",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One trip submission, request-scoped.
///
/// Invariants: `nights_stayed >= 1` (enforced at the request boundary);
/// people counts are non-negative by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRequest {
    pub country: Country,
    pub age_group: AgeGroup,
    pub activity: Activity,
    pub nights_stayed: u32,
    pub male_count: u32,
    pub female_count: u32,
}

impl TripRequest {
    pub fn total_people(&self) -> u32 {
        self.male_count + self.female_count
    }
}

/// Final bounded estimate, in Kenyan shillings.
pub type EstimatedCost = i64;
