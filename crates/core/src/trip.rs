//! Trip classification vocabularies shared by the structured store and
//! the HTTP layer.
//!
//! Both enums map to plain TEXT columns; [`as_str`](TimeBudget::as_str)
//! gives the canonical column value and `FromStr` rejects anything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// How much slack the traveller wants built into a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBudget {
    Hurry,
    Moderate,
    Plenty,
}

impl TimeBudget {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeBudget::Hurry => "hurry",
            TimeBudget::Moderate => "moderate",
            TimeBudget::Plenty => "plenty",
        }
    }
}

impl Default for TimeBudget {
    fn default() -> Self {
        TimeBudget::Moderate
    }
}

impl fmt::Display for TimeBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBudget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hurry" => Ok(TimeBudget::Hurry),
            "moderate" => Ok(TimeBudget::Moderate),
            "plenty" => Ok(TimeBudget::Plenty),
            other => Err(CoreError::Validation(format!(
                "unknown time budget: {other}"
            ))),
        }
    }
}

/// Rough scale of a trip, used to pick defaults elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    Local,
    Regional,
    LongDistance,
}

impl TripType {
    pub fn as_str(self) -> &'static str {
        match self {
            TripType::Local => "local",
            TripType::Regional => "regional",
            TripType::LongDistance => "long_distance",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(TripType::Local),
            "regional" => Ok(TripType::Regional),
            "long_distance" => Ok(TripType::LongDistance),
            other => Err(CoreError::Validation(format!("unknown trip type: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_budget_round_trips_through_str() {
        for budget in [TimeBudget::Hurry, TimeBudget::Moderate, TimeBudget::Plenty] {
            assert_eq!(budget.as_str().parse::<TimeBudget>().unwrap(), budget);
        }
    }

    #[test]
    fn unknown_time_budget_is_a_validation_error() {
        let err = "leisurely".parse::<TimeBudget>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn trip_type_uses_snake_case_column_values() {
        assert_eq!(TripType::LongDistance.as_str(), "long_distance");
        assert_eq!(
            "long_distance".parse::<TripType>().unwrap(),
            TripType::LongDistance
        );
    }

    #[test]
    fn serde_matches_column_values() {
        let json = serde_json::to_string(&TripType::LongDistance).unwrap();
        assert_eq!(json, "\"long_distance\"");
    }
}
