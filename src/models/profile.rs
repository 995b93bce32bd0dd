//! Personal profile and activity selection
//!
//! Validated inputs for the energy calculator. Ranges match what the calculator form accepts.

use serde::{Deserialize, Serialize};

use crate::physiology::error::{ensure_range, CalcError, CalcResult};

pub const MIN_AGE_YEARS: u32 = 1;
pub const MAX_AGE_YEARS: u32 = 120;
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;
pub const MAX_ACTIVITY_HOURS: f64 = 24.0;
/// Activity hours are entered in half-hour steps
pub const ACTIVITY_HOURS_STEP: f64 = 0.5;

/// Biological sex, selects the Schofield equation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Some(Sex::Male),
            "f" | "female" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Person the energy calculation is for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalProfile {
    pub age_years: u32,
    pub sex: Sex,
    pub weight_kg: f64,
}

impl PersonalProfile {
    pub fn new(age_years: u32, sex: Sex, weight_kg: f64) -> CalcResult<Self> {
        if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age_years) {
            return Err(CalcError::invalid(
                "age_years",
                format!(
                    "{} is outside the allowed range {}-{}",
                    age_years, MIN_AGE_YEARS, MAX_AGE_YEARS
                ),
            ));
        }
        let weight_kg = ensure_range("weight_kg", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;

        Ok(Self {
            age_years,
            sex,
            weight_kg,
        })
    }
}

/// Activity chosen from the reference table and the daily hours spent on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySelection {
    pub category: String,
    pub activity_name: String,
    pub hours: f64,
}

impl ActivitySelection {
    pub fn new(category: &str, activity_name: &str, hours: f64) -> CalcResult<Self> {
        let category = category.trim();
        let activity_name = activity_name.trim();
        if category.is_empty() {
            return Err(CalcError::invalid("category", "must not be empty"));
        }
        if activity_name.is_empty() {
            return Err(CalcError::invalid("activity_name", "must not be empty"));
        }
        let hours = ensure_range("activity_hours", hours, 0.0, MAX_ACTIVITY_HOURS)?;
        if (hours / ACTIVITY_HOURS_STEP).fract() != 0.0 {
            return Err(CalcError::invalid(
                "activity_hours",
                format!("{} is not a multiple of {} hours", hours, ACTIVITY_HOURS_STEP),
            ));
        }

        Ok(Self {
            category: category.to_string(),
            activity_name: activity_name.to_string(),
            hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!(Sex::from_str("M"), Some(Sex::Male));
        assert_eq!(Sex::from_str(" female "), Some(Sex::Female));
        assert_eq!(Sex::from_str("x"), None);
    }

    #[test]
    fn test_sex_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"F\"");
        let sex: Sex = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(sex, Sex::Male);
    }

    #[test]
    fn test_profile_ranges() {
        assert!(PersonalProfile::new(1, Sex::Male, 30.0).is_ok());
        assert!(PersonalProfile::new(120, Sex::Female, 200.0).is_ok());
        assert!(matches!(
            PersonalProfile::new(0, Sex::Male, 70.0),
            Err(CalcError::InvalidInput { field: "age_years", .. })
        ));
        assert!(PersonalProfile::new(121, Sex::Male, 70.0).is_err());
        assert!(matches!(
            PersonalProfile::new(30, Sex::Male, 29.9),
            Err(CalcError::InvalidInput { field: "weight_kg", .. })
        ));
        assert!(PersonalProfile::new(30, Sex::Male, 200.1).is_err());
    }

    #[test]
    fn test_selection_hours_range() {
        assert!(ActivitySelection::new("Running", "running, 6 mph", 0.0).is_ok());
        assert!(ActivitySelection::new("Running", "running, 6 mph", 24.0).is_ok());
        assert!(ActivitySelection::new("Running", "running, 6 mph", 24.5).is_err());
        assert!(ActivitySelection::new("", "running, 6 mph", 1.0).is_err());
    }

    #[test]
    fn test_selection_hours_in_half_hour_steps() {
        assert_eq!(ActivitySelection::new("Running", "jogging", 1.5).unwrap().hours, 1.5);
        assert!(ActivitySelection::new("Running", "jogging", 23.5).is_ok());
        assert!(matches!(
            ActivitySelection::new("Running", "jogging", 1.25),
            Err(CalcError::InvalidInput { field: "activity_hours", .. })
        ));
        assert!(ActivitySelection::new("Running", "jogging", 0.1).is_err());
    }

    #[test]
    fn test_selection_trims_names() {
        let s = ActivitySelection::new(" Running ", " running, 6 mph", 1.5).unwrap();
        assert_eq!(s.category, "Running");
        assert_eq!(s.activity_name, "running, 6 mph");
    }
}
