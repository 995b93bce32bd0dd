//! Basal metabolic rate (Schofield equations)
//!
//! Schofield, W.N. (1985). Predicting basal metabolic rate, new standards and review
//! of previous work. *Human Nutrition: Clinical Nutrition*, 39 Suppl 1, 5-41.
//!
//! Each sex has six age brackets with a linear equation `BMR = slope × W + intercept`
//! (W in kg, BMR in kcal/day). Bracket upper bounds are exclusive.

use serde::{Deserialize, Serialize};

use super::error::{ensure_positive, CalcError, CalcResult};
use crate::models::{Sex, MAX_AGE_YEARS};

/// Schofield age bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchofieldBracket {
    Under3,
    From3To9,
    From10To17,
    From18To29,
    From30To59,
    From60,
}

impl SchofieldBracket {
    pub fn for_age(age_years: u32) -> Self {
        match age_years {
            0..=2 => SchofieldBracket::Under3,
            3..=9 => SchofieldBracket::From3To9,
            10..=17 => SchofieldBracket::From10To17,
            18..=29 => SchofieldBracket::From18To29,
            30..=59 => SchofieldBracket::From30To59,
            _ => SchofieldBracket::From60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchofieldBracket::Under3 => "<3",
            SchofieldBracket::From3To9 => "3-9",
            SchofieldBracket::From10To17 => "10-17",
            SchofieldBracket::From18To29 => "18-29",
            SchofieldBracket::From30To59 => "30-59",
            SchofieldBracket::From60 => ">=60",
        }
    }

    /// (slope per kg, intercept) for this bracket
    pub fn coefficients(&self, sex: Sex) -> (f64, f64) {
        match (sex, self) {
            (Sex::Male, SchofieldBracket::Under3) => (59.512, -30.4),
            (Sex::Male, SchofieldBracket::From3To9) => (22.706, 504.3),
            (Sex::Male, SchofieldBracket::From10To17) => (17.686, 658.2),
            (Sex::Male, SchofieldBracket::From18To29) => (15.057, 692.2),
            (Sex::Male, SchofieldBracket::From30To59) => (11.472, 873.1),
            (Sex::Male, SchofieldBracket::From60) => (11.711, 587.7),
            (Sex::Female, SchofieldBracket::Under3) => (58.317, -31.1),
            (Sex::Female, SchofieldBracket::From3To9) => (20.315, 485.9),
            (Sex::Female, SchofieldBracket::From10To17) => (13.384, 692.6),
            (Sex::Female, SchofieldBracket::From18To29) => (14.818, 486.6),
            (Sex::Female, SchofieldBracket::From30To59) => (8.126, 845.6),
            (Sex::Female, SchofieldBracket::From60) => (9.082, 658.5),
        }
    }
}

/// Calculate BMR in kcal/day.
///
/// # Errors
///
/// `CalcError::InvalidInput` when the weight is not a positive finite number, the age is
/// above the supported maximum, or the weight is too low for the bracket's intercept to
/// yield a positive rate (only possible in the under-3 brackets).
pub fn schofield_bmr(age_years: u32, sex: Sex, weight_kg: f64) -> CalcResult<f64> {
    let weight_kg = ensure_positive("weight_kg", weight_kg)?;
    if age_years > MAX_AGE_YEARS {
        return Err(CalcError::invalid(
            "age_years",
            format!("{} exceeds the maximum of {}", age_years, MAX_AGE_YEARS),
        ));
    }

    let bracket = SchofieldBracket::for_age(age_years);
    let (slope, intercept) = bracket.coefficients(sex);
    let bmr = slope * weight_kg + intercept;

    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(CalcError::invalid(
            "weight_kg",
            format!(
                "{} kg is too low for the Schofield {} equation (BMR would be {:.1} kcal)",
                weight_kg,
                bracket.as_str(),
                bmr
            ),
        ));
    }

    Ok(bmr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_adult_male() {
        // 30 years, 70 kg -> 11.472 * 70 + 873.1
        assert_close(schofield_bmr(30, Sex::Male, 70.0).unwrap(), 1676.14);
    }

    #[test]
    fn test_adult_female() {
        // 25 years, 60 kg -> 14.818 * 60 + 486.6
        assert_close(schofield_bmr(25, Sex::Female, 60.0).unwrap(), 1375.68);
    }

    #[test]
    fn test_bracket_boundaries_use_upper_bracket() {
        assert_eq!(SchofieldBracket::for_age(2), SchofieldBracket::Under3);
        assert_eq!(SchofieldBracket::for_age(3), SchofieldBracket::From3To9);
        assert_eq!(SchofieldBracket::for_age(9), SchofieldBracket::From3To9);
        assert_eq!(SchofieldBracket::for_age(10), SchofieldBracket::From10To17);
        assert_eq!(SchofieldBracket::for_age(17), SchofieldBracket::From10To17);
        assert_eq!(SchofieldBracket::for_age(18), SchofieldBracket::From18To29);
        assert_eq!(SchofieldBracket::for_age(29), SchofieldBracket::From18To29);
        assert_eq!(SchofieldBracket::for_age(30), SchofieldBracket::From30To59);
        assert_eq!(SchofieldBracket::for_age(59), SchofieldBracket::From30To59);
        assert_eq!(SchofieldBracket::for_age(60), SchofieldBracket::From60);
        assert_eq!(SchofieldBracket::for_age(120), SchofieldBracket::From60);
    }

    #[test]
    fn test_age_10_uses_10_to_17_equation() {
        let w = 35.0;
        assert_close(schofield_bmr(10, Sex::Male, w).unwrap(), 17.686 * w + 658.2);
        assert_close(schofield_bmr(9, Sex::Male, w).unwrap(), 22.706 * w + 504.3);
        assert_close(schofield_bmr(10, Sex::Female, w).unwrap(), 13.384 * w + 692.6);
        assert_close(schofield_bmr(9, Sex::Female, w).unwrap(), 20.315 * w + 485.9);
    }

    #[test]
    fn test_every_bracket_matches_table() {
        let w = 50.0;
        let table = [
            (1, Sex::Male, 59.512 * w - 30.4),
            (5, Sex::Male, 22.706 * w + 504.3),
            (15, Sex::Male, 17.686 * w + 658.2),
            (20, Sex::Male, 15.057 * w + 692.2),
            (45, Sex::Male, 11.472 * w + 873.1),
            (75, Sex::Male, 11.711 * w + 587.7),
            (1, Sex::Female, 58.317 * w - 31.1),
            (5, Sex::Female, 20.315 * w + 485.9),
            (15, Sex::Female, 13.384 * w + 692.6),
            (20, Sex::Female, 14.818 * w + 486.6),
            (45, Sex::Female, 8.126 * w + 845.6),
            (75, Sex::Female, 9.082 * w + 658.5),
        ];
        for (age, sex, expected) in table {
            assert_close(schofield_bmr(age, sex, w).unwrap(), expected);
        }
    }

    #[test]
    fn test_positive_finite_across_ages() {
        for sex in [Sex::Male, Sex::Female] {
            for age in 0..=MAX_AGE_YEARS {
                for weight in [1.0, 30.0, 70.0, 200.0] {
                    let bmr = schofield_bmr(age, sex, weight).unwrap();
                    assert!(bmr.is_finite() && bmr > 0.0, "age {} weight {}", age, weight);
                }
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_weight() {
        assert!(matches!(
            schofield_bmr(30, Sex::Male, 0.0),
            Err(CalcError::InvalidInput { field: "weight_kg", .. })
        ));
        assert!(schofield_bmr(30, Sex::Female, -5.0).is_err());
        assert!(schofield_bmr(30, Sex::Female, f64::NAN).is_err());
    }

    #[test]
    fn test_rejects_age_above_maximum() {
        assert!(matches!(
            schofield_bmr(121, Sex::Male, 70.0),
            Err(CalcError::InvalidInput { field: "age_years", .. })
        ));
    }

    #[test]
    fn test_rejects_weight_yielding_negative_rate() {
        // 59.512 * 0.5 - 30.4 < 0
        assert!(schofield_bmr(1, Sex::Male, 0.5).is_err());
    }

    #[test]
    fn test_idempotent() {
        let a = schofield_bmr(42, Sex::Female, 63.5).unwrap();
        let b = schofield_bmr(42, Sex::Female, 63.5).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
