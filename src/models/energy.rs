//! Energy expenditure result and PAL guidance

use serde::{Deserialize, Serialize};

use crate::physiology::error::{ensure_range, CalcResult};

pub const MIN_PAL: f64 = 1.2;
pub const MAX_PAL: f64 = 2.5;

/// Validate a PAL value against the accepted 1.2-2.5 range
pub fn validate_pal(pal: f64) -> CalcResult<f64> {
    ensure_range("pal", pal, MIN_PAL, MAX_PAL)
}

/// Informational band for a PAL value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalBand {
    BedRest,
    Sedentary,
    Active,
    VeryActive,
}

impl PalBand {
    pub fn classify(pal: f64) -> Self {
        if pal <= MIN_PAL {
            PalBand::BedRest
        } else if pal <= 1.6 {
            PalBand::Sedentary
        } else if pal <= 2.0 {
            PalBand::Active
        } else {
            PalBand::VeryActive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PalBand::BedRest => "bed_rest",
            PalBand::Sedentary => "sedentary",
            PalBand::Active => "active",
            PalBand::VeryActive => "very_active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PalBand::BedRest => "Bed rest",
            PalBand::Sedentary => "Sedentary (office work, little exercise)",
            PalBand::Active => "Active (regular exercise)",
            PalBand::VeryActive => "Very active (intense physical work)",
        }
    }
}

/// 24h energy expenditure breakdown (unrounded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyResult {
    pub bmr_kcal: f64,
    pub pal: f64,
    pub mets: f64,
    pub weight_kg: f64,
    pub activity_hours: f64,
    /// Sleep and general activity: 24 - activity_hours
    pub rest_hours: f64,
    pub rest_component_kcal: f64,
    pub activity_component_kcal: f64,
    pub total_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pal_bands() {
        assert_eq!(PalBand::classify(1.2), PalBand::BedRest);
        assert_eq!(PalBand::classify(1.45), PalBand::Sedentary);
        assert_eq!(PalBand::classify(1.6), PalBand::Sedentary);
        assert_eq!(PalBand::classify(1.78), PalBand::Active);
        assert_eq!(PalBand::classify(2.0), PalBand::Active);
        assert_eq!(PalBand::classify(2.15), PalBand::VeryActive);
    }

    #[test]
    fn test_validate_pal() {
        assert!(validate_pal(1.2).is_ok());
        assert!(validate_pal(2.5).is_ok());
        assert!(validate_pal(1.1).is_err());
        assert!(validate_pal(2.6).is_err());
    }
}
