//! Sweat-rate inputs and result

use serde::{Deserialize, Serialize};

use crate::physiology::units::HYDRATION_LOSS_THRESHOLD_PCT;

/// Measurements taken around one exercise session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweatInputs {
    pub initial_weight_kg: f64,
    pub final_weight_kg: f64,
    pub fluid_intake_ml: f64,
    pub urine_loss_ml: f64,
    pub duration_min: f64,
}

/// Hydration verdict from body-weight loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationStatus {
    /// Loss of at most 2 % of initial body weight
    Adequate,
    Excessive,
}

impl HydrationStatus {
    pub fn classify(weight_loss_pct: f64) -> Self {
        if weight_loss_pct <= HYDRATION_LOSS_THRESHOLD_PCT {
            HydrationStatus::Adequate
        } else {
            HydrationStatus::Excessive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HydrationStatus::Adequate => "adequate",
            HydrationStatus::Excessive => "excessive",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HydrationStatus::Adequate => "Adequate hydration (loss ≤ 2%).",
            HydrationStatus::Excessive => {
                "Warning: excessive body-weight loss (> 2%). Adjust hydration."
            }
        }
    }
}

/// Derived sweat-rate breakdown; only produced when total sweat loss is non-negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweatResult {
    pub weight_diff_g: f64,
    pub total_sweat_ml: f64,
    pub sweat_rate_ml_per_h: f64,
    pub sweat_rate_l_per_h: f64,
    pub weight_loss_pct: f64,
    pub hydration: HydrationStatus,
}
