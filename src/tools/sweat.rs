//! Sweat Rate MCP Tools

use serde::Serialize;
use tracing::{info, warn};

use super::energy::now_timestamp;
use crate::models::{HydrationStatus, SweatInputs, SweatResult};
use crate::physiology::sweat_rate;

/// Rounded values for display
#[derive(Debug, Serialize)]
pub struct SweatDisplay {
    pub weight_difference: String,
    pub total_sweat_loss: String,
    pub sweat_rate: String,
    pub body_weight_loss: String,
}

/// Response for calculate_sweat_rate
#[derive(Debug, Serialize)]
pub struct SweatRateResponse {
    pub inputs: SweatInputs,
    pub result: SweatResult,
    pub display: SweatDisplay,
    pub hydration_status: HydrationStatus,
    pub hydration_message: String,
    pub calculated_at: String,
}

pub fn sweat_display(result: &SweatResult) -> SweatDisplay {
    SweatDisplay {
        weight_difference: format!("{:.1} g", result.weight_diff_g),
        total_sweat_loss: format!("{:.1} ml", result.total_sweat_ml),
        sweat_rate: format!(
            "{:.2} ml/h ({:.2} L/h)",
            result.sweat_rate_ml_per_h, result.sweat_rate_l_per_h
        ),
        body_weight_loss: format!("{:.2}%", result.weight_loss_pct),
    }
}

/// Calculate sweat rate for one exercise session
pub fn calculate_sweat_rate(inputs: SweatInputs) -> Result<SweatRateResponse, String> {
    let result = sweat_rate(&inputs).map_err(|e| {
        warn!(error = %e, "Sweat rate calculation rejected");
        e.to_string()
    })?;

    info!(
        sweat_rate_ml_per_h = result.sweat_rate_ml_per_h,
        weight_loss_pct = result.weight_loss_pct,
        "Calculated sweat rate"
    );

    Ok(SweatRateResponse {
        inputs,
        display: sweat_display(&result),
        hydration_status: result.hydration,
        hydration_message: result.hydration.message().to_string(),
        result,
        calculated_at: now_timestamp(),
    })
}
