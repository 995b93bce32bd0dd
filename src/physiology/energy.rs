//! 24-hour total energy expenditure
//!
//! The day is split into the hours spent on the selected activity and the remaining
//! "rest" hours (sleep plus general activity):
//!
//! ```text
//! rest_component     = BMR × PAL × (rest_hours / 24)
//! activity_component = MET × weight_kg × activity_hours
//! total              = rest_component + activity_component
//! ```
//!
//! Nothing is rounded here; rounding belongs to the presentation layer.

use super::error::{ensure_finite, ensure_positive, ensure_range, CalcResult};
use super::units::HOURS_PER_DAY;
use crate::models::EnergyResult;

/// Energy spent on an activity: MET × weight_kg × hours
pub fn activity_energy_kcal(mets: f64, weight_kg: f64, hours: f64) -> f64 {
    mets * weight_kg * hours
}

/// Combine BMR, PAL and the selected activity into a 24h breakdown.
///
/// # Errors
///
/// `CalcError::InvalidInput` if BMR, PAL, MET or weight are not positive finite numbers,
/// if `activity_hours` is outside 0-24, or if a component overflows to a non-finite value.
pub fn total_energy_expenditure(
    bmr_kcal: f64,
    pal: f64,
    mets: f64,
    weight_kg: f64,
    activity_hours: f64,
) -> CalcResult<EnergyResult> {
    let bmr_kcal = ensure_positive("bmr_kcal", bmr_kcal)?;
    let pal = ensure_positive("pal", pal)?;
    let mets = ensure_positive("mets", mets)?;
    let weight_kg = ensure_positive("weight_kg", weight_kg)?;
    let activity_hours = ensure_range("activity_hours", activity_hours, 0.0, HOURS_PER_DAY)?;

    let rest_hours = HOURS_PER_DAY - activity_hours;
    let rest_component_kcal =
        ensure_finite("rest_component_kcal", bmr_kcal * pal * (rest_hours / HOURS_PER_DAY))?;
    let activity_component_kcal = ensure_finite(
        "activity_component_kcal",
        activity_energy_kcal(mets, weight_kg, activity_hours),
    )?;
    let total_kcal = ensure_finite("total_kcal", rest_component_kcal + activity_component_kcal)?;

    Ok(EnergyResult {
        bmr_kcal,
        pal,
        mets,
        weight_kg,
        activity_hours,
        rest_hours,
        rest_component_kcal,
        activity_component_kcal,
        total_kcal,
    })
}
