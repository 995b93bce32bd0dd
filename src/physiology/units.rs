//! Unit conversion constants
//!
//! Body mass and fluid volume are treated as interchangeable at 1 g == 1 ml.

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;
/// Hours in the TEE window
pub const HOURS_PER_DAY: f64 = 24.0;

/// Weight loss above this percentage of initial body weight needs a hydration adjustment
pub const HYDRATION_LOSS_THRESHOLD_PCT: f64 = 2.0;

pub fn kg_to_g(kg: f64) -> f64 {
    kg * G_PER_KG
}

pub fn ml_to_l(ml: f64) -> f64 {
    ml / ML_PER_LITER
}

/// Scale an amount observed over `duration_min` to a per-hour rate
pub fn per_minute_to_per_hour(amount: f64, duration_min: f64) -> f64 {
    (amount / duration_min) * MINUTES_PER_HOUR
}
