//! Data models
//!
//! Calculator inputs and derived results. Nothing here is persisted.

mod energy;
mod profile;
mod sweat;

pub use energy::{validate_pal, EnergyResult, PalBand, MAX_PAL, MIN_PAL};
pub use profile::{
    ActivitySelection, PersonalProfile, Sex, ACTIVITY_HOURS_STEP, MAX_ACTIVITY_HOURS,
    MAX_AGE_YEARS, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_WEIGHT_KG,
};
pub use sweat::{HydrationStatus, SweatInputs, SweatResult};
