//! Physiology calculation module
//!
//! Pure energy and hydration formulas with no I/O or shared state.

pub mod bmr;
pub mod energy;
pub mod error;
pub mod sweat;
pub mod units;

pub use bmr::{schofield_bmr, SchofieldBracket};
pub use energy::{activity_energy_kcal, total_energy_expenditure};
pub use error::{CalcError, CalcResult};
pub use sweat::sweat_rate;
