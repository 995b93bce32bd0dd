//! sportcalc Tools module
//!
//! MCP tool implementations for the energy and sweat-rate calculators.

pub mod energy;
pub mod status;
pub mod sweat;
