//! Sports Science Calculators (sportcalc) Library
//!
//! 24-hour energy expenditure and sweat-rate calculators.

pub mod activities;
pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod physiology;
pub mod tools;
