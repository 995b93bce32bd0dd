//! Build information module
//!
//! Compile-time constants for build number and timestamp, plus the startup banner.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("SPORTCALC_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("SPORTCALC_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Rows in `data/compendium.csv` when the binary was built
pub const BUNDLED_ACTIVITIES: u64 = match option_env!("SPORTCALC_BUNDLED_ACTIVITIES") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Build information structure for serialization
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
    pub bundled_activities: u64,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
            bundled_activities: BUNDLED_ACTIVITIES,
        }
    }

    /// Banner lines; the dataset path is shown because the table is fatal to load
    pub fn banner_lines(&self, activities_path: &Path) -> Vec<String> {
        let rule = "=".repeat(47);
        vec![
            rule.clone(),
            "  Sports Science Calculators (sportcalc)".to_string(),
            format!("  Version: {} | Build: {}", self.version, self.build_number),
            format!("  Compiled: {}", self.build_timestamp),
            format!("  Activities: {}", activities_path.display()),
            rule,
        ]
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr (stdout belongs to the MCP transport)
pub fn print_startup_banner(activities_path: &Path) {
    for line in BuildInfo::current().banner_lines(activities_path) {
        eprintln!("{}", line);
    }
}
