//! Runtime configuration
//!
//! Resolved from environment variables with project-relative defaults.

use std::path::PathBuf;

/// Environment variable overriding the activity dataset location
pub const ACTIVITIES_PATH_ENV: &str = "SPORTCALC_ACTIVITIES_PATH";

/// Default log directive when `RUST_LOG` does not mention this crate
pub const DEFAULT_LOG_DIRECTIVE: &str = "sportcalc=info";

const DATA_DIR: &str = "data";
const ACTIVITIES_FILE: &str = "compendium.csv";

/// Get the activity dataset path from environment or use the project default
pub fn activities_path() -> PathBuf {
    std::env::var(ACTIVITIES_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = project_root();
            path.push(DATA_DIR);
            path.push(ACTIVITIES_FILE);
            path
        })
}

/// Directory of the running executable, walking up out of target/{debug,release}
fn project_root() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path
}
