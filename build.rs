//! Build script for sportcalc
//!
//! Embeds a build counter, the build time and the size of the bundled activity dataset.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const BUNDLED_DATASET: &str = "data/compendium.csv";

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed={}", BUNDLED_DATASET);

    // Counter is kept per target directory
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let counter_path = out_dir.join("build_number.txt");
    let build_number = read_counter(&counter_path) + 1;
    fs::write(&counter_path, build_number.to_string()).expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let bundled = count_dataset_rows(Path::new(BUNDLED_DATASET));

    println!("cargo:rustc-env=SPORTCALC_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=SPORTCALC_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=SPORTCALC_BUNDLED_ACTIVITIES={}", bundled);
}

fn read_counter(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

/// Data rows in the bundled CSV (header excluded); 0 if the file is missing
fn count_dataset_rows(path: &Path) -> usize {
    fs::read_to_string(path)
        .map(|s| s.lines().skip(1).filter(|line| !line.trim().is_empty()).count())
        .unwrap_or(0)
}
