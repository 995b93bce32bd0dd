//! Activity reference table
//!
//! Loads the Compendium-style CSV (columns `CODE,CATEGORY,MET,SPECIFIC-ACTIVITY`) once and
//! serves read-only lookups by category and by activity name.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Dataset error types
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open activity dataset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Activity dataset contains no activities")]
    Empty,

    #[error("Invalid activity on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Activity '{name}' appears more than once (line {line})")]
    DuplicateActivity { name: String, line: u64 },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// One row of the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Compendium code, kept as text to preserve leading zeros
    pub id: String,
    pub category: String,
    pub activity_name: String,
    pub mets: f64,
}

impl ActivityRecord {
    /// Label used in activity pickers, e.g. "running, 6 mph (9.8 METs)"
    pub fn label(&self) -> String {
        format!("{} ({} METs)", self.activity_name, format_mets(self.mets))
    }
}

/// Format a MET value as the dataset writes it: at least one decimal ("7.0"), and every
/// decimal the value carries ("0.95").
pub fn format_mets(mets: f64) -> String {
    if mets.fract() == 0.0 {
        format!("{:.1}", mets)
    } else {
        mets.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "CODE")]
    code: String,
    #[serde(rename = "CATEGORY")]
    category: String,
    #[serde(rename = "MET")]
    mets: f64,
    #[serde(rename = "SPECIFIC-ACTIVITY")]
    activity: String,
}

/// Immutable activity table with category and name indexes
#[derive(Debug, Clone)]
pub struct ActivityTable {
    records: Vec<ActivityRecord>,
    by_category: BTreeMap<String, Vec<usize>>,
    by_name: HashMap<String, usize>,
}

impl ActivityTable {
    /// Load the table from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            activities = table.len(),
            categories = table.by_category.len(),
            "Loaded activity table"
        );
        Ok(table)
    }

    /// Parse the table from any CSV source. Any bad row rejects the whole table.
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut records = Vec::new();
        let mut by_category: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut by_name = HashMap::new();

        for result in rdr.deserialize::<CsvRow>() {
            let row = result?;
            // Header is line 1
            let line = records.len() as u64 + 2;

            if row.code.is_empty() {
                return Err(DatasetError::InvalidRecord { line, reason: "empty CODE".to_string() });
            }
            if row.category.is_empty() {
                return Err(DatasetError::InvalidRecord { line, reason: "empty CATEGORY".to_string() });
            }
            if row.activity.is_empty() {
                return Err(DatasetError::InvalidRecord {
                    line,
                    reason: "empty SPECIFIC-ACTIVITY".to_string(),
                });
            }
            if !row.mets.is_finite() || row.mets <= 0.0 {
                return Err(DatasetError::InvalidRecord {
                    line,
                    reason: format!("MET must be positive, got {}", row.mets),
                });
            }

            let index = records.len();
            if by_name.insert(row.activity.clone(), index).is_some() {
                return Err(DatasetError::DuplicateActivity { name: row.activity, line });
            }
            by_category.entry(row.category.clone()).or_default().push(index);

            records.push(ActivityRecord {
                id: row.code,
                category: row.category,
                activity_name: row.activity,
                mets: row.mets,
            });
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        debug!(activities = records.len(), "Parsed activity table");

        Ok(Self {
            records,
            by_category,
            by_name,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in dataset order
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Unique categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.by_category.keys().map(String::as_str).collect()
    }

    /// Activities in a category, in dataset order (empty for an unknown category)
    pub fn by_category(&self, category: &str) -> Vec<&ActivityRecord> {
        self.by_category
            .get(category)
            .map(|indexes| indexes.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Look up an activity by its exact name
    pub fn find_by_name(&self, activity_name: &str) -> Option<&ActivityRecord> {
        self.by_name.get(activity_name).map(|&i| &self.records[i])
    }

    /// Look up an activity by name, requiring it to sit in `category`
    pub fn find(&self, category: &str, activity_name: &str) -> Option<&ActivityRecord> {
        self.find_by_name(activity_name)
            .filter(|record| record.category == category)
    }
}
