//! Course offerings dataset
//!
//! A dataset is loaded once from a CSV file and owns its records for the
//! rest of the process lifetime; nothing mutates or removes records after
//! load. Queries over the dataset live in [`crate::core::analytics`].

pub mod csv_parser;

use crate::core::error::AnalyticsError;
use crate::core::models::CourseRecord;
use csv_parser::split_data_line;
use std::fs;
use std::path::Path;

/// An ordered, immutable collection of course offering records
#[derive(Debug, Clone, Default)]
pub struct CourseDataset {
    records: Vec<CourseRecord>,
}

impl CourseDataset {
    /// Load a dataset from a CSV file.
    ///
    /// The first line is a header and is discarded. Every following
    /// non-blank line must carry exactly
    /// [`CourseRecord::FIELD_COUNT`] comma-separated fields (commas inside
    /// double-quote pairs do not split). Record order matches file order.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::FileUnavailable`] when the path cannot be
    /// read, and [`AnalyticsError::MalformedRecord`] (with the 1-based line
    /// number) on the first line that does not match the schema. A load
    /// error leaves no partial dataset behind.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, AnalyticsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| {
            AnalyticsError::FileUnavailable {
                path: path.display().to_string(),
                source,
            }
        })?;

        let mut records = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            // Line 0 is the header.
            if idx == 0 || line.trim().is_empty() {
                continue;
            }

            let fields = split_data_line(line);
            let record = CourseRecord::from_fields(&fields).map_err(|reason| {
                AnalyticsError::MalformedRecord {
                    line: idx + 1,
                    reason,
                }
            })?;
            records.push(record);
        }

        crate::debug!("Loaded {} offering records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Build a dataset from records already in memory
    #[must_use]
    pub fn from_records(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    /// All records, in load order
    #[must_use]
    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    /// Number of records in the dataset
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
