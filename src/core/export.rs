//! Export query results to CSV files
//!
//! Plain positional CSV, one writer per result shape. Free-text columns are
//! quoted because titles and subject keys can contain commas.

use crate::core::analytics::CoursesByInstructor;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write a key/count table (participation results) to `path`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_count_table(
    path: &Path,
    key_header: &str,
    value_header: &str,
    rows: &[(String, u64)],
) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "{key_header},{value_header}")?;
    for (key, value) in rows {
        writeln!(file, "\"{key}\",{value}")?;
    }

    crate::debug!("Exported {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write an ordered list of course titles to `path`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_title_list(path: &Path, titles: &[String]) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "title")?;
    for title in titles {
        writeln!(file, "\"{title}\"")?;
    }

    crate::debug!("Exported {} titles to {}", titles.len(), path.display());
    Ok(())
}

/// Write the per-instructor course table to `path`.
///
/// Instructors are emitted in ascending name order; each row carries the
/// solo-taught and co-taught title lists joined with semicolons.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_instructor_table(path: &Path, by_instructor: &CoursesByInstructor) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "instructor,solo_taught,co_taught")?;

    let mut names: Vec<&String> = by_instructor.keys().collect();
    names.sort();

    for name in names {
        if let Some(courses) = by_instructor.get(name) {
            writeln!(
                file,
                "\"{}\",\"{}\",\"{}\"",
                name,
                courses.solo.join(";"),
                courses.co_taught.join(";")
            )?;
        }
    }

    crate::debug!(
        "Exported {} instructors to {}",
        by_instructor.len(),
        path.display()
    );
    Ok(())
}
