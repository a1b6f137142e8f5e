//! Course offering record model
//!
//! One record is one parsed CSV data line: a single run of a course. A
//! course title may repeat across offerings and course numbers, and a course
//! number may have several offerings over time; queries that aggregate by
//! title and queries that aggregate by number must not conflate the two.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one course offering (one data line of the dataset)
///
/// Immutable after construction. The free-text columns (title, instructors,
/// subject) are quote-stripped when the record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Institution offering the course (e.g., "MITx")
    pub institution: String,

    /// Course number; stable identity of a course across repeated offerings
    pub number: String,

    /// Launch date of this offering; tie-breaker for "latest offering"
    pub launch_date: NaiveDate,

    /// Human-readable course title; not unique across offerings
    pub title: String,

    /// Comma-space-separated instructor names
    pub instructors: String,

    /// Course subject (e.g., "Computer Science")
    pub subject: String,

    /// Offering year
    pub year: u32,

    /// Honor-code certificate count
    pub honor_code: u32,

    /// Participants (course content accessed)
    pub participants: u32,

    /// Audited (more than half the content accessed)
    pub audited: u32,

    /// Certified participant count
    pub certified: u32,

    /// Percentage of participants who audited
    pub percent_audited: f64,

    /// Percentage of participants who were certified
    pub percent_certified: f64,

    /// Percentage certified among those who accessed over half the content
    pub percent_certified_50: f64,

    /// Percentage who played course videos
    pub percent_video: f64,

    /// Percentage who posted in the forum
    pub percent_forum: f64,

    /// Percentage with a grade higher than zero
    pub grade_higher_zero: f64,

    /// Total course hours (thousands)
    pub total_hours: f64,

    /// Median hours spent by certified participants
    pub median_hours_certification: f64,

    /// Median participant age
    pub median_age: f64,

    /// Percentage of male participants
    pub percent_male: f64,

    /// Percentage of female participants
    pub percent_female: f64,

    /// Percentage holding a bachelor's degree or higher
    pub percent_degree: f64,
}

impl CourseRecord {
    /// Number of positional columns a data line must carry.
    pub const FIELD_COUNT: usize = 23;

    /// Build a record from the 23 positional fields of one data line.
    ///
    /// Type parsing and quote stripping happen here; the caller is expected
    /// to have already split the line on commas outside quote pairs.
    ///
    /// # Errors
    /// Returns a description of the first schema mismatch: wrong field
    /// count, or an integer/float/date column that does not parse.
    pub fn from_fields(fields: &[&str]) -> Result<Self, String> {
        if fields.len() != Self::FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                Self::FIELD_COUNT,
                fields.len()
            ));
        }

        Ok(Self {
            institution: fields[0].to_string(),
            number: fields[1].to_string(),
            launch_date: parse_date(fields[2])?,
            title: strip_quotes(fields[3]).to_string(),
            instructors: strip_quotes(fields[4]).to_string(),
            subject: strip_quotes(fields[5]).to_string(),
            year: parse_int(fields[6], "year")?,
            honor_code: parse_int(fields[7], "honor_code")?,
            participants: parse_int(fields[8], "participants")?,
            audited: parse_int(fields[9], "audited")?,
            certified: parse_int(fields[10], "certified")?,
            percent_audited: parse_float(fields[11], "percent_audited")?,
            percent_certified: parse_float(fields[12], "percent_certified")?,
            percent_certified_50: parse_float(fields[13], "percent_certified_50")?,
            percent_video: parse_float(fields[14], "percent_video")?,
            percent_forum: parse_float(fields[15], "percent_forum")?,
            grade_higher_zero: parse_float(fields[16], "grade_higher_zero")?,
            total_hours: parse_float(fields[17], "total_hours")?,
            median_hours_certification: parse_float(fields[18], "median_hours_certification")?,
            median_age: parse_float(fields[19], "median_age")?,
            percent_male: parse_float(fields[20], "percent_male")?,
            percent_female: parse_float(fields[21], "percent_female")?,
            percent_degree: parse_float(fields[22], "percent_degree")?,
        })
    }

    /// Iterate over the instructor names listed on this offering
    pub fn instructor_names(&self) -> impl Iterator<Item = &str> {
        self.instructors.split(", ")
    }

    /// Whether this offering lists more than one instructor
    #[must_use]
    pub fn is_co_taught(&self) -> bool {
        self.instructors.contains(", ")
    }
}

/// Remove one leading and one trailing double quote, independently.
///
/// This is the only quoting normalization the dataset format calls for;
/// interior quotes are left alone.
fn strip_quotes(raw: &str) -> &str {
    let s = raw.strip_prefix('"').unwrap_or(raw);
    s.strip_suffix('"').unwrap_or(s)
}

fn parse_int(raw: &str, column: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("column '{column}' is not an integer: '{raw}'"))
}

fn parse_float(raw: &str, column: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("column '{column}' is not a number: '{raw}'"))
}

/// Parse a launch date.
///
/// The original export carries US-style `M/D/YYYY` dates; ISO `YYYY-MM-DD`
/// is accepted as well.
fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let value = raw.trim();
    NaiveDate::parse_from_str(value, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| format!("column 'launch_date' is not a date: '{raw}'"))
}
