//! Data models for `MoocAnalytics`

pub mod record;

pub use record::CourseRecord;
