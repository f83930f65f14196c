// src/input/model.rs

use serde::Deserialize;

use crate::types::CourseName;

/// Course list as read from disk, before validation.
///
/// JSON:
///
/// ```json
/// {
///   "courses": [
///     { "name": "CS300", "prerequisites": ["CS200"] },
///     { "name": "CS200", "prerequisites": [] }
///   ]
/// }
/// ```
///
/// TOML uses the same shape:
///
/// ```toml
/// [[courses]]
/// name = "CS300"
/// prerequisites = ["CS200"]
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCourseFile {
    #[serde(default)]
    pub courses: Vec<RawCourse>,
}

/// A single `courses` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCourse {
    pub name: String,

    /// Courses that must be completed before this one. Missing means none.
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// A course name plus its direct prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: CourseName,
    pub prerequisites: Vec<CourseName>,
}

impl CourseRecord {
    pub fn new<S: Into<CourseName>>(name: S, prerequisites: Vec<CourseName>) -> Self {
        Self {
            name: name.into(),
            prerequisites,
        }
    }
}

/// Validated course list.
///
/// Guarantees that every name referenced as a prerequisite also has its own
/// record, that no record is listed twice, and that no name is blank.
/// Construct it with `CourseCatalog::try_from(raw)`.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    records: Vec<CourseRecord>,
}

impl CourseCatalog {
    /// Wrap records that have already been validated and reconciled.
    pub(crate) fn new_unchecked(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<CourseRecord> {
        self.records
    }
}
