// src/input/validate.rs

use std::collections::HashSet;

use tracing::debug;

use crate::errors::{CourseplanError, Result};
use crate::input::model::{CourseCatalog, CourseRecord, RawCourseFile};

impl TryFrom<RawCourseFile> for CourseCatalog {
    type Error = CourseplanError;

    fn try_from(raw: RawCourseFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_courses(&raw)?;
        Ok(CourseCatalog::new_unchecked(reconcile(raw)))
    }
}

fn validate_raw_courses(raw: &RawCourseFile) -> Result<()> {
    ensure_names_present(raw)?;
    ensure_no_duplicate_courses(raw)?;
    Ok(())
}

fn ensure_names_present(raw: &RawCourseFile) -> Result<()> {
    for (idx, course) in raw.courses.iter().enumerate() {
        if course.name.trim().is_empty() {
            return Err(CourseplanError::InputError(format!(
                "course entry #{} has an empty `name`",
                idx + 1
            )));
        }
        if course.prerequisites.iter().any(|p| p.trim().is_empty()) {
            return Err(CourseplanError::InputError(format!(
                "course '{}' has an empty name in `prerequisites`",
                course.name
            )));
        }
    }
    Ok(())
}

fn ensure_no_duplicate_courses(raw: &RawCourseFile) -> Result<()> {
    let mut seen = HashSet::new();
    for course in raw.courses.iter() {
        if !seen.insert(course.name.as_str()) {
            return Err(CourseplanError::InputError(format!(
                "course '{}' is listed more than once",
                course.name
            )));
        }
    }
    Ok(())
}

/// Convert raw entries into records and append an empty-prerequisite record
/// for each name that only ever appears as a prerequisite.
///
/// Synthesized records follow the order in which their names are first
/// referenced.
fn reconcile(raw: RawCourseFile) -> Vec<CourseRecord> {
    let mut known: HashSet<String> = raw.courses.iter().map(|c| c.name.clone()).collect();
    let mut missing = Vec::new();

    for course in raw.courses.iter() {
        for prereq in course.prerequisites.iter() {
            if known.insert(prereq.clone()) {
                debug!(course = %prereq, "adding prerequisite-only course");
                missing.push(CourseRecord::new(prereq.clone(), Vec::new()));
            }
        }
    }

    let mut records: Vec<CourseRecord> = raw
        .courses
        .into_iter()
        .map(|c| CourseRecord::new(c.name, c.prerequisites))
        .collect();
    records.append(&mut missing);
    records
}
