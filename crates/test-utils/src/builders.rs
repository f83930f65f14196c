#![allow(dead_code)]

use courseplan::input::{CourseCatalog, CourseRecord, RawCourse, RawCourseFile};
use courseplan::schedule::CourseScheduler;

/// Builder for `CourseCatalog` / raw course lists to simplify test setup.
pub struct CatalogBuilder {
    raw: RawCourseFile,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawCourseFile::default(),
        }
    }

    /// Add a top-level course entry with the given prerequisites.
    pub fn with_course(mut self, name: &str, prerequisites: &[&str]) -> Self {
        self.raw.courses.push(RawCourse {
            name: name.to_string(),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    pub fn raw(self) -> RawCourseFile {
        self.raw
    }

    pub fn try_build(self) -> anyhow::Result<CourseCatalog> {
        Ok(CourseCatalog::try_from(self.raw)?)
    }

    pub fn build(self) -> CourseCatalog {
        self.try_build()
            .expect("Failed to build valid catalog from builder")
    }

    /// Shortcut: validate and hand the catalog to a fresh scheduler.
    pub fn scheduler(self) -> CourseScheduler {
        CourseScheduler::from_catalog(&self.build())
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build records directly, bypassing validation and reconciliation.
pub fn records(entries: &[(&str, &[&str])]) -> Vec<CourseRecord> {
    entries
        .iter()
        .map(|(name, prereqs)| {
            CourseRecord::new(*name, prereqs.iter().map(|p| p.to_string()).collect())
        })
        .collect()
}
