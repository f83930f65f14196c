// src/errors.rs

//! Crate-wide error types.
//!
//! [`ScheduleError`] covers the two failures the scheduler can report.
//! [`CourseplanError`] wraps those together with input and IO failures.

use thiserror::Error;

/// Failure of an ordering computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// The courses on the active path, starting and ending with the course
    /// that was reached twice.
    #[error("Cycle detected in prerequisites: {}", .0.join(" -> "))]
    CycleDetected(Vec<String>),
}

#[derive(Error, Debug)]
pub enum CourseplanError {
    #[error("Input error: {0}")]
    InputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CourseplanError>;
