// src/schedule/outcome.rs

//! Result type for a single ordering computation.

use crate::errors::ScheduleError;
use crate::types::CourseName;

/// Outcome of running the ordering walk, either over the whole graph or
/// from a single course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// Every visited course, prerequisites first.
    Complete(Vec<CourseName>),
    /// A cycle was reached; holds the courses on it, first course repeated
    /// at the end.
    Cycle(Vec<CourseName>),
    /// The requested course (or a course referenced by an edge) is not in
    /// the graph.
    NotFound(CourseName),
}

impl Schedule {
    pub fn is_complete(&self) -> bool {
        matches!(self, Schedule::Complete(_))
    }

    pub fn into_result(self) -> Result<Vec<CourseName>, ScheduleError> {
        match self {
            Schedule::Complete(order) => Ok(order),
            Schedule::Cycle(cycle) => Err(ScheduleError::CycleDetected(cycle)),
            Schedule::NotFound(course) => Err(ScheduleError::CourseNotFound(course)),
        }
    }
}

impl From<Result<Vec<CourseName>, ScheduleError>> for Schedule {
    fn from(result: Result<Vec<CourseName>, ScheduleError>) -> Self {
        match result {
            Ok(order) => Schedule::Complete(order),
            Err(ScheduleError::CycleDetected(cycle)) => Schedule::Cycle(cycle),
            Err(ScheduleError::CourseNotFound(course)) => Schedule::NotFound(course),
        }
    }
}
