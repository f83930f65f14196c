// src/schedule/scheduler.rs

use tracing::{debug, info};

use crate::errors::ScheduleError;
use crate::input::{CourseCatalog, CourseRecord};
use crate::schedule::outcome::Schedule;
use crate::schedule::traversal::Traversal;
use crate::schedule::CourseGraph;
use crate::types::CourseName;

/// Course scheduler: owns the prerequisite graph and answers ordering
/// queries over it.
///
/// The graph is built once and never mutated by a query. Every query runs
/// its own [`Traversal`], so repeated calls give identical answers.
#[derive(Debug, Clone, Default)]
pub struct CourseScheduler {
    graph: CourseGraph,
}

impl CourseScheduler {
    /// Construct a scheduler with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[CourseRecord]) -> Self {
        let mut scheduler = Self::new();
        scheduler.build_graph(records);
        scheduler
    }

    /// Construct a scheduler from a validated [`CourseCatalog`].
    pub fn from_catalog(catalog: &CourseCatalog) -> Self {
        Self::from_records(catalog.records())
    }

    /// Add every record to the graph.
    ///
    /// Vertices are added in a first pass and edges in a second one, since
    /// an edge to a course that is not yet a vertex would be dropped.
    pub fn build_graph(&mut self, records: &[CourseRecord]) {
        for record in records {
            self.graph.add_vertex(record.name.clone());
        }

        for record in records {
            for prereq in record.prerequisites.iter() {
                if !self.graph.add_edge(&record.name, prereq) {
                    debug!(
                        course = %record.name,
                        prerequisite = %prereq,
                        "edge not added (unknown course or duplicate)"
                    );
                }
            }
        }

        info!(
            courses = self.graph.order(),
            prerequisites = self.graph.size(),
            "built course graph"
        );
    }

    /// Read-only view of the prerequisite graph.
    pub fn graph(&self) -> &CourseGraph {
        &self.graph
    }

    /// All course names in sorted order.
    pub fn all_courses(&self) -> Vec<CourseName> {
        self.sorted_courses().into_iter().cloned().collect()
    }

    /// Run the walk over the whole graph, taking roots in sorted order.
    pub fn schedule(&self) -> Schedule {
        let mut traversal = Traversal::new(&self.graph);

        let walked = self.sorted_courses().into_iter().try_for_each(|root| {
            if traversal.is_visited(root) {
                return Ok(());
            }
            traversal.visit(root)
        });

        walked.map(|()| traversal.into_order()).into()
    }

    /// Run the walk from `course` only. The resulting order ends with
    /// `course` and holds exactly the courses it depends on.
    pub fn schedule_for(&self, course: &str) -> Schedule {
        let Some(root) = self.graph.get_vertex(course) else {
            debug!(course = %course, "course not in graph");
            return Schedule::NotFound(course.to_string());
        };

        let mut traversal = Traversal::new(&self.graph);
        traversal
            .visit(root)
            .map(|()| traversal.into_order())
            .into()
    }

    /// Every course exactly once, prerequisites before the courses that
    /// need them.
    pub fn completion_order(&self) -> Result<Vec<CourseName>, ScheduleError> {
        self.schedule().into_result()
    }

    /// The courses that must be taken to reach `course`, ending with `course`.
    pub fn completion_order_for(&self, course: &str) -> Result<Vec<CourseName>, ScheduleError> {
        self.schedule_for(course).into_result()
    }

    /// Whether some order completes every course.
    pub fn can_complete_all(&self) -> bool {
        match self.schedule() {
            Schedule::Complete(_) => true,
            Schedule::Cycle(_) | Schedule::NotFound(_) => false,
        }
    }

    /// Number of courses that must be completed before `course`.
    ///
    /// Returns `-1` if `course` is unknown or depends on a cycle.
    pub fn minimum_prerequisite_count(&self, course: &str) -> i64 {
        match self.schedule_for(course) {
            Schedule::Complete(path) => path.len() as i64 - 1,
            Schedule::Cycle(_) | Schedule::NotFound(_) => -1,
        }
    }

    fn sorted_courses(&self) -> Vec<&CourseName> {
        let mut courses: Vec<&CourseName> = self.graph.vertices().collect();
        courses.sort();
        courses
    }
}
