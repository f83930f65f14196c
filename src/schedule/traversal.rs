// src/schedule/traversal.rs

//! Depth-first post-order walk with cycle detection.
//!
//! The walk uses an explicit stack of frames instead of recursion, so long
//! prerequisite chains cannot exhaust the call stack. Visitation and output
//! order are the same as the recursive form: a course is appended only after
//! every prerequisite reachable from it has been appended.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::errors::ScheduleError;
use crate::schedule::CourseGraph;
use crate::types::CourseName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Visited,
}

/// A course on the active path plus the index of the next prerequisite to
/// look at.
type Frame<'g> = (&'g CourseName, usize);

/// Per-run traversal state. Built fresh for every query and dropped after.
#[derive(Debug)]
pub(crate) struct Traversal<'g> {
    graph: &'g CourseGraph,
    state: HashMap<&'g str, VisitState>,
    /// Courses currently on the active path, for O(1) cycle checks.
    on_path: HashSet<&'g str>,
    order: Vec<CourseName>,
}

impl<'g> Traversal<'g> {
    pub(crate) fn new(graph: &'g CourseGraph) -> Self {
        let state = graph
            .vertices()
            .map(|course| (course.as_str(), VisitState::Unvisited))
            .collect();

        Self {
            graph,
            state,
            on_path: HashSet::new(),
            order: Vec::with_capacity(graph.order()),
        }
    }

    pub(crate) fn is_visited(&self, course: &str) -> bool {
        matches!(self.state.get(course), Some(VisitState::Visited))
    }

    /// Walk everything reachable from `root`, appending courses to the output
    /// in post-order.
    ///
    /// Stops at the first cycle found on the active path.
    pub(crate) fn visit(&mut self, root: &'g CourseName) -> Result<(), ScheduleError> {
        if !self.state.contains_key(root.as_str()) {
            return Err(ScheduleError::CourseNotFound(root.clone()));
        }

        let graph = self.graph;
        let mut frames: Vec<Frame<'g>> = Vec::new();
        self.enter(root);
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let course = frame.0;
            let next = frame.1;
            frame.1 += 1;

            let prerequisites = graph.adjacent_vertices_of(course).unwrap_or(&[]);
            let Some(prereq) = prerequisites.get(next) else {
                self.order.push(course.clone());
                self.on_path.remove(course.as_str());
                frames.pop();
                continue;
            };

            match self.state.get(prereq.as_str()).copied() {
                Some(VisitState::Unvisited) => {
                    self.enter(prereq);
                    frames.push((prereq, 0));
                }
                Some(VisitState::Visited) => {
                    if self.on_path.contains(prereq.as_str()) {
                        let cycle = cycle_through(&frames, prereq);
                        warn!(course = %prereq, ?cycle, "cycle detected");
                        return Err(ScheduleError::CycleDetected(cycle));
                    }
                }
                None => {
                    warn!(course = %course, prerequisite = %prereq, "edge to a course not in the graph");
                    return Err(ScheduleError::CourseNotFound(prereq.clone()));
                }
            }
        }

        Ok(())
    }

    /// Courses appended so far, prerequisites first.
    pub(crate) fn into_order(self) -> Vec<CourseName> {
        self.order
    }

    fn enter(&mut self, course: &'g CourseName) {
        debug!(course = %course, "visiting");
        self.state.insert(course.as_str(), VisitState::Visited);
        self.on_path.insert(course.as_str());
    }
}

/// Slice of the active path starting at `repeated`, closed with `repeated`.
fn cycle_through(frames: &[Frame<'_>], repeated: &CourseName) -> Vec<CourseName> {
    let start = frames
        .iter()
        .position(|(course, _)| *course == repeated)
        .unwrap_or(0);

    frames[start..]
        .iter()
        .map(|(course, _)| (*course).clone())
        .chain(std::iter::once(repeated.clone()))
        .collect()
}
