// src/schedule/mod.rs

//! Prerequisite graph and ordering.
//!
//! - [`graph`] holds a generic directed graph with insertion-ordered edges.
//! - [`scheduler`] builds the course graph and answers ordering queries.
//! - `traversal` is the per-query depth-first walk with cycle detection.
//! - [`outcome`] defines the [`Schedule`] result of a walk.

pub mod graph;
pub mod outcome;
pub mod scheduler;
mod traversal;

pub use graph::DirectedGraph;
pub use outcome::Schedule;
pub use scheduler::CourseScheduler;

use crate::types::CourseName;

/// Graph of courses; an edge `A -> B` means B is a prerequisite of A.
pub type CourseGraph = DirectedGraph<CourseName>;
