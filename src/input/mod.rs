// src/input/mod.rs

//! Reading course lists.
//!
//! - `model.rs` holds the serde-backed file format and the validated
//!   [`CourseCatalog`].
//! - `loader.rs` reads JSON or TOML from disk.
//! - `validate.rs` rejects malformed lists and adds courses that only appear
//!   as prerequisites.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_input_path, load_and_validate, load_from_path, parse_str};
pub use model::{CourseCatalog, CourseRecord, RawCourse, RawCourseFile};
pub use crate::types::InputFormat;
