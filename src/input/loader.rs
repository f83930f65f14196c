// src/input/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;
use crate::input::model::{CourseCatalog, RawCourseFile};
use crate::types::InputFormat;

/// Parse a course list from a string without validating it.
pub fn parse_str(contents: &str, format: InputFormat) -> Result<RawCourseFile> {
    let raw = match format {
        InputFormat::Json => serde_json::from_str(contents)?,
        InputFormat::Toml => toml::from_str(contents)?,
    };
    Ok(raw)
}

/// Load a course list from `path` and return the raw [`RawCourseFile`].
///
/// If `format` is `None` it is inferred from the file extension. This only
/// deserializes; use [`load_and_validate`] to get a [`CourseCatalog`].
pub fn load_from_path(path: impl AsRef<Path>, format: Option<InputFormat>) -> Result<RawCourseFile> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    debug!(path = %path.display(), ?format, "reading course list");

    let contents = fs::read_to_string(path)?;
    parse_str(&contents, format)
}

/// Load a course list from `path`, validate it and fill in courses that are
/// only referenced as prerequisites.
///
/// This is the entry point the rest of the crate uses.
pub fn load_and_validate(
    path: impl AsRef<Path>,
    format: Option<InputFormat>,
) -> Result<CourseCatalog> {
    let raw = load_from_path(path, format)?;
    let catalog = CourseCatalog::try_from(raw)?;
    Ok(catalog)
}

/// Default location of the course list: `courses.json` in the working
/// directory.
pub fn default_input_path() -> PathBuf {
    PathBuf::from("courses.json")
}
