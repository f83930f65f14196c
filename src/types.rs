// src/types.rs

use std::path::Path;
use std::str::FromStr;

/// Opaque, case-sensitive course identifier.
pub type CourseName = String;

/// On-disk encoding of the course list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Guess the format from a file extension: `.toml` is TOML, everything
    /// else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
            _ => InputFormat::Json,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            other => Err(format!(
                "invalid input format: {other} (expected \"json\" or \"toml\")"
            )),
        }
    }
}
