use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the theme repository.
///
/// Bad color data never shows up here: the pipeline turns it into
/// validation issues and keeps going.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("themes directory not found: {}", .0.display())]
    ThemesDirNotFound(PathBuf),

    #[error("theme '{name}' not found: {}", .path.display())]
    MissingThemeDirectory { name: String, path: PathBuf },

    #[error("palette source not found for theme '{name}': {}", .path.display())]
    MissingSourceFile { name: String, path: PathBuf },

    #[error("failed to read palette source {}: {source}", .path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write theme to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize theme document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to list themes in {}: {source}", .path.display())]
    ListThemes {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
