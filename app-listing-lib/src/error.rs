//! Defines custom error types for the library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when loading application records fails.
pub enum ListingError {
    #[error("Path required")]
    PathRequired,

    #[error("Cannot find input file '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read input file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid JSON{}", describe_origin(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input does not contain a valid list of app records{}", describe_origin(.path))]
    MalformedRecord {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in '{}'", path.display()),
        None => String::new(),
    }
}

impl ListingError {
    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            ListingError::Parse { source, .. } => ListingError::Parse {
                path: Some(path),
                source,
            },
            ListingError::MalformedRecord { source, .. } => ListingError::MalformedRecord {
                path: Some(path),
                source,
            },
            other => other,
        }
    }
}
