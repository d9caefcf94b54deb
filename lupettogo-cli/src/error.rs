//! Error types for project and module generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::render::RenderError;

/// Result alias used throughout the generation pipeline
pub type Result<T, E = GenerationError> = std::result::Result<T, E>;

/// Generation error type
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Malformed user-supplied name or argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unusable configuration value (e.g. an unknown database driver)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The working directory is not the root of a generated project
    #[error("No Go project detected at {}: {reason}", path.display())]
    ProjectNotDetected {
        /// Expected location of the module declaration file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Module templates could not be located
    #[error("Module templates not found: {}", path.display())]
    TemplatesNotFound {
        /// Directory or file that was expected to hold the templates
        path: PathBuf,
    },

    /// A template body is not well-formed against its grammar
    #[error("Template error in {path}: {source}")]
    TemplateSyntax {
        /// Catalog path of the offending template
        path: String,
        /// Underlying parse or resolution error
        #[source]
        source: RenderError,
    },

    /// Directory creation or file write failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// Refusing to overwrite existing output
    #[error("Destination already exists: {}", path.display())]
    DestinationExists {
        /// The existing file or non-empty directory
        path: PathBuf,
    },
}

impl GenerationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
