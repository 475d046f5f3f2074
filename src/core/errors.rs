//! Shared error types for the conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a missing input file or an output directory that cannot be created.
pub const EXIT_SETUP_FAILURE: u8 = 255;

/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 250;

/// Main error type for prompt generation
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input row: wrong width or unknown kind
    #[error("Schema error at data row {row}: {message}")]
    Schema { row: usize, message: String },

    /// Input file absent
    #[error("Resource error: Input file does not exist ({})", .path.display())]
    InputMissing { path: PathBuf },

    /// Output directory could not be created
    #[error("Resource error: Unable to create output directory ({})", .path.display())]
    OutputDirUncreatable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading or writing a table
    #[error("Resource error: {message}{}", path_suffix(.path))]
    Resource {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tabular format errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Create a schema error for a 1-based data row
    pub fn schema(row: usize, message: impl Into<String>) -> Self {
        Self::Schema {
            row,
            message: message.into(),
        }
    }

    /// Create a resource error with path context
    pub fn resource(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Resource {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    pub fn input_missing(path: impl Into<PathBuf>) -> Self {
        Self::InputMissing { path: path.into() }
    }

    pub fn output_dir_uncreatable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputDirUncreatable {
            path: path.into(),
            source,
        }
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }

    /// Process exit status for this error.
    ///
    /// Setup failures (missing input, uncreatable output directory) get a
    /// status of their own so callers can tell them apart from conversion
    /// failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputMissing { .. } | Self::OutputDirUncreatable { .. } => EXIT_SETUP_FAILURE,
            Self::Schema { .. }
            | Self::Resource { .. }
            | Self::Config(_)
            | Self::Csv(_)
            | Self::Json(_)
            | Self::Io(_) => EXIT_FAILURE,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for attaching path context to I/O results
pub trait ResultExt<T> {
    fn resource_context(self, message: impl Into<String>, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn resource_context(self, message: impl Into<String>, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Resource {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        })
    }
}
