//! Error types for the indiarace monthly scraper.
//!
//! Each pipeline stage has its own error enum so callers can match on the
//! failure class they care about, with a top-level [`Error`] for paths that
//! cross stages. Malformed markup is not an error at all: the extractor
//! degrades in place (placeholder fields, skipped rows) and never fails.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation failed
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Reading persisted artifacts failed
    #[error("store error")]
    Store(#[from] StoreError),

    /// Writing monthly artifacts failed
    #[error("export error")]
    Export(#[from] ExportError),

    /// The requested year/month does not exist on the calendar
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors that occur while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration struct could not be built from environment variables
    #[error("failed to load {config} from environment: {message}")]
    EnvParse { config: &'static str, message: String },

    /// A loaded value fails validation
    #[error("invalid value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    pub fn env_parse(config: &'static str, err: impl std::fmt::Display) -> Self {
        Self::EnvParse {
            config,
            message: err.to_string(),
        }
    }

    pub fn invalid(field: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Invalid {
            field,
            message: err.to_string(),
        }
    }
}

/// Errors raised while fetching a race-day page from the remote site.
///
/// These stay inside the fetch layer: the orchestrator converts an exhausted
/// fetch into a failure count, never into an aborted month.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request could not be completed (connect, timeout, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// Every allowed attempt failed; carries the last attempt's error text
    #[error("all {attempts} attempts failed, last error: {last}")]
    RetriesExhausted { attempts: u32, last: String },
}

impl FetchError {
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            status: status.as_u16(),
        }
    }

    pub fn retries_exhausted(attempts: u32, last: Option<FetchError>) -> Self {
        Self::RetriesExhausted {
            attempts,
            last: last
                .map(|err| err.to_string())
                .unwrap_or_else(|| "no attempt was made".to_string()),
        }
    }
}

/// Errors raised while reading persisted monthly artifacts back from disk.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A file or directory could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A persisted JSON artifact could not be decoded
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn decode(path: &std::path::Path, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Errors raised while writing the monthly artifacts.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output directory could not be created; nothing was written
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A single artifact could not be written
    #[error("failed to write {artifact} artifact to {path}: {message}")]
    Artifact {
        artifact: &'static str,
        path: String,
        message: String,
    },

    /// Some artifacts were written, others failed
    #[error("{failed} of {attempted} artifacts failed: {names}")]
    Partial {
        failed: usize,
        attempted: usize,
        names: String,
    },
}

impl ExportError {
    pub fn create_dir(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn artifact(
        artifact: &'static str,
        path: &std::path::Path,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::Artifact {
            artifact,
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn partial(failures: &[&'static str], attempted: usize) -> Self {
        Self::Partial {
            failed: failures.len(),
            attempted,
            names: failures.join(", "),
        }
    }
}
