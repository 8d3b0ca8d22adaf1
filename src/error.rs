//! Error types for notion-merge-log

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while turning a merge event into a Notion page
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required configuration values are absent
    #[error("missing required configuration: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    /// A configuration value is present but unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The event payload is not a pull-request event
    #[error("invalid pull request event: {0}")]
    InvalidEvent(String),

    /// Notion answered with a non-success status
    #[error("Notion HTTP {status} {reason}: {body}")]
    NotionApi {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
        /// Response body, truncated
        body: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to read an event or config file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl Error {
    /// HTTP status of a remote API failure, if this is one
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotionApi { status, .. } => Some(*status),
            _ => None,
        }
    }
}
