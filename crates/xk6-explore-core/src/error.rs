// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for xk6-explore.

use thiserror::Error;

/// The error type returned by catalog retrieval, filter parsing, and rendering.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// An unknown `--type` value.
    #[error("invalid type: allowed values are javascript, output, subcommand")]
    InvalidKind { value: String },

    /// An unknown `--tier` value.
    #[error("invalid tier: allowed values are official, community")]
    InvalidTier { value: String },

    /// The catalog URL could not be turned into a request.
    #[error("invalid catalog URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure (DNS, connection refused, timeout).
    #[error("catalog request failed: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The caller cancelled the request before it completed.
    #[error("catalog request cancelled")]
    Cancelled,

    /// The registry answered with a non-success status.
    #[error("failed to fetch extension catalog: {status}")]
    CatalogStatus { status: String },

    /// The response body is not a JSON object of extension records.
    #[error("failed to decode extension catalog: {source}")]
    Decode {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing rendered output failed.
    #[error("failed to write output: {source}")]
    Output {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ExploreError {
    /// Returns true for errors caused by invalid user input rather than I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExploreError::InvalidKind { .. }
                | ExploreError::InvalidTier { .. }
                | ExploreError::InvalidUrl { .. }
        )
    }
}

impl From<std::io::Error> for ExploreError {
    fn from(err: std::io::Error) -> Self {
        ExploreError::Output {
            source: Box::new(err),
        }
    }
}
