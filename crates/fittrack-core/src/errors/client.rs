// ABOUTME: ClientError enum classifying connectivity, server, invalid-response and other failures
// ABOUTME: Display renders the user-visible message so views can show errors directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::error::Error as StdError;

/// Discriminant of a [`ClientError`], for matching without borrowing payloads
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The backend could not be reached at all
    Connectivity,
    /// The backend answered with a non-2xx status
    Server,
    /// The backend answered 2xx but a required field was missing
    InvalidResponse,
    /// Anything else (body read failures, malformed JSON, ...)
    Unclassified,
}

/// Failures raised by the API client and the resource controllers
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No HTTP response could be obtained (DNS failure, connection refused, ...)
    #[error("{message}")]
    Connectivity {
        /// Fixed human-readable message naming the expected backend address
        message: String,
        /// Low-level transport description, kept for logs
        detail: String,
    },

    /// Non-success HTTP status
    #[error("{message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body, or `Error <status>`
        message: String,
    },

    /// Success response missing a field the controller requires
    #[error("Invalid response from server: {reason}")]
    InvalidResponse {
        /// What was missing or malformed
        reason: String,
    },

    /// Any other failure, carried unchanged
    #[error("{context}: {source}")]
    Unclassified {
        /// Where the failure happened
        context: &'static str,
        /// Underlying error
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ClientError {
    /// Build the connectivity error for a backend expected at `origin`
    #[must_use]
    pub fn connectivity(origin: &str, detail: impl Into<String>) -> Self {
        Self::Connectivity {
            message: format!(
                "Could not connect to the server. Check that the backend is running at {origin}"
            ),
            detail: detail.into(),
        }
    }

    /// Server error with an explicit message
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Fallback server error text used when the body carries no message
    #[must_use]
    pub fn fallback_server_message(status: u16) -> String {
        format!("Error {status}")
    }

    /// Locally detected malformed success response
    #[must_use]
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Wrap an unexpected error without reclassifying it
    #[must_use]
    pub fn unclassified(
        context: &'static str,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Unclassified {
            context,
            source: Box::new(source),
        }
    }

    /// Tag of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connectivity { .. } => ErrorKind::Connectivity,
            Self::Server { .. } => ErrorKind::Server,
            Self::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            Self::Unclassified { .. } => ErrorKind::Unclassified,
        }
    }

    /// HTTP status for server errors
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the call because no session is active
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status: 401, .. })
    }
}

/// Result alias used throughout the client
pub type ClientResult<T> = Result<T, ClientError>;
