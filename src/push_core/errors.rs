// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Error types - remote status failures are NOT errors; they travel in result records.

use crate::push_core::models::{Method, StatusCode};
use thiserror::Error;

/// Failure of the session collaborator itself. The round trip produced no outcome.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Connection lost or never established
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request or response could not be encoded/decoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Call was cancelled before a response arrived
    #[error("Call cancelled")]
    Cancelled,

    /// Call exceeded the session's deadline
    #[error("Call timed out after {0} ms")]
    Timeout(u64),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Main error type for certpush
#[derive(Error, Debug)]
pub enum PushError {
    /// Session/transport failure, passed through untouched
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Server returned output arguments for a method that defines none
    #[error("Protocol violation: {method} returned {count} output argument(s), expected none")]
    UnexpectedOutputs { method: Method, count: usize },

    /// Certificate group name outside the supported table
    #[error("Certificate group not implemented: {0}")]
    GroupNotImplemented(String),

    /// Malformed NodeId text
    #[error("Invalid NodeId: {0}")]
    InvalidNodeId(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PushError {
    /// Status classification equivalent of a local error, if one exists.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            PushError::Session(SessionError::Connection(_)) => {
                Some(StatusCode::BAD_COMMUNICATION_ERROR)
            }
            PushError::Session(SessionError::Encoding(_)) => Some(StatusCode::BAD_ENCODING_ERROR),
            PushError::Session(SessionError::Cancelled) => {
                Some(StatusCode::BAD_REQUEST_CANCELLED_BY_CLIENT)
            }
            PushError::Session(SessionError::Timeout(_)) => Some(StatusCode::BAD_TIMEOUT),
            PushError::UnexpectedOutputs { .. } => Some(StatusCode::BAD_UNEXPECTED_ERROR),
            PushError::GroupNotImplemented(_) => Some(StatusCode::BAD_NOT_IMPLEMENTED),
            PushError::Session(SessionError::Other(_))
            | PushError::InvalidNodeId(_)
            | PushError::Configuration(_) => None,
        }
    }

    /// True when the failure happened below this layer (no outcome was produced).
    pub fn is_session_failure(&self) -> bool {
        matches!(self, PushError::Session(_))
    }
}
