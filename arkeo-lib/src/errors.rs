//! Error types for Arkeo client operations.
//!
//! This module provides structured error types for the Arkeo client library,
//! enabling precise error handling and recovery strategies.

use std::fmt;

use crate::validation::ValidationError;

/// Stable numeric error codes for bindings and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ArkeoErrorCode {
    /// Feature not compiled in
    Unimplemented = 1000,
    /// Transport/network layer error
    Transport = 2000,
    /// Connection failed
    ConnectionFailed = 2001,
    /// Connection timeout
    ConnectionTimeout = 2002,
    /// Resource not found
    NotFound = 4000,
    /// Type URL not registered
    UnknownType = 4001,
    /// Invalid request/data
    InvalidData = 5000,
    /// Client-side message validation failed
    Validation = 5001,
    /// JSON serialization error
    Serialization = 5002,
    /// Protobuf decode error
    Decode = 5003,
    /// Protobuf encode error
    Encode = 5004,
    /// `Any` carried a different type than expected
    TypeMismatch = 5005,
    /// Server responded in a way that breaks the protocol
    Protocol = 5006,
    /// Chain returned an error status
    Remote = 6000,
    /// Rate limited
    RateLimited = 8000,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Comprehensive error type for Arkeo client operations.
#[derive(Debug)]
pub enum ArkeoError {
    /// Feature not compiled in.
    Unimplemented(&'static str),

    /// Transport/network layer error.
    Transport(String),

    /// Connection failed.
    ConnectionFailed {
        /// Target endpoint
        target: String,
        /// Underlying error message
        reason: String,
    },

    /// Connection timeout.
    ConnectionTimeout {
        /// Operation that timed out
        operation: String,
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Resource not found (provider, contract, endpoint).
    NotFound {
        /// Type of resource (e.g., "provider", "contract")
        resource_type: String,
        /// Resource identifier
        identifier: String,
    },

    /// No codec is registered for this type URL.
    UnknownType(String),

    /// Invalid data provided.
    InvalidData {
        /// Field or parameter name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Client-side message validation failed.
    Validation(ValidationError),

    /// JSON serialization/deserialization error.
    Serialization(String),

    /// Malformed protobuf bytes.
    Decode(String),

    /// Protobuf encoding failed.
    Encode(String),

    /// An `Any` did not carry the expected message type.
    TypeMismatch {
        /// Type URL the caller asked for
        expected: String,
        /// Type URL found in the envelope
        actual: String,
    },

    /// Server broke the protocol (e.g. a repeating pagination key).
    Protocol(String),

    /// Chain returned an error status body.
    Remote {
        /// HTTP status
        status: u16,
        /// gRPC status code from the body
        code: i32,
        /// Message from the body
        message: String,
    },

    /// Rate limited, should retry after delay.
    RateLimited {
        /// Suggested retry delay in milliseconds
        retry_after_ms: u64,
    },

    /// Internal/unexpected error.
    Internal(String),
}

impl ArkeoError {
    /// Get the stable error code.
    pub fn code(&self) -> ArkeoErrorCode {
        match self {
            Self::Unimplemented(_) => ArkeoErrorCode::Unimplemented,
            Self::Transport(_) => ArkeoErrorCode::Transport,
            Self::ConnectionFailed { .. } => ArkeoErrorCode::ConnectionFailed,
            Self::ConnectionTimeout { .. } => ArkeoErrorCode::ConnectionTimeout,
            Self::NotFound { .. } => ArkeoErrorCode::NotFound,
            Self::UnknownType(_) => ArkeoErrorCode::UnknownType,
            Self::InvalidData { .. } => ArkeoErrorCode::InvalidData,
            Self::Validation(_) => ArkeoErrorCode::Validation,
            Self::Serialization(_) => ArkeoErrorCode::Serialization,
            Self::Decode(_) => ArkeoErrorCode::Decode,
            Self::Encode(_) => ArkeoErrorCode::Encode,
            Self::TypeMismatch { .. } => ArkeoErrorCode::TypeMismatch,
            Self::Protocol(_) => ArkeoErrorCode::Protocol,
            Self::Remote { .. } => ArkeoErrorCode::Remote,
            Self::RateLimited { .. } => ArkeoErrorCode::RateLimited,
            Self::Internal(_) => ArkeoErrorCode::Internal,
        }
    }

    /// Get the error message as an owned String.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if this error is potentially recoverable by retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_)
            | Self::ConnectionFailed { .. }
            | Self::ConnectionTimeout { .. }
            | Self::RateLimited { .. } => true,
            Self::Remote { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns a suggested retry delay in milliseconds, if applicable.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms } => Some(*retry_after_ms),
            Self::ConnectionTimeout { .. } => Some(1000),
            Self::ConnectionFailed { .. } => Some(2000),
            Self::Transport(_) => Some(1000),
            Self::Remote { status, .. } if *status >= 500 => Some(2000),
            _ => None,
        }
    }

    /// Create a transport error from any error type.
    pub fn transport<E: std::error::Error>(err: E) -> Self {
        Self::Transport(err.to_string())
    }

    /// Create a not found error.
    pub fn not_found(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    /// Create an invalid data error.
    pub fn invalid_data(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for ArkeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unimplemented(label) => write!(f, "{} is not implemented", label),
            Self::Transport(msg) => write!(f, "transport error: {}", msg),
            Self::ConnectionFailed { target, reason } => {
                write!(f, "connection to {} failed: {}", target, reason)
            }
            Self::ConnectionTimeout {
                operation,
                timeout_ms,
            } => {
                write!(f, "{} timed out after {}ms", operation, timeout_ms)
            }
            Self::NotFound {
                resource_type,
                identifier,
            } => {
                write!(f, "{} not found: {}", resource_type, identifier)
            }
            Self::UnknownType(type_url) => write!(f, "unknown message type: {}", type_url),
            Self::InvalidData { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
            Self::Validation(err) => write!(f, "validation failed: {}", err),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
            Self::Decode(msg) => write!(f, "decode error: {}", msg),
            Self::Encode(msg) => write!(f, "encode error: {}", msg),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "expected {} but found {}", expected, actual)
            }
            Self::Protocol(msg) => write!(f, "protocol error: {}", msg),
            Self::Remote {
                status,
                code,
                message,
            } => {
                write!(f, "chain returned {} (code {}): {}", status, code, message)
            }
            Self::RateLimited { retry_after_ms } => {
                write!(f, "rate limited, retry after {}ms", retry_after_ms)
            }
            Self::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for ArkeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ArkeoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<prost::DecodeError> for ArkeoError {
    fn from(err: prost::DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<prost::EncodeError> for ArkeoError {
    fn from(err: prost::EncodeError) -> Self {
        Self::Encode(err.to_string())
    }
}

impl From<ValidationError> for ArkeoError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}
