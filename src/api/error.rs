//! Error types for the Kaiascan API client.

use thiserror::Error;

/// Boxed cause carried by connection failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure a call can produce.
///
/// Each variant is a distinct kind; callers branch on it directly or via
/// [`KaiascanError::kind`].
#[derive(Debug, Error)]
pub enum KaiascanError {
    /// A caller-supplied argument failed a precondition. Raised before any
    /// network activity.
    #[error("Invalid parameter `{field}`: {reason}")]
    Validation { field: String, reason: String },

    /// The server answered with a non-2xx status. The body is not decoded.
    #[error("HTTP status {status} from {url}")]
    Transport { status: u16, url: String },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Connection to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The body is not JSON, or does not have the `{code, data, msg}` shape,
    /// or `data` does not match the expected result type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope decoded but `code != 0`.
    #[error("API error {code}: {msg}")]
    Api {
        code: i64,
        msg: String,
        /// The full envelope as received.
        envelope: serde_json::Value,
    },
}

/// Result type alias for API operations.
pub type KaiascanResult<T> = Result<T, KaiascanError>;

/// Discriminant of [`KaiascanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Transport,
    Connection,
    Decode,
    Api,
}

impl KaiascanError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        KaiascanError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            KaiascanError::Validation { .. } => ErrorKind::Validation,
            KaiascanError::Transport { .. } => ErrorKind::Transport,
            KaiascanError::Connection { .. } => ErrorKind::Connection,
            KaiascanError::Decode(_) => ErrorKind::Decode,
            KaiascanError::Api { .. } => ErrorKind::Api,
        }
    }

    /// HTTP status code, for non-2xx transport failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            KaiascanError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Application-level envelope code, for rejected requests.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            KaiascanError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for both HTTP-status and connection failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            KaiascanError::Transport { .. } | KaiascanError::Connection { .. }
        )
    }

    /// Name of the offending field, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            KaiascanError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
