//! Error types for the coastline SDK.
//!
//! This module defines the error type used for every fallible operation in
//! the crate: HTTP-level failures reported by the listing service, transport
//! failures that occur before a status is received, and local failures such
//! as I/O or configuration problems.

use std::error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the coastline SDK.
#[derive(Clone, Debug)]
pub enum Error {
    /// A generic API error occurred (non-2xx status not covered by a more
    /// specific variant).
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Human-readable error message (the response body text, or a
        /// generic fallback when the body was empty).
        message: String,
    },

    /// Authentication failed (HTTP 401).
    Authentication {
        /// Human-readable error message.
        message: String,
    },

    /// The session is valid but not allowed to do this (HTTP 403).
    Permission {
        /// Human-readable error message.
        message: String,
    },

    /// Resource not found (HTTP 404).
    NotFound {
        /// Human-readable error message.
        message: String,
    },

    /// Bad request due to invalid parameters (HTTP 400).
    BadRequest {
        /// Human-readable error message.
        message: String,
    },

    /// Server returned a 500 internal error.
    InternalServer {
        /// Human-readable error message.
        message: String,
    },

    /// Server is overloaded or unavailable (HTTP 502-504).
    ServiceUnavailable {
        /// Human-readable error message.
        message: String,
    },

    /// The request timed out before the service responded.
    Timeout {
        /// Human-readable error message.
        message: String,
        /// Duration of the timeout in seconds.
        duration: Option<f64>,
    },

    /// Connection error before a status was received.
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// HTTP client error not otherwise classified.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// The response body did not match the expected structure.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// I/O error (e.g. reading a file for upload, or the token store).
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },

    /// The client is misconfigured (e.g. no base URL available).
    Configuration {
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Creates a new API error.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a new authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Creates a new permission error.
    pub fn permission(message: impl Into<String>) -> Self {
        Error::Permission {
            message: message.into(),
        }
    }

    /// Creates a new not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound {
            message: message.into(),
        }
    }

    /// Creates a new bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Error::BadRequest {
            message: message.into(),
        }
    }

    /// Creates a new internal server error.
    pub fn internal_server(message: impl Into<String>) -> Self {
        Error::InternalServer {
            message: message.into(),
        }
    }

    /// Creates a new service unavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Error::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Creates a new timeout error.
    pub fn timeout(message: impl Into<String>, duration: Option<f64>) -> Self {
        Error::Timeout {
            message: message.into(),
            duration,
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Builds the appropriate HTTP-level error for a status code and the
    /// response body text. An empty body gets a generic fallback message.
    pub fn from_status(status_code: u16, body: String) -> Self {
        let message = if body.is_empty() {
            format!("Request failed with status {}", status_code)
        } else {
            body
        };
        match status_code {
            400 => Error::bad_request(message),
            401 => Error::authentication(message),
            403 => Error::permission(message),
            404 => Error::not_found(message),
            500 => Error::internal_server(message),
            503 => Error::service_unavailable(message),
            _ => Error::api(status_code, message),
        }
    }

    /// Returns true if this error is related to authentication.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Returns true if this error is related to permissions.
    pub fn is_permission(&self) -> bool {
        matches!(self, Error::Permission { .. })
    }

    /// Returns true if this error means the bound session should be
    /// discarded and the user sent back through login.
    ///
    /// Clearing the token store on this condition is caller-level policy;
    /// the client itself never does it.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Error::Authentication { .. } | Error::Permission { .. }
        )
    }

    /// Returns true if this error is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// Returns true if this error is a bad request.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Error::BadRequest { .. })
    }

    /// Returns true if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns true if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Returns true if this error is a server-side failure.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::InternalServer { .. } | Error::ServiceUnavailable { .. } => true,
            Error::Api { status_code, .. } => (500..=599).contains(status_code),
            _ => false,
        }
    }

    /// Returns true if this error arose before an HTTP status was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Timeout { .. } | Error::Connection { .. } | Error::HttpClient { .. }
        )
    }

    /// Returns true if the response body could not be parsed.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization { .. })
    }

    /// Returns the status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            Error::BadRequest { .. } => Some(400),
            Error::Authentication { .. } => Some(401),
            Error::Permission { .. } => Some(403),
            Error::NotFound { .. } => Some(404),
            Error::InternalServer { .. } => Some(500),
            Error::ServiceUnavailable { .. } => Some(503),
            _ => None,
        }
    }

    /// Returns the human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Error::Api { message, .. } => message,
            Error::Authentication { message } => message,
            Error::Permission { message } => message,
            Error::NotFound { message } => message,
            Error::BadRequest { message } => message,
            Error::InternalServer { message } => message,
            Error::ServiceUnavailable { message } => message,
            Error::Timeout { message, .. } => message,
            Error::Connection { message, .. } => message,
            Error::HttpClient { message, .. } => message,
            Error::Serialization { message, .. } => message,
            Error::Io { message, .. } => message,
            Error::Url { message, .. } => message,
            Error::Configuration { message } => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api {
                status_code,
                message,
            } => {
                write!(f, "API error (status {status_code}): {message}")
            }
            Error::Authentication { message } => {
                write!(f, "Authentication error: {message}")
            }
            Error::Permission { message } => {
                write!(f, "Permission error: {message}")
            }
            Error::NotFound { message } => {
                write!(f, "Resource not found: {message}")
            }
            Error::BadRequest { message } => {
                write!(f, "Bad request: {message}")
            }
            Error::InternalServer { message } => {
                write!(f, "Internal server error: {message}")
            }
            Error::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {message}")
            }
            Error::Timeout { message, duration } => {
                if let Some(duration) = duration {
                    write!(f, "Timeout error: {message} ({duration} seconds)")
                } else {
                    write!(f, "Timeout error: {message}")
                }
            }
            Error::Connection { message, .. } => {
                write!(f, "Connection error: {message}")
            }
            Error::HttpClient { message, .. } => {
                write!(f, "HTTP client error: {message}")
            }
            Error::Serialization { message, .. } => {
                write!(f, "Serialization error: {message}")
            }
            Error::Io { message, .. } => {
                write!(f, "I/O error: {message}")
            }
            Error::Url { message, .. } => {
                write!(f, "URL error: {message}")
            }
            Error::Configuration { message } => {
                write!(f, "Configuration error: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Connection { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::HttpClient { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Io { source, .. } => Some(source),
            Error::Url { source, .. } => {
                source.as_ref().map(|e| e as &(dyn error::Error + 'static))
            }
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string(), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(format!("JSON error: {err}"), Some(Box::new(err)))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(format!("URL parse error: {err}"), Some(err))
    }
}

/// A specialized Result type for coastline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_known_codes() {
        assert!(Error::from_status(400, "bad".to_string()).is_bad_request());
        assert!(Error::from_status(401, "no".to_string()).is_authentication());
        assert!(Error::from_status(403, "no".to_string()).is_permission());
        assert!(Error::from_status(404, "gone".to_string()).is_not_found());
        assert!(Error::from_status(500, "boom".to_string()).is_server_error());
        assert!(Error::from_status(503, "busy".to_string()).is_server_error());

        let err = Error::from_status(418, "teapot".to_string());
        assert_eq!(err.status_code(), Some(418));
        assert_eq!(err.message(), "teapot");
    }

    #[test]
    fn from_status_empty_body_fallback() {
        let err = Error::from_status(502, String::new());
        assert_eq!(err.message(), "Request failed with status 502");
    }

    #[test]
    fn auth_failure_covers_401_and_403() {
        assert!(Error::from_status(401, "expired".to_string()).is_auth_failure());
        assert!(Error::from_status(403, "forbidden".to_string()).is_auth_failure());
        assert!(!Error::from_status(404, "missing".to_string()).is_auth_failure());
        assert!(!Error::timeout("slow", None).is_auth_failure());
    }

    #[test]
    fn transport_errors_carry_no_status() {
        let err = Error::connection("refused", None);
        assert!(err.is_transport());
        assert_eq!(err.status_code(), None);

        let err = Error::timeout("deadline exceeded", Some(30.0));
        assert!(err.is_transport());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn status_code_preserved_on_mapped_variants() {
        assert_eq!(
            Error::from_status(401, "x".to_string()).status_code(),
            Some(401)
        );
        assert_eq!(
            Error::from_status(403, "x".to_string()).status_code(),
            Some(403)
        );
        assert_eq!(
            Error::from_status(404, "x".to_string()).status_code(),
            Some(404)
        );
    }
}
