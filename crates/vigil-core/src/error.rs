//! Error types for vigil-core

use std::fmt;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while monitoring workflows
#[derive(Debug)]
pub enum Error {
    /// Invalid configuration
    Config(String),

    /// JSON parsing or serialization error
    Json(String),

    /// I/O error
    Io(std::io::Error),

    /// HTTP transport error
    Http(String),

    /// GitHub API error (unexpected status, undecodable body)
    Api(String),

    /// API rate limit exceeded
    RateLimit(String),

    /// Dashboard template error
    Template(String),

    /// Runtime error (Tokio, threading, etc.)
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Json(msg) => write!(f, "JSON error: {}", msg),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Http(msg) => write!(f, "HTTP error: {}", msg),
            Error::Api(msg) => write!(f, "GitHub API error: {}", msg),
            Error::RateLimit(msg) => write!(f, "Rate limit exceeded: {}", msg),
            Error::Template(msg) => write!(f, "Template error: {}", msg),
            Error::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// Fieldless category tag for [`Error`].
///
/// `Copy` and one byte wide, so callers can branch on the category
/// without touching the message allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Configuration error
    Config,
    /// JSON parsing or serialization error
    Json,
    /// I/O operation error
    Io,
    /// HTTP transport error
    Http,
    /// GitHub API error
    Api,
    /// API rate limit exceeded
    RateLimit,
    /// Dashboard template error
    Template,
    /// Runtime error
    Runtime,
}

impl Error {
    /// Categorize the error without borrowing or cloning its message.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Json(_) => ErrorKind::Json,
            Error::Io(_) => ErrorKind::Io,
            Error::Http(_) => ErrorKind::Http,
            Error::Api(_) => ErrorKind::Api,
            Error::RateLimit(_) => ErrorKind::RateLimit,
            Error::Template(_) => ErrorKind::Template,
            Error::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Borrow the message without formatting the whole error.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Error::Config(msg)
            | Error::Json(msg)
            | Error::Http(msg)
            | Error::Api(msg)
            | Error::RateLimit(msg)
            | Error::Template(msg)
            | Error::Runtime(msg) => msg,
            Error::Io(_) => "I/O error",
        }
    }
}
