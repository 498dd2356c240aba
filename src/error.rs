// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(HttpError),
    Decode(String),
}

/// Failures talking to the gallery service.
/// The gallery treats every variant the same way; the distinction only
/// shows up in log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    Request(String),

    /// The service answered with a non-success status code
    Status(u16),

    /// The response body could not be read to the end
    Body(String),

    /// A URL could not be built from the base URL and a file name
    InvalidUrl(String),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Request(msg) => write!(f, "Request failed: {}", msg),
            HttpError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            HttpError::Body(msg) => write!(f, "Failed to read response body: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Error::Http(HttpError::Status(status.as_u16()))
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else if err.is_body() {
            Error::Http(HttpError::Body(err.to_string()))
        } else {
            Error::Http(HttpError::Request(err.to_string()))
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
