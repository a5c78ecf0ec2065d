//! Error types for Hookkit
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

use crate::constants::{COMMON_ERROR_MSG, PARSE_ERROR_MSG};

/// Main error type for the library
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// No tokio runtime could be found or built
    #[snafu(display("No async runtime available"))]
    NoRuntime,

    /// IO error (config file access)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization error (request bodies)
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// Transport-level HTTP failure (DNS, connect, TLS, reset)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Server answered with a non-success status
    #[snafu(display("Bad response status: {status}"))]
    Status { status: u16 },

    /// Response body was not valid JSON for the expected type
    #[snafu(display("Unable to parse response: {source}"))]
    Parse { source: serde_json::Error },

    /// Request was aborted by its signal
    #[snafu(display("Request aborted"))]
    Aborted,

    /// Timeout error
    #[snafu(display("Timeout: {message}"))]
    Timeout { message: String },
}

impl Error {
    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            Error::Status { status } => message_for_status(*status).to_string(),
            Error::Parse { .. } => PARSE_ERROR_MSG.to_string(),
            _ => COMMON_ERROR_MSG.to_string(),
        }
    }

    /// Whether this error came from a cancelled request
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Aborted)
    }
}

/// Map an HTTP status code to a displayable message
pub fn message_for_status(status: u16) -> &'static str {
    match status {
        400 => "Bad request, please enter require details then try again",
        401 | 403 => "Unauthorized to access",
        _ => COMMON_ERROR_MSG,
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return Error::Timeout {
                message: source.to_string(),
            };
        }
        Error::Http { source }
    }
}

/// Errors surfaced through a state's `String` error slot
impl From<Error> for String {
    fn from(error: Error) -> Self {
        error.user_message()
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(
            message_for_status(400),
            "Bad request, please enter require details then try again"
        );
        assert_eq!(message_for_status(401), "Unauthorized to access");
        assert_eq!(message_for_status(403), "Unauthorized to access");
        assert_eq!(message_for_status(500), COMMON_ERROR_MSG);
        assert_eq!(message_for_status(504), COMMON_ERROR_MSG);
        assert_eq!(message_for_status(418), COMMON_ERROR_MSG);
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            Error::Status { status: 403 }.user_message(),
            "Unauthorized to access"
        );
        let parse = serde_json::from_str::<u32>("nope").expect_err("should fail");
        assert_eq!(Error::Parse { source: parse }.user_message(), PARSE_ERROR_MSG);
        assert_eq!(Error::Aborted.user_message(), COMMON_ERROR_MSG);
        assert!(Error::Aborted.is_aborted());
        assert_eq!(String::from(Error::NoRuntime), COMMON_ERROR_MSG);
    }
}
