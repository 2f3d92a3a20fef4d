//! Error types for Pawtales
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Transport-level HTTP failure (connect, TLS, body decode)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// Server answered with a non-success status
    #[snafu(display("HTTP {status} from {url}"))]
    Status { status: u16, url: String },

    /// Local storage could not be read or written
    #[snafu(display("Storage error: {message}"))]
    Storage { message: String },

    /// A bundled catalog is missing or malformed
    #[snafu(display("Catalog `{locale}` error: {message}"))]
    Catalog { locale: String, message: String },
}

impl Error {
    /// Whether the failure happened before or while talking to the network
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http { .. } | Error::Status { .. })
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

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
