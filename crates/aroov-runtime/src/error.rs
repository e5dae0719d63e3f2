use std::fmt;

/// Result type for aroov-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// A backend request failed
    Gateway(aroov_client::GatewayError),

    /// Client-side validation failed
    InvalidInput(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gateway(err) => write!(f, "{}", err),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Gateway(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::InvalidInput(_) | Error::Config(_) => None,
        }
    }
}

impl From<aroov_client::GatewayError> for Error {
    fn from(err: aroov_client::GatewayError) -> Self {
        Error::Gateway(err)
    }
}

impl From<aroov_types::Error> for Error {
    fn from(err: aroov_types::Error) -> Self {
        match err {
            aroov_types::Error::InvalidInput(msg) => Error::InvalidInput(msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
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
