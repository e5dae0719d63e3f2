use std::fmt;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Failure of one request. Every variant is terminal for that attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never produced a response (DNS, refused, timeout, ...)
    Network(String),

    /// The server answered with a non-2xx status
    Http {
        status: u16,
        message: Option<String>,
    },

    /// The response body did not have the expected shape
    Decode(String),

    /// The gateway could not be constructed
    Config(String),
}

impl GatewayError {
    pub fn http(status: u16, message: Option<String>) -> Self {
        GatewayError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GatewayError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Network(_))
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "Network error: {}", msg),
            GatewayError::Http {
                status,
                message: Some(msg),
            } => write!(f, "HTTP {}: {}", status, msg),
            GatewayError::Http {
                status,
                message: None,
            } => write!(f, "HTTP {}", status),
            GatewayError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            GatewayError::Config(msg) => write!(f, "Gateway configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}
