use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request/response exchange with the backend.
///
/// Implementations return the decoded JSON body on 2xx (`Value::Null` for an
/// empty body) and a [`crate::GatewayError`] otherwise. The UI runs on a single
/// thread, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait Gateway {
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value>;
}

/// Pull the human-readable message out of an error body.
///
/// The backend answers errors with `{"error": "..."}`; some middleware uses
/// `{"message": "..."}`. Plain-text bodies are used as they are.
pub fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["error", "message"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        Ok(Value::String(s)) => Some(s),
        Ok(_) => None,
        Err(_) if !trimmed.starts_with('<') => Some(trimmed.to_string()),
        Err(_) => None,
    }
}
