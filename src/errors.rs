#[derive(Debug, thiserror::Error)]
pub enum FreeProxyError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to parse API response: {0}")]
    Parse(String),
    #[error("API Error [{status}]: {api_message}")]
    Api { status: u16, api_message: String },
    #[error("Request Error: {0}")]
    Request(String),
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl FreeProxyError {
    /// HTTP status code, set only when the API answered with a non-2xx status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FreeProxyError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw error message supplied by the API, when one was extracted.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            FreeProxyError::Api { api_message, .. } => Some(api_message),
            _ => None,
        }
    }

    /// Builds the error for a non-2xx response from its status and raw body.
    ///
    /// The body is probed as JSON: an `error` field wins, any other JSON is
    /// re-serialized whole, and a non-JSON body is carried verbatim.
    pub(crate) fn from_api_response(status: u16, body: &str) -> Self {
        let api_message = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => match value.get("error").and_then(|e| e.as_str()) {
                Some(msg) => msg.to_string(),
                None => value.to_string(),
            },
            Err(_) => body.to_string(),
        };
        FreeProxyError::Api {
            status,
            api_message,
        }
    }
}
