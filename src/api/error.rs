use reqwest::StatusCode;
use thiserror::Error;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication rejected with status {0}")]
    Auth(StatusCode),

    #[error("Response missing or invalid {0} header")]
    MissingHeader(&'static str),

    #[error("{method} {url} failed with status {status}: {body}")]
    Api {
        method: &'static str,
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Malformed response from {url}: {detail}")]
    Decode { url: String, detail: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl StorageError {
    /// Truncate a response body to avoid carrying excessive data in messages
    fn truncate_body(body: &str) -> String {
        match body.char_indices().nth(MAX_ERROR_BODY_LENGTH) {
            Some((cut, _)) => format!(
                "{}... (truncated, {} total bytes)",
                &body[..cut],
                body.len()
            ),
            None => body.to_string(),
        }
    }

    pub(crate) fn api(method: &'static str, url: &str, status: StatusCode, body: &str) -> Self {
        let body = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string()
        } else {
            Self::truncate_body(body)
        };
        StorageError::Api {
            method,
            url: url.to_string(),
            status,
            body,
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            StorageError::Auth(status) => Some(*status),
            StorageError::Api { status, .. } => Some(*status),
            StorageError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// True when the service rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}
