/*
[INPUT]:  Error sources (HTTP, cipher, envelope, API response)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the bitbitx adapter
#[derive(Error, Debug)]
pub enum BitbitxError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange returned a non-zero returnCode
    #[error("API error (code {code}): {message}")]
    Api { code: String, message: String },

    /// DES3 key has an unsupported length
    #[error("invalid DES3 key length: expected 16 or 24 bytes, got {length}")]
    InvalidKey { length: usize },

    /// Request payload could not be encrypted
    #[error("DES3 encrypt error: {0}")]
    Encrypt(String),

    /// Response body could not be base64-decoded or DES3-decrypted
    #[error("DES3 decrypt error: {0}")]
    Decrypt(String),

    /// Decrypted response body is not the expected JSON shape
    #[error("malformed response, possibly wrong DES3 key: {0}")]
    MalformedResponse(String),

    /// Authenticated call attempted without a logged-in session
    #[error("not authenticated, call login first")]
    NotAuthenticated,

    /// Request serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl BitbitxError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, BitbitxError::Http(_))
    }

    /// Check if error indicates a missing or rejected session
    pub fn is_auth_error(&self) -> bool {
        matches!(self, BitbitxError::NotAuthenticated)
    }

    /// Check if error may be caused by a wrong or malformed DES3 key.
    ///
    /// A wrong key surfaces either as a decrypt failure (padding does not
    /// verify) or as garbage that fails JSON parsing; the server gives no
    /// way to tell the two apart.
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            BitbitxError::InvalidKey { .. }
                | BitbitxError::Encrypt(_)
                | BitbitxError::Decrypt(_)
                | BitbitxError::MalformedResponse(_)
        )
    }

    /// Create an API error from the response envelope fields
    pub fn api_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        BitbitxError::Api {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for bitbitx operations
pub type Result<T> = std::result::Result<T, BitbitxError>;
