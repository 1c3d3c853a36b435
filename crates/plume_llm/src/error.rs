//! Error types for provider calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("missing API key for {0}")]
    MissingApiKey(String),

    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::InvalidInput("prompt is empty".to_string());
        assert_eq!(err.to_string(), "invalid input: prompt is empty");
    }

    #[test]
    fn test_request_failed_display() {
        let err = Error::RequestFailed {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "request failed with status 503: overloaded");
    }

    #[test]
    fn test_missing_api_key_display() {
        let err = Error::MissingApiKey("gemini".to_string());
        assert_eq!(err.to_string(), "missing API key for gemini");
    }
}
