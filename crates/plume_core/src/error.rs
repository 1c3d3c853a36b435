use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlumeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("export error: {0}")]
    Export(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = PlumeError::InvalidInput("question is empty".to_string());
        assert_eq!(err.to_string(), "invalid input: question is empty");
    }

    #[test]
    fn test_export_error() {
        let err = PlumeError::Export("nothing to export".to_string());
        assert_eq!(err.to_string(), "export error: nothing to export");
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = PlumeError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json");
        let err = PlumeError::from(json_err.unwrap_err());
        assert!(err.to_string().contains("expected value"));
    }
}
