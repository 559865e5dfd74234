use thiserror::Error;

/// Custom error types for geocomplete
#[derive(Debug, Error)]
pub enum GeocompleteError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Places API error (HTTP {code}): {message}")]
    Api { code: u16, message: String },

    #[error("Failed to parse Places API response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = GeocompleteError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_api_error_display_includes_status_code() {
        let err = GeocompleteError::Api {
            code: 403,
            message: "request denied".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("request denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GeocompleteError = io_err.into();
        assert!(matches!(err, GeocompleteError::Io(_)));
    }
}
