use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    /// Startup configuration is incomplete or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable credential for the analysis model
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Transport or HTTP failure talking to the analysis model
    #[error("Network error: {0}")]
    Network(String),

    #[error("Analysis model returned no text")]
    EmptyResponse,

    /// Model output is not JSON or lacks a required field
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),

    #[error("Score {field} out of range 1-10: {value}")]
    ScoreOutOfRange { field: &'static str, value: f64 },

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Image or record write failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Streak or weekly statistics update failure
    #[error("Aggregation error: {0}")]
    Aggregation(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Errors that left nothing behind and can be retried as a whole `log_meal` call.
    pub fn is_transient(&self) -> bool {
        matches!(self, CoreError::Network(_) | CoreError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_and_empty_response_are_transient() {
        assert!(CoreError::Network("reset".to_string()).is_transient());
        assert!(CoreError::EmptyResponse.is_transient());
        assert!(!CoreError::MalformedResponse("x".to_string()).is_transient());
        assert!(!CoreError::Storage("disk full".to_string()).is_transient());
    }

    #[test]
    fn score_error_names_the_field() {
        let err = CoreError::ScoreOutOfRange {
            field: "healthScore",
            value: 11.0,
        };
        assert_eq!(err.to_string(), "Score healthScore out of range 1-10: 11");
    }
}
