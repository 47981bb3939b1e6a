use thiserror::Error;

/// Errors raised while talking to the prediction service or loading config
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictorError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("Invalid response: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PredictorError {
    fn from(err: std::io::Error) -> Self {
        PredictorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PredictorError {
    fn from(err: serde_json::Error) -> Self {
        PredictorError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for PredictorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return PredictorError::Parse(err.to_string());
        }
        match err.status() {
            Some(status) => PredictorError::Api {
                code: status.as_u16(),
                message: err.to_string(),
            },
            None => PredictorError::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
