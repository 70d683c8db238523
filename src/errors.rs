use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Device Error: {0}")]
    Api(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("File I/O Error: {0}")]
    Io(String),

    #[error("Operation Error: {0}")]
    Operation(String),
}

// Allow conversion from std::io::Error to AppError::Io
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

// reqwest failures (connect, timeout, body decode) are all network-kind;
// backend-reported failures are mapped to AppError::Api in the api module.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}
