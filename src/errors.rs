use std::fmt;

use axum::http::header::InvalidHeaderValue;

#[derive(Debug)]
pub enum StartupError {
    DotenvError(dotenvy::Error),
    IoError(std::io::Error),
    InvalidOriginError(InvalidHeaderValue),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::DotenvError(error) => write!(f, "failed to load .env: {error}"),
            StartupError::IoError(error) => write!(f, "server i/o error: {error}"),
            StartupError::InvalidOriginError(error) => write!(f, "invalid CORS origin: {error}"),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<dotenvy::Error> for StartupError {
    fn from(error: dotenvy::Error) -> Self {
        StartupError::DotenvError(error)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(error: std::io::Error) -> Self {
        StartupError::IoError(error)
    }
}

impl From<InvalidHeaderValue> for StartupError {
    fn from(error: InvalidHeaderValue) -> Self {
        StartupError::InvalidOriginError(error)
    }
}
