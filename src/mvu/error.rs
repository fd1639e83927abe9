use std::fmt;

#[derive(Debug, Clone)]
pub enum AppError {
    Parse(String),
    BadRequest(String),
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Parse(s) => write!(f, "parse error: {s}"),
            AppError::BadRequest(s) => write!(f, "bad request: {s}"),
            AppError::Other(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<String> for AppError {
    fn from(e: String) -> Self {
        Self::Other(e)
    }
}
