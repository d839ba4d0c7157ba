/// Body loading and validation error type.
#[derive(Debug)]
pub enum BodyError {
    /// IO error.
    IoError(crate::io::IoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for BodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            BodyError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for BodyError {
    fn from(error: crate::io::IoError) -> Self {
        BodyError::IoError(error)
    }
}

/// Result type for the `body` module.
pub type ProcResult<T> = std::result::Result<T, BodyError>;

/// Create a `BodyError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(BodyError::StringOnly(error_str.to_string()))
}
