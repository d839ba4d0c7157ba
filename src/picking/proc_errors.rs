/// Target picking error type.
#[derive(Debug)]
pub enum PickingError {
    /// The body has no surface to pick on.
    NoSurface(String),
}
impl std::fmt::Display for PickingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickingError::NoSurface(body) => write!(f, "- {} doesn't have a surface", body),
        }
    }
}

/// Result type for the `picking` module.
pub type ProcResult<T> = std::result::Result<T, PickingError>;
