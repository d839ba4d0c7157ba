use crate::{
    args,
    body,
    io,
    picking,
};

/// Error-type enum for the `vtarget` crate.
#[derive(Debug)]
pub enum VtargetError {
    ArgError(args::ArgError),
    BodyError(body::BodyError),
    PickingError(picking::PickingError),
    IoError(io::IoError),
    StringOnly(String),
}
impl std::fmt::Display for VtargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VtargetError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            VtargetError::BodyError(error) => write!(f, "! BODY ERROR:\n{}", error),
            VtargetError::PickingError(error) => write!(f, "! PICKING ERROR:\n{}", error),
            VtargetError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            VtargetError::StringOnly(error) => write!(f, "! VTARGET ERROR:\n- {}", error),
        }
    }
}
impl From<String> for VtargetError {
    fn from(error: String) -> Self {
        VtargetError::StringOnly(error)
    }
}
impl From<args::ArgError> for VtargetError {
    fn from(error: args::ArgError) -> Self {
        VtargetError::ArgError(error)
    }
}
impl From<body::BodyError> for VtargetError {
    fn from(error: body::BodyError) -> Self {
        VtargetError::BodyError(error)
    }
}
impl From<picking::PickingError> for VtargetError {
    fn from(error: picking::PickingError) -> Self {
        VtargetError::PickingError(error)
    }
}
impl From<io::IoError> for VtargetError {
    fn from(error: io::IoError) -> Self {
        VtargetError::IoError(error)
    }
}

/// Result type for the `vtarget` crate.
pub type VtargetResult<T> = std::result::Result<T, VtargetError>;

/// Create a `VtargetResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::VtargetError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> VtargetResult<T> {
    Err(VtargetError::StringOnly(error_str.to_string()))
}
