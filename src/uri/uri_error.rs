use std::fmt;

/// Errors raised while parsing the long form of a resource identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The input was empty.
    Empty,
    /// The input did not have the `/entity/version/resource` shape.
    Malformed(String),
    /// The version segment was present but not a valid major version.
    InvalidVersion(String),
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriError::Empty => write!(f, "URI is empty"),
            UriError::Malformed(uri) => write!(f, "Malformed URI: {}", uri),
            UriError::InvalidVersion(version) => write!(f, "Invalid entity version: {}", version),
        }
    }
}

impl std::error::Error for UriError {}
