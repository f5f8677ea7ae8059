use std::fmt;

/// Errors raised while turning a selection into a render plan
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotFound(String),
    DataIntegrity(String),
    InvalidInput(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::NotFound(msg) => write!(f, "not found: {}", msg),
            MapError::DataIntegrity(msg) => write!(f, "data integrity: {}", msg),
            MapError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

pub type MapResult<T> = Result<T, MapError>;
