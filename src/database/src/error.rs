use std::fmt;

/// Failure to load one of the startup documents. Terminal for the process.
#[derive(Debug)]
pub enum LoadError {
    Io {
        document: String,
        source: std::io::Error,
    },
    Parse {
        document: String,
        source: serde_json::Error,
    },
    GeoJson {
        document: String,
        source: Box<geojson::Error>,
    },
    Format {
        document: String,
        message: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { document, source } => write!(f, "failed to read {}: {}", document, source),
            LoadError::Parse { document, source } => write!(f, "failed to parse {}: {}", document, source),
            LoadError::GeoJson { document, source } => write!(f, "invalid GeoJSON in {}: {}", document, source),
            LoadError::Format { document, message } => write!(f, "unexpected content in {}: {}", document, message),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            LoadError::GeoJson { source, .. } => Some(source.as_ref()),
            LoadError::Format { .. } => None,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
