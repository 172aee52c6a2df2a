use std::fmt;

/// Failure to read one of the catalog's JSON documents as a whole.
///
/// Individual malformed entries inside a readable document are not errors; the
/// index skips them and records a [`crate::CatalogIssue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse {
        document: &'static str,
        message: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse { document, message } => {
                write!(f, "catalog document {} is not valid JSON: {}", document, message)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Failure of the key-value persistence port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    LockPoisoned(&'static str),
    Io(String),
    Serde(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Io(message) => write!(f, "storage io error: {}", message),
            StorageError::Serde(message) => write!(f, "storage serialization error: {}", message),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serde(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Engine configuration could not be read or is out of range.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "engine config parse error: {}", message),
            ConfigError::Invalid { field, reason } => {
                write!(f, "engine config field {} is invalid: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
