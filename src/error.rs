//! Error types for catalog and unit construction

use thiserror::Error;

/// A mandatory attribute was absent at construction time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} must be specified")]
pub struct MissingFieldError {
    /// Name of the first missing field
    pub field: &'static str,
}

impl MissingFieldError {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}

/// Errors that can occur while building or querying the miniature catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Lookup of a key the catalog does not hold
    #[error("no miniature with key '{key}'")]
    KeyNotFound { key: String },

    /// Two producers generated the same key
    #[error("duplicate catalog key: {key}")]
    DuplicateKey { key: String },

    /// A producer yielded an incomplete record
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

impl CatalogError {
    /// Create a key-not-found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create a duplicate-key error
    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = MissingFieldError::new("built");
        assert_eq!(err.to_string(), "built must be specified");
    }

    #[test]
    fn test_key_not_found_display() {
        let err = CatalogError::not_found("atlas_0");
        assert!(err.to_string().contains("atlas_0"));
    }

    #[test]
    fn test_missing_field_converts() {
        let err: CatalogError = MissingFieldError::new("paint").into();
        assert_eq!(err.to_string(), "paint must be specified");
        assert!(matches!(err, CatalogError::MissingField(_)));
    }
}
