//! Error types for the Parlor core crate.

use thiserror::Error;

/// A shared error type for non-backend failures (configuration file I/O
/// and parsing).
///
/// Backend failures have their own taxonomy in [`crate::backend::BackendError`]
/// because the controller reacts to them differently per variant.
#[derive(Error, Debug)]
pub enum ParlorError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },
}

impl From<std::io::Error> for ParlorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for ParlorError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ParlorError>`.
pub type Result<T> = std::result::Result<T, ParlorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_kind() {
        let err: ParlorError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing config").into();
        assert!(matches!(err, ParlorError::Io { .. }));
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn toml_errors_convert_to_serialization() {
        let parse_err = toml::from_str::<toml::Value>("not [ valid").unwrap_err();
        let err: ParlorError = parse_err.into();
        assert!(matches!(err, ParlorError::Serialization { .. }));
        assert!(err.to_string().contains("TOML"));
    }
}
