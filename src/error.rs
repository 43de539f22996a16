//! Error types for consumer construction.

use thiserror::Error;

/// Result type for factory operations
///
/// **Mandatory public API** - all factory entry points return this.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Error types for the construction pipeline
///
/// Every gate in the pipeline is terminal on failure: none of these are
/// caught or retried internally, and no partial consumer is ever returned.
#[derive(Error, Debug)]
pub enum FactoryError {
    /// Configuration error - detected before any filesystem or network access
    ///
    /// Examples: secure transport enabled with secrets supplied inline,
    /// empty topic, missing mandatory environment variables
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required certificate/keystore file is absent at the expected path
    ///
    /// Not retryable; the caller must provision the file.
    #[error("Missing file: {path} - upload it to the configured secure storage location")]
    MissingFile { path: String },

    /// The external secret resolver failed or returned an unusable payload
    #[error("Secret resolution error: {0}")]
    Secrets(String),

    /// The underlying client failed to build
    ///
    /// Wraps the original cause and tags it with the topic name so callers
    /// have one stable error surface across the construction boundary.
    #[error("Failed to construct consumer for topic '{topic}': {message}")]
    Construction {
        topic: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FactoryError {
    /// Check if this error is a configuration rejection
    pub fn is_configuration(&self) -> bool {
        matches!(self, FactoryError::Configuration(_))
    }

    /// Check if this error names a missing keystore/truststore file
    pub fn is_missing_file(&self) -> bool {
        matches!(self, FactoryError::MissingFile { .. })
    }

    /// Check if this error came from the underlying client construction
    pub fn is_construction(&self) -> bool {
        matches!(self, FactoryError::Construction { .. })
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        FactoryError::Configuration(message.into())
    }

    /// Create a missing-file error naming the offending path
    pub fn missing_file(path: impl Into<String>) -> Self {
        FactoryError::MissingFile { path: path.into() }
    }

    /// Create a secret resolution error
    pub fn secrets(message: impl Into<String>) -> Self {
        FactoryError::Secrets(message.into())
    }

    /// Create a construction error wrapping the underlying cause
    pub fn construction_with_source(
        topic: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FactoryError::Construction {
            topic: topic.into(),
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let config = FactoryError::config("inline secret");
        assert!(config.is_configuration());
        assert!(!config.is_missing_file());

        let missing = FactoryError::missing_file("/etc/keystore.jks");
        assert!(missing.is_missing_file());
        assert!(!missing.is_construction());
    }

    #[test]
    fn test_missing_file_display_names_path() {
        let err = FactoryError::missing_file("/certs/truststore.jks");
        assert!(err.to_string().contains("/certs/truststore.jks"));
    }

    #[test]
    fn test_construction_display_carries_topic_and_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "network down");
        let err = FactoryError::construction_with_source("orders", cause);
        let msg = err.to_string();
        assert!(msg.contains("orders"));
        assert!(msg.contains("network down"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
