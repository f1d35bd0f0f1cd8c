//! Error types for copyrank-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while analyzing a document.
///
/// The scoring contract itself never errors: an assessment that cannot be
/// evaluated returns an unscored result instead (see
/// [`crate::assessments::AssessmentResult::unscored`]). These variants cover
/// the surrounding machinery.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The document has no scorable text.
    #[error("no scorable text in document")]
    EmptyInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
