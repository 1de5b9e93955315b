//! Graphics error types.

use thiserror::Error;

use crate::types::ShaderStage;

/// Errors that can occur when creating resources and pipelines.
///
/// Configuration errors are reported synchronously by the creation call and
/// are never retried; rebuild the descriptor and create again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// A required shader stage is not present.
    #[error("missing shader stage: {0}")]
    ShaderStageMissing(String),
    /// A shader slot holds a shader of the wrong stage.
    #[error("shader in {slot} slot has stage {found:?}, expected {expected:?}")]
    ShaderStageMismatch {
        /// Descriptor slot name.
        slot: &'static str,
        /// Stage the slot requires.
        expected: ShaderStage,
        /// Stage of the supplied shader.
        found: ShaderStage,
    },
    /// The primitive topology does not match the shader stages present.
    #[error("invalid topology configuration: {0}")]
    InvalidTopology(String),
    /// An invalid parameter was provided.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The backend ran out of pipeline or memory resources.
    #[error("backend resources exhausted: {0}")]
    ResourceExhausted(String),
    /// The device or backend does not support the requested feature.
    #[error("feature not supported: {0}")]
    FeatureNotSupported(String),
    /// `create` was called on an object that is already created.
    #[error("{0} has already been created")]
    AlreadyCreated(String),
    /// The object has not been created yet.
    #[error("object has not been created")]
    NotCreated,
}

/// Result alias used across the crate.
pub type GraphicsResult<T> = Result<T, GraphicsError>;
