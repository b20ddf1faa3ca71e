//! Error types for muscle generation
//!
//! Geometry generation only ever fails with [`MuscleGenError::InvalidParameter`].
//! The remaining variants belong to the preset, configuration and file layers.

use thiserror::Error;

/// Error types for muscle generation operations
#[derive(Error, Debug)]
pub enum MuscleGenError {
    /// An argument violated its documented precondition
    ///
    /// Carries the parameter name, the offending value (formatted) and the
    /// constraint it broke. Generation is all-or-nothing, so no partial output
    /// exists when this is returned.
    #[error("Invalid parameter `{name}` = {value}: {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        constraint: String,
    },

    /// Requested muscle preset does not exist in the preset library
    #[error("Muscle preset not found: {0}")]
    PresetNotFound(String),

    /// Configuration error
    ///
    /// Invalid configuration file format, missing required fields,
    /// or an asset file that could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// VTK file writing error
    #[error("VTK error: {0}")]
    VtkError(String),
}

impl MuscleGenError {
    /// Build an [`MuscleGenError::InvalidParameter`] from any displayable value
    pub fn invalid(
        name: &'static str,
        value: impl std::fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        MuscleGenError::InvalidParameter {
            name,
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }
}

/// Convenience type alias for Results with [`MuscleGenError`]
///
/// # Example
/// ```
/// use muscle_gen::Result;
///
/// fn my_function() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, MuscleGenError>;

/// Fail with `InvalidParameter` unless `value` is a finite real
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MuscleGenError::invalid(name, value, "must be a finite number"))
    }
}
