use thiserror::Error;

/// Error types for the bilobe library.
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// The requested grid domain is empty or inverted.
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// The requested grid resolution cannot produce a mesh.
    #[error("Invalid resolution: {0}")]
    InvalidResolution(String),

    /// `recompute` was invoked on the abstract family capability.
    #[error("Variant '{0}' does not implement recompute")]
    UnimplementedVariant(String),

    /// A parameter name outside the variant's schema was referenced.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// A variant name missed the registry lookup.
    #[error("Unknown variant '{name}'; available variants are: {available}")]
    UnknownVariant { name: String, available: String },

    /// Error for invalid parameter bounds.
    #[error("Bounds error: {0}")]
    BoundsError(String),

    /// Error raised by the drawing backend.
    #[error("Render error: {0}")]
    RenderError(String),
}

/// Result type alias for bilobe operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;

// Add From implementation for BoundsError
impl From<crate::parameters::bounds::BoundsError> for SurfaceError {
    fn from(err: crate::parameters::bounds::BoundsError) -> Self {
        SurfaceError::BoundsError(format!("{}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SurfaceError::InvalidDomain("x_min (2) must be less than x_max (1)".to_string());
        assert!(format!("{}", err).contains("x_min (2) must be less than x_max (1)"));

        let err = SurfaceError::UnknownVariant {
            name: "mystery".to_string(),
            available: "gpap".to_string(),
        };
        let message = format!("{}", err);
        assert!(message.contains("mystery"));
        assert!(message.contains("gpap"));
    }

    #[test]
    fn test_error_conversion() {
        let bounds_err =
            crate::parameters::bounds::BoundsError::InvalidBounds { min: 2.0, max: 1.0 };
        let err: SurfaceError = bounds_err.into();

        match err {
            SurfaceError::BoundsError(message) => assert!(message.contains("min (2)")),
            _ => panic!("Expected BoundsError variant"),
        }
    }
}
