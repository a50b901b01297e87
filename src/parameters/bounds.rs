//! Parameter bounds implementation
//!
//! This module provides the inclusive `[min, max]` range that constrains a
//! surface parameter's adjustable value. Bounds are validated at
//! construction and are the source of truth for the limits of the UI
//! control bound to the parameter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when working with parameter bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Invalid bounds: min ({min}) must not be greater than max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Default value {value} is outside bounds: [{min}, {max}]")]
    DefaultOutsideBounds { value: f64, min: f64, max: f64 },
}

/// Represents the bounds constraints on a parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum allowed value for the parameter
    pub min: f64,

    /// Maximum allowed value for the parameter
    pub max: f64,
}

impl Bounds {
    /// Create a new bounds constraint with min and max values
    ///
    /// # Arguments
    ///
    /// * `min` - Minimum allowed value for the parameter
    /// * `max` - Maximum allowed value for the parameter
    ///
    /// # Returns
    ///
    /// A new `Bounds` object if min <= max, or an error otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use bilobe::parameters::bounds::Bounds;
    ///
    /// let bounds = Bounds::new(0.0, 3.0).unwrap();
    /// assert_eq!(bounds.min, 0.0);
    /// assert_eq!(bounds.max, 3.0);
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::InvalidBounds { min, max });
        }

        Ok(Self { min, max })
    }

    /// Check if a value is within the bounds
    ///
    /// # Arguments
    ///
    /// * `value` - Value to check
    ///
    /// # Returns
    ///
    /// `true` if the value is within the bounds, `false` otherwise
    pub fn is_within_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value to be within the bounds
    ///
    /// # Arguments
    ///
    /// * `value` - Value to clamp
    ///
    /// # Returns
    ///
    /// The value clamped to be within the bounds
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_creation() {
        // Valid bounds
        let bounds = Bounds::new(0.0, 1.0).unwrap();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 1.0);

        // Degenerate but legal bounds (min == max)
        let bounds = Bounds::new(0.5, 0.5).unwrap();
        assert_eq!(bounds.min, bounds.max);

        // Invalid bounds (min > max)
        let result = Bounds::new(1.0, 0.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_within_bounds() {
        let bounds = Bounds::new(0.0, 3.0).unwrap();

        assert!(bounds.is_within_bounds(0.0));
        assert!(bounds.is_within_bounds(1.5));
        assert!(bounds.is_within_bounds(3.0));

        assert!(!bounds.is_within_bounds(-0.1));
        assert!(!bounds.is_within_bounds(3.1));
    }

    #[test]
    fn test_clamp() {
        let bounds = Bounds::new(0.0, 3.0).unwrap();

        assert_eq!(bounds.clamp(-1.0), 0.0);
        assert_eq!(bounds.clamp(1.5), 1.5);
        assert_eq!(bounds.clamp(5.0), 3.0);
    }
}
