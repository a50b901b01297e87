//! Parameter definition and implementation
//!
//! This module provides the Parameter struct, one tunable scalar of a
//! surface model. A parameter carries its current value, the default it was
//! declared with, and the bounds that constrain the UI control bound to it.

use crate::parameters::bounds::{Bounds, BoundsError};
use serde::{Deserialize, Serialize};

/// One tunable scalar of a surface model's schema.
///
/// The full set of parameters for a model variant is fixed when the variant
/// is defined; only `value` changes afterwards, through the model's single
/// update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Name of the parameter, unique within a model
    name: String,

    /// Current value of the parameter
    value: f64,

    /// Default value the parameter was declared with
    default: f64,

    /// Minimum and maximum bounds for the parameter value
    bounds: Bounds,
}

impl Parameter {
    /// Create a new parameter with the given name, default value, and bounds
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the parameter
    /// * `default` - Default value; also the initial current value
    /// * `min` - Minimum allowed value for the parameter
    /// * `max` - Maximum allowed value for the parameter
    ///
    /// # Returns
    ///
    /// A new parameter, or an error if min > max or the default lies outside
    /// `[min, max]`. The check runs at definition time so an invalid schema
    /// cannot be constructed at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use bilobe::parameters::parameter::Parameter;
    ///
    /// let param = Parameter::with_bounds("spread", 0.8, 0.0, 3.0).unwrap();
    /// assert_eq!(param.name(), "spread");
    /// assert_eq!(param.value(), 0.8);
    /// assert_eq!(param.min(), 0.0);
    /// assert_eq!(param.max(), 3.0);
    /// ```
    pub fn with_bounds(name: &str, default: f64, min: f64, max: f64) -> Result<Self, BoundsError> {
        let bounds = Bounds::new(min, max)?;

        if !bounds.is_within_bounds(default) {
            return Err(BoundsError::DefaultOutsideBounds {
                value: default,
                min,
                max,
            });
        }

        Ok(Self {
            name: name.to_string(),
            value: default,
            default,
            bounds,
        })
    }

    /// Get the current value of the parameter
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value of the parameter
    ///
    /// Values are not clamped to the bounds: interactive controls cannot
    /// produce out-of-bounds values by construction, and programmatic
    /// callers are trusted to respect the bounds themselves.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Get the default value of the parameter
    pub fn default_value(&self) -> f64 {
        self.default
    }

    /// Reset the parameter to its default value
    pub fn reset(&mut self) {
        self.value = self.default;
    }

    /// Get the name of the parameter
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the minimum allowed value for the parameter
    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    /// Get the maximum allowed value for the parameter
    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Get the bounds of the parameter
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_creation() {
        let param = Parameter::with_bounds("cutoff", 1.0, 0.0, 1.0).unwrap();
        assert_eq!(param.name(), "cutoff");
        assert_eq!(param.value(), 1.0);
        assert_eq!(param.default_value(), 1.0);
        assert_eq!(param.min(), 0.0);
        assert_eq!(param.max(), 1.0);
    }

    #[test]
    fn test_parameter_invalid_schema() {
        // min > max
        assert!(Parameter::with_bounds("spread", 0.5, 3.0, 0.0).is_err());

        // default below min
        let result = Parameter::with_bounds("spread", -0.1, 0.0, 3.0);
        assert_eq!(
            result.unwrap_err(),
            BoundsError::DefaultOutsideBounds {
                value: -0.1,
                min: 0.0,
                max: 3.0
            }
        );

        // default above max
        assert!(Parameter::with_bounds("spread", 3.1, 0.0, 3.0).is_err());
    }

    #[test]
    fn test_parameter_value() {
        let mut param = Parameter::with_bounds("width", 0.3, 0.0, 3.0).unwrap();
        assert_eq!(param.value(), 0.3);

        param.set_value(1.2);
        assert_eq!(param.value(), 1.2);

        // Sets are unchecked; bounds only constrain the attached control
        param.set_value(5.0);
        assert_eq!(param.value(), 5.0);
    }

    #[test]
    fn test_parameter_reset() {
        let mut param = Parameter::with_bounds("rounding", 0.7, 0.0, 3.0).unwrap();
        param.set_value(2.5);
        assert_eq!(param.value(), 2.5);

        param.reset();
        assert_eq!(param.value(), 0.7);
    }
}
