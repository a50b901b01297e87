//! Surface model trait and shared behavior.
//!
//! This module defines the SurfaceModel trait, the common capability of the
//! surface family: expose a fixed evaluation grid and an ordered parameter
//! schema, and recompute a height field from the current parameter values.
//! Concrete variants override [`SurfaceModel::recompute`]; the provided
//! implementation signals `UnimplementedVariant` so the abstract family can
//! never be mistaken for a concrete surface.

use crate::error::{Result, SurfaceError};
use crate::grid::SurfaceGrid;
use crate::parameters::Parameter;
use ndarray::Array2;

/// A trait representing one member of the surface model family.
///
/// A model owns a fixed grid, an ordered parameter schema, and the height
/// field derived from them. The height field is kept consistent with the
/// current parameter values: the only mutation path is
/// [`update_parameter`](SurfaceModel::update_parameter), which recomputes
/// before returning.
pub trait SurfaceModel: std::fmt::Debug {
    /// Short name of the variant, as registered in the variant registry.
    fn name(&self) -> &str;

    /// Returns the fixed evaluation grid.
    fn grid(&self) -> &SurfaceGrid;

    /// Returns the variant's parameter schema, in declaration order.
    ///
    /// This is the discovery surface for generic callers such as the
    /// control panel; variants need no further registration.
    fn parameters(&self) -> &[Parameter];

    /// Returns mutable access to the parameter schema.
    fn parameters_mut(&mut self) -> &mut [Parameter];

    /// Returns the current height field.
    fn height(&self) -> &Array2<f64>;

    /// Recompute the height field from the current parameter values.
    ///
    /// A pure function of the parameters and the fixed grid. The default
    /// implementation signals [`SurfaceError::UnimplementedVariant`]: the
    /// family base is abstract, and a variant that does not override this
    /// method never produces a usable field.
    fn recompute(&mut self) -> Result<()> {
        Err(SurfaceError::UnimplementedVariant(self.name().to_string()))
    }

    /// Set the named parameter's value, then recompute the height field.
    ///
    /// The value is not clamped to the parameter's bounds; bounded UI
    /// controls cannot produce out-of-range values, and other callers are
    /// trusted to respect the bounds.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of a parameter in the variant's schema
    /// * `value` - The new value
    ///
    /// # Returns
    ///
    /// `Ok(())` after the field has been recomputed, or
    /// `UnknownParameter` if `name` is not in the schema.
    fn update_parameter(&mut self, name: &str, value: f64) -> Result<()> {
        let param = self
            .parameters_mut()
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| SurfaceError::UnknownParameter(name.to_string()))?;
        param.set_value(value);

        self.recompute()
    }

    /// Returns the names of all parameters in the schema, in order.
    fn parameter_names(&self) -> Vec<String> {
        self.parameters()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A variant that implements only the accessors, leaving the provided
    /// `recompute` in place.
    #[derive(Debug)]
    struct AbstractOnlyModel {
        grid: SurfaceGrid,
        params: Vec<Parameter>,
        z: Array2<f64>,
    }

    impl AbstractOnlyModel {
        fn new() -> Self {
            let grid = SurfaceGrid::new(4, -1.0, 1.0, -1.0, 1.0).unwrap();
            let params = vec![Parameter::with_bounds("knob", 0.5, 0.0, 1.0).unwrap()];
            let z = Array2::zeros(grid.shape());
            Self { grid, params, z }
        }
    }

    impl SurfaceModel for AbstractOnlyModel {
        fn name(&self) -> &str {
            "abstract-only"
        }

        fn grid(&self) -> &SurfaceGrid {
            &self.grid
        }

        fn parameters(&self) -> &[Parameter] {
            &self.params
        }

        fn parameters_mut(&mut self) -> &mut [Parameter] {
            &mut self.params
        }

        fn height(&self) -> &Array2<f64> {
            &self.z
        }
    }

    #[test]
    fn test_default_recompute_is_unimplemented() {
        let mut model = AbstractOnlyModel::new();
        let err = model.recompute().unwrap_err();
        assert!(matches!(err, SurfaceError::UnimplementedVariant(name) if name == "abstract-only"));

        // no field was populated by the refused call
        assert!(model.height().iter().all(|&z| z == 0.0));
    }

    #[test]
    fn test_update_parameter_unknown_name() {
        let mut model = AbstractOnlyModel::new();
        let err = model.update_parameter("nonexistent", 1.0).unwrap_err();
        assert!(matches!(err, SurfaceError::UnknownParameter(name) if name == "nonexistent"));

        // the known parameter was left untouched
        assert_eq!(model.parameters()[0].value(), 0.5);
    }

    #[test]
    fn test_update_parameter_sets_before_recompute() {
        let mut model = AbstractOnlyModel::new();

        // The set happens, then the abstract recompute refuses
        let err = model.update_parameter("knob", 0.9).unwrap_err();
        assert!(matches!(err, SurfaceError::UnimplementedVariant(_)));
        assert_eq!(model.parameters()[0].value(), 0.9);
    }

    #[test]
    fn test_parameter_names_in_order() {
        let model = AbstractOnlyModel::new();
        assert_eq!(model.parameter_names(), vec!["knob".to_string()]);
    }
}
