//! Concrete surface variants and the variant registry.
//!
//! The registry is an explicit table from variant name to constructor;
//! adding a variant means adding one entry, with no changes to existing
//! code. Lookups are case-normalized, and a miss reports the full list of
//! registered names.

use crate::error::{Result, SurfaceError};
use crate::model::SurfaceModel;

mod gpap;

// Re-export the variants
pub use gpap::GpapModel;

/// Constructor signature stored in the variant registry.
type VariantCtor = fn() -> Result<Box<dyn SurfaceModel>>;

fn make_gpap() -> Result<Box<dyn SurfaceModel>> {
    Ok(Box::new(GpapModel::new()?))
}

/// The variant registry: one entry per concrete surface variant.
const VARIANTS: &[(&str, VariantCtor)] = &[(GpapModel::NAME, make_gpap)];

/// Names of all registered variants, in registration order.
pub fn variant_names() -> Vec<&'static str> {
    VARIANTS.iter().map(|(name, _)| *name).collect()
}

/// Create a surface model by variant name.
///
/// The name is case-normalized before lookup, so `"GPAP"` and `"gpap"`
/// select the same variant.
///
/// # Arguments
///
/// * `name` - Name of a registered variant
///
/// # Returns
///
/// The freshly constructed model, or `UnknownVariant` with a message
/// listing the registered names.
///
/// # Examples
///
/// ```
/// use bilobe::models::create_model;
/// use bilobe::SurfaceModel;
///
/// let model = create_model("gpap").unwrap();
/// assert_eq!(model.name(), "gpap");
///
/// assert!(create_model("no-such-surface").is_err());
/// ```
pub fn create_model(name: &str) -> Result<Box<dyn SurfaceModel>> {
    let key = name.to_lowercase();

    let ctor = VARIANTS
        .iter()
        .find(|(registered, _)| *registered == key)
        .map(|(_, ctor)| ctor)
        .ok_or_else(|| SurfaceError::UnknownVariant {
            name: name.to_string(),
            available: variant_names().join(", "),
        })?;

    ctor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_gpap() {
        assert_eq!(variant_names(), vec!["gpap"]);
    }

    #[test]
    fn test_create_model_by_name() {
        let model = create_model("gpap").unwrap();
        assert_eq!(model.name(), "gpap");
        assert_eq!(model.parameters().len(), 6);
        assert_eq!(model.grid().resolution(), GpapModel::DEFAULT_RESOLUTION);
    }

    #[test]
    fn test_create_model_case_normalized() {
        let model = create_model("GpAp").unwrap();
        assert_eq!(model.name(), "gpap");
    }

    #[test]
    fn test_create_model_unknown_lists_names() {
        let err = create_model("mystery").unwrap_err();
        match err {
            SurfaceError::UnknownVariant { name, available } => {
                assert_eq!(name, "mystery");
                assert!(available.contains("gpap"));
            }
            other => panic!("expected UnknownVariant, got {:?}", other),
        }
    }
}
