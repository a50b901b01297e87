//! # Parameter System
//!
//! This module provides the parameter system for surface models: named
//! scalar parameters with declared defaults and inclusive bounds. A model
//! variant's schema is an ordered sequence of [`Parameter`] values, fixed at
//! variant-definition time; the control panel discovers the schema through
//! the model capability and builds one bounded control per parameter.
//!
//! ## Core Components
//!
//! - [`Parameter`]: an individual parameter with value, default, and bounds
//! - [`Bounds`]: inclusive `[min, max]` range, validated on construction
//!
//! ## Example Usage
//!
//! ```rust
//! use bilobe::parameters::{Bounds, Parameter};
//!
//! let mut spread = Parameter::with_bounds("spread", 0.8, 0.0, 3.0).unwrap();
//!
//! // The default is validated against the bounds at definition time
//! assert!(Parameter::with_bounds("spread", 9.0, 0.0, 3.0).is_err());
//!
//! // Values set programmatically are not clamped
//! spread.set_value(1.4);
//! assert_eq!(spread.value(), 1.4);
//!
//! // Bounds drive the limits of the attached UI control
//! let bounds = Bounds::new(0.0, 3.0).unwrap();
//! assert!(bounds.is_within_bounds(spread.value()));
//! ```

pub mod bounds;
pub mod parameter;

pub use bounds::Bounds;
pub use parameter::Parameter;
