//! # bilobe
//!
//! `bilobe` renders a parametrized "double-lobe" 3D surface and binds its
//! shape parameters to live-adjustable, bounded controls.
//!
//! The library provides:
//! - A surface model family: a fixed evaluation grid plus an ordered,
//!   bounded parameter schema deterministically producing a height field
//! - A parameter system with declared defaults and validated bounds
//! - A control panel that discovers any variant's schema and wires each
//!   parameter to one bounded control
//! - Surface drawing into RGB pixel buffers via `plotters`
//!
//! ## Basic Usage
//!
//! ```
//! use bilobe::models::create_model;
//! use bilobe::SurfaceModel;
//!
//! let mut model = create_model("gpap").unwrap();
//! model.update_parameter("cutoff", 0.5).unwrap();
//!
//! // The floor clamp keeps the whole field at or above -cutoff
//! assert!(model.height().iter().all(|&z| z >= -0.5));
//! ```

// Public modules
pub mod error;

// Parameter system
pub mod parameters;

// Surface model family
pub mod grid;
pub mod model;
pub mod models;

// Control binding and drawing
pub mod panel;
pub mod render;

// Re-exports for convenience
pub use error::{Result, SurfaceError};
pub use grid::SurfaceGrid;
pub use model::SurfaceModel;
pub use panel::{ControlBinding, ControlPanel};
pub use render::{BitmapSurface, RenderTarget, SurfaceStyle};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
