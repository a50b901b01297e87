//! Parameter-bound control panel.
//!
//! The panel discovers a model's parameter schema through the shared
//! [`SurfaceModel`] capability and pairs each parameter with one bounded
//! control specification, in schema order. A control change flows through
//! "set parameter, recompute, redraw". The window toolkit and the drawing
//! backend stay outside: the panel only exposes control specs and calls the
//! attached [`RenderTarget`] when there is one.

use crate::error::Result;
use crate::model::SurfaceModel;
use crate::parameters::Bounds;
use crate::render::{RenderTarget, SurfaceStyle};

/// Pairs one model parameter with one bounded interactive control.
///
/// Bounds and default are copied out of the schema; the binding refers back
/// to the model parameter by name only.
#[derive(Debug, Clone)]
pub struct ControlBinding {
    name: String,
    label: String,
    bounds: Bounds,
    default: f64,
}

impl ControlBinding {
    /// Name of the bound parameter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label for the control.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Lower limit of the control.
    pub fn min(&self) -> f64 {
        self.bounds.min
    }

    /// Upper limit of the control.
    pub fn max(&self) -> f64 {
        self.bounds.max
    }

    /// Initial control position.
    pub fn default_value(&self) -> f64 {
        self.default
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Owns a surface model and the control bindings for its parameters.
///
/// Generic over the render target so embedders keep concrete access to
/// their drawing surface.
pub struct ControlPanel<R: RenderTarget> {
    model: Box<dyn SurfaceModel>,
    bindings: Vec<ControlBinding>,
    style: SurfaceStyle,
    target: Option<R>,
}

impl<R: RenderTarget> ControlPanel<R> {
    /// Build a panel for any concrete variant.
    ///
    /// One binding is created per schema parameter, in schema order; the
    /// model needs no per-variant registration beyond its `parameters()`.
    pub fn new(model: Box<dyn SurfaceModel>) -> Self {
        let bindings = model
            .parameters()
            .iter()
            .map(|p| ControlBinding {
                name: p.name().to_string(),
                label: title_case(p.name()),
                bounds: *p.bounds(),
                default: p.default_value(),
            })
            .collect();

        Self {
            model,
            bindings,
            style: SurfaceStyle::default(),
            target: None,
        }
    }

    /// Replace the drawing style.
    pub fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self
    }

    /// The control bindings, in schema order.
    pub fn bindings(&self) -> &[ControlBinding] {
        &self.bindings
    }

    /// The model under control.
    pub fn model(&self) -> &dyn SurfaceModel {
        self.model.as_ref()
    }

    /// Attach the drawing surface and draw the initial field.
    pub fn attach_target(&mut self, target: R) -> Result<()> {
        self.target = Some(target);
        self.request_redraw()
    }

    /// The attached drawing surface, if any.
    pub fn target(&self) -> Option<&R> {
        self.target.as_ref()
    }

    /// Control-change entry point: set the parameter, recompute, redraw.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<()> {
        self.model.update_parameter(name, value)?;
        self.request_redraw()
    }

    /// Redraw the current field on the attached target.
    ///
    /// A request made before any target is attached is a no-op, not an
    /// error; control setup runs before the drawing surface exists.
    pub fn request_redraw(&mut self) -> Result<()> {
        match self.target.as_mut() {
            Some(target) => target.redraw(self.model.grid(), self.model.height(), &self.style),
            None => Ok(()),
        }
    }
}
