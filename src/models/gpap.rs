//! The "gpap" double-lobe surface variant.
//!
//! The surface is built from two overlapping log-normal-density bumps
//! mirrored about `y = 0`, with a floor clamp so the field never drops
//! below `-cutoff`.

use crate::error::{Result, SurfaceError};
use crate::grid::SurfaceGrid;
use crate::model::SurfaceModel;
use crate::parameters::Parameter;
use ndarray::{Array2, Zip};
use std::f64::consts::PI;

/// Log-normal probability density at `d`, with shape `sigma`, scale
/// `exp(mu)`, and location fixed at 0.
///
/// The log-normal's support is `d > 0`; the density is 0 elsewhere, and the
/// guard keeps `ln(d)` off non-positive inputs.
fn lognorm_pdf(d: f64, sigma: f64, mu: f64) -> f64 {
    if d <= 0.0 {
        return 0.0;
    }

    let t = d.ln() - mu;
    (-t * t / (2.0 * sigma * sigma)).exp() / (d * sigma * (2.0 * PI).sqrt())
}

/// A stylized double-lobe surface.
///
/// Each lobe is a negated log-normal density of the squared distance to a
/// center offset by `width` along y, shaped by an exponential envelope in
/// `spread` and `rounding`; the field is the elementwise maximum of the two
/// lobes and the `-cutoff` floor.
#[derive(Debug, Clone)]
pub struct GpapModel {
    grid: SurfaceGrid,
    params: Vec<Parameter>,
    z: Array2<f64>,
}

impl GpapModel {
    /// Registered name of this variant.
    pub const NAME: &'static str = "gpap";

    /// Grid resolution used by [`GpapModel::new`].
    pub const DEFAULT_RESOLUTION: usize = 200;

    /// Domain `(x_min, x_max, y_min, y_max)` used by [`GpapModel::new`].
    pub const DEFAULT_DOMAIN: (f64, f64, f64, f64) = (-1.0, 1.4, -0.9, 0.9);

    /// Create the variant over its default grid.
    pub fn new() -> Result<Self> {
        let (x_min, x_max, y_min, y_max) = Self::DEFAULT_DOMAIN;
        Self::with_grid(Self::DEFAULT_RESOLUTION, x_min, x_max, y_min, y_max)
    }

    /// Create the variant over a custom grid.
    ///
    /// The parameter schema is identical to [`GpapModel::new`]; only the
    /// evaluation mesh changes. The height field is computed before the
    /// model is returned, so it is never observable in a stale state.
    pub fn with_grid(
        resolution: usize,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Result<Self> {
        let grid = SurfaceGrid::new(resolution, x_min, x_max, y_min, y_max)?;

        let params = vec![
            Parameter::with_bounds("cutoff", 1.0, 0.0, 1.0)?,
            Parameter::with_bounds("spread", 0.8, 0.0, 3.0)?,
            Parameter::with_bounds("width", 0.3, 0.0, 3.0)?,
            Parameter::with_bounds("rounding", 0.7, 0.0, 3.0)?,
            Parameter::with_bounds("mu", 1.0, 0.0, 3.0)?,
            Parameter::with_bounds("sigma", 1.0, 0.0, 3.0)?,
        ];

        let z = Array2::zeros(grid.shape());
        let mut model = Self { grid, params, z };
        model.recompute()?;

        Ok(model)
    }

    fn value_of(&self, name: &str) -> Result<f64> {
        self.params
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.value())
            .ok_or_else(|| SurfaceError::UnknownParameter(name.to_string()))
    }
}

impl SurfaceModel for GpapModel {
    fn name(&self) -> &str {
        Self::NAME
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

    fn recompute(&mut self) -> Result<()> {
        let cutoff = self.value_of("cutoff")?;
        let spread = self.value_of("spread")?;
        let width = self.value_of("width")?;
        let rounding = self.value_of("rounding")?;
        let mu = self.value_of("mu")?;
        let sigma = self.value_of("sigma")?;

        let mut z = Array2::zeros(self.grid.shape());
        Zip::from(&mut z)
            .and(self.grid.x())
            .and(self.grid.y())
            .for_each(|z, &x, &y| {
                let d1 = (y + width) * (y + width) + x * x;
                let d2 = (y - width) * (y - width) + x * x;

                let bump1 =
                    -lognorm_pdf(d1, sigma, mu) * (spread * (y + rounding) * (y + rounding)).exp();
                let bump2 =
                    -lognorm_pdf(d2, sigma, mu) * (spread * (y - rounding) * (y - rounding)).exp();

                *z = bump1.max(bump2).max(-cutoff);
            });
        self.z = z;

        Ok(())
    }
}
