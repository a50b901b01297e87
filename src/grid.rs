//! Evaluation grid for surface models.
//!
//! A [`SurfaceGrid`] is an evenly spaced 2D mesh over a rectangular domain.
//! The mesh is computed once at construction and never changes afterwards;
//! height fields are recomputed over it as parameters move.

use crate::error::{Result, SurfaceError};
use ndarray::{Array, Array1, Array2};

/// A fixed, evenly spaced `R x R` mesh over `[x_min, x_max] x [y_min, y_max]`.
///
/// `x()[i, j]` equals the j-th x-axis value and `y()[i, j]` the i-th y-axis
/// value, so rows sweep y and columns sweep x.
#[derive(Debug, Clone)]
pub struct SurfaceGrid {
    resolution: usize,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_axis: Array1<f64>,
    y_axis: Array1<f64>,
    x: Array2<f64>,
    y: Array2<f64>,
}

impl SurfaceGrid {
    /// Create a grid over the given domain.
    ///
    /// # Arguments
    ///
    /// * `resolution` - Number of samples along each axis (at least 1)
    /// * `x_min`, `x_max` - Horizontal domain, `x_min < x_max`
    /// * `y_min`, `y_max` - Vertical domain, `y_min < y_max`
    ///
    /// # Returns
    ///
    /// The grid, or `InvalidResolution` / `InvalidDomain` when the inputs
    /// cannot produce a mesh.
    ///
    /// # Examples
    ///
    /// ```
    /// use bilobe::grid::SurfaceGrid;
    ///
    /// let grid = SurfaceGrid::new(5, -1.0, 1.4, -0.9, 0.9).unwrap();
    /// assert_eq!(grid.shape(), (5, 5));
    /// assert_eq!(grid.x()[[0, 0]], -1.0);
    /// assert_eq!(grid.y()[[4, 0]], 0.9);
    /// ```
    pub fn new(resolution: usize, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        if resolution < 1 {
            return Err(SurfaceError::InvalidResolution(format!(
                "resolution must be at least 1, got {}",
                resolution
            )));
        }

        if x_min >= x_max {
            return Err(SurfaceError::InvalidDomain(format!(
                "x_min ({}) must be less than x_max ({})",
                x_min, x_max
            )));
        }

        if y_min >= y_max {
            return Err(SurfaceError::InvalidDomain(format!(
                "y_min ({}) must be less than y_max ({})",
                y_min, y_max
            )));
        }

        let x_axis = Array::linspace(x_min, x_max, resolution);
        let y_axis = Array::linspace(y_min, y_max, resolution);

        let x = Array2::from_shape_fn((resolution, resolution), |(_, j)| x_axis[j]);
        let y = Array2::from_shape_fn((resolution, resolution), |(i, _)| y_axis[i]);

        Ok(Self {
            resolution,
            x_min,
            x_max,
            y_min,
            y_max,
            x_axis,
            y_axis,
            x,
            y,
        })
    }

    /// Number of samples along each axis.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Shape of the mesh arrays.
    pub fn shape(&self) -> (usize, usize) {
        (self.resolution, self.resolution)
    }

    /// The x-axis sample values, in ascending order.
    pub fn x_axis(&self) -> &Array1<f64> {
        &self.x_axis
    }

    /// The y-axis sample values, in ascending order.
    pub fn y_axis(&self) -> &Array1<f64> {
        &self.y_axis
    }

    /// The x coordinate of every mesh point.
    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    /// The y coordinate of every mesh point.
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    /// The x domain bounds the grid was constructed with.
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// The y domain bounds the grid was constructed with.
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }
}
