//! Drawing of height fields as 3D surfaces.
//!
//! The drawing backend is `plotters`: the surface goes onto a 3D cartesian
//! chart rendered into an RGB pixel buffer, so any window toolkit can
//! display the result as a texture. Axis chrome stays off; only the colored
//! surface is drawn.

use crate::error::{Result, SurfaceError};
use crate::grid::SurfaceGrid;
use ndarray::Array2;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};

/// Style configuration for surface drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceStyle {
    /// Color map name: `"reds"`, `"grays"`, `"viridis"`, or
    /// `"constant:#rrggbb"`. Unknown names fall back to `"reds"`.
    pub colormap: String,

    /// Stroke width of the wireframe overlay, in pixels; 0 disables it.
    pub line_width: f64,

    /// Blend cell fills with a little transparency to soften seams.
    pub antialiased: bool,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            colormap: "reds".to_string(),
            line_width: 0.5,
            antialiased: true,
        }
    }
}

impl SurfaceStyle {
    /// Set the color map name.
    pub fn with_colormap(mut self, colormap: &str) -> Self {
        self.colormap = colormap.to_string();
        self
    }

    /// Set the wireframe stroke width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Enable or disable blended cell fills.
    pub fn with_antialiased(mut self, antialiased: bool) -> Self {
        self.antialiased = antialiased;
        self
    }
}

/// A drawing surface that can display `(X, Y, Z)` grids.
///
/// The control panel calls this after every parameter change; implementors
/// decide how the pixels reach the screen.
pub trait RenderTarget {
    /// Clear the surface and draw the given height field with the style.
    fn redraw(&mut self, grid: &SurfaceGrid, z: &Array2<f64>, style: &SurfaceStyle) -> Result<()>;
}

/// An RGB pixel buffer target backed by plotters' bitmap backend.
pub struct BitmapSurface {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl BitmapSurface {
    /// Create a white buffer of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![255u8; (width as usize) * (height as usize) * 3],
        }
    }

    /// Pixel size of the buffer.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGB8 pixels, row-major.
    pub fn rgb(&self) -> &[u8] {
        &self.buffer
    }
}

impl RenderTarget for BitmapSurface {
    fn redraw(&mut self, grid: &SurfaceGrid, z: &Array2<f64>, style: &SurfaceStyle) -> Result<()> {
        draw_surface(&mut self.buffer, (self.width, self.height), grid, z, style)
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> SurfaceError {
    SurfaceError::RenderError(err.to_string())
}

/// Smallest and largest finite values of the field.
fn field_range(z: &Array2<f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in z {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}

/// Index of the axis sample nearest to `v` on an even grid over `[min, max]`.
fn nearest_index(v: f64, min: f64, max: f64, n: usize) -> usize {
    if n < 2 || max <= min {
        return 0;
    }
    let t = ((v - min) / (max - min) * (n - 1) as f64).round();
    (t.max(0.0) as usize).min(n - 1)
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

fn lerp_color(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> RGBColor {
    RGBColor(
        lerp_channel(a.0, b.0, t),
        lerp_channel(a.1, b.1, t),
        lerp_channel(a.2, b.2, t),
    )
}

fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RGBColor(r, g, b))
}

// Low heights map to t = 0, high to t = 1.
fn sample_colormap(name: &str, t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);

    if let Some(hex) = name.strip_prefix("constant:") {
        return parse_hex_color(hex).unwrap_or(RGBColor(0, 0, 0));
    }

    match name {
        "grays" => lerp_color((40, 40, 40), (235, 235, 235), t),
        "viridis" => {
            // Piecewise fit through five anchors of the viridis map
            let anchors: [(u8, u8, u8); 5] = [
                (68, 1, 84),
                (59, 82, 139),
                (33, 145, 140),
                (94, 201, 98),
                (253, 231, 37),
            ];
            let scaled = t * (anchors.len() - 1) as f64;
            let lo = (scaled.floor() as usize).min(anchors.len() - 2);
            lerp_color(anchors[lo], anchors[lo + 1], scaled - lo as f64)
        }
        // "reds" and anything unrecognized
        _ => lerp_color((254, 229, 217), (165, 15, 21), t),
    }
}

/// Draw a height field into an RGB pixel buffer.
///
/// Clears the buffer to white, then draws the surface on a 3D chart with no
/// axis chrome, colored by normalized height. Degenerate fields (flat, or
/// with no finite values) are drawn by padding the vertical range.
pub fn draw_surface(
    buffer: &mut [u8],
    (width, height): (u32, u32),
    grid: &SurfaceGrid,
    z: &Array2<f64>,
    style: &SurfaceStyle,
) -> Result<()> {
    let (x_min, x_max) = grid.x_range();
    let (y_min, y_max) = grid.y_range();

    let (mut z_min, mut z_max) = field_range(z);
    if !z_min.is_finite() || !z_max.is_finite() {
        z_min = -1.0;
        z_max = 0.0;
    }
    if z_max - z_min < f64::EPSILON {
        z_min -= 0.5;
        z_max += 0.5;
    }

    let r = grid.resolution();
    let fill_alpha = if style.antialiased { 0.9 } else { 1.0 };
    let colormap = style.colormap.clone();
    let span = z_max - z_min;

    {
        let root = BitMapBackend::with_buffer(buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_3d(x_min..x_max, z_min..z_max, y_min..y_max)
            .map_err(render_error)?;

        chart.with_projection(|mut pb| {
            pb.pitch = 0.7;
            pb.yaw = 0.7;
            pb.scale = 0.85;
            pb.into_matrix()
        });

        chart
            .draw_series(
                SurfaceSeries::xoz(
                    grid.x_axis().iter().copied(),
                    grid.y_axis().iter().copied(),
                    |x, y| {
                        z[[
                            nearest_index(y, y_min, y_max, r),
                            nearest_index(x, x_min, x_max, r),
                        ]]
                    },
                )
                .style_func(&|&h| {
                    let t = (h - z_min) / span;
                    sample_colormap(&colormap, t).mix(fill_alpha).filled()
                }),
            )
            .map_err(render_error)?;

        if style.line_width > 0.0 {
            let stroke = style.line_width.ceil().max(1.0) as u32;
            let wire = BLACK.mix(0.25).stroke_width(stroke);
            for (i, &y) in grid.y_axis().iter().enumerate() {
                chart
                    .draw_series(LineSeries::new(
                        grid.x_axis()
                            .iter()
                            .enumerate()
                            .map(|(j, &x)| (x, z[[i, j]], y)),
                        wire,
                    ))
                    .map_err(render_error)?;
            }
        }

        root.present().map_err(render_error)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SurfaceModel;
    use crate::models::GpapModel;

    #[test]
    fn test_colormap_sampling() {
        // Reds runs light to dark
        let low = sample_colormap("reds", 0.0);
        let high = sample_colormap("reds", 1.0);
        assert_eq!(low, RGBColor(254, 229, 217));
        assert_eq!(high, RGBColor(165, 15, 21));

        // Out-of-range inputs clamp
        assert_eq!(sample_colormap("grays", -2.0), sample_colormap("grays", 0.0));
        assert_eq!(sample_colormap("grays", 5.0), sample_colormap("grays", 1.0));

        // Constant maps parse hex, ignoring one leading '#'
        assert_eq!(sample_colormap("constant:#204060", 0.3), RGBColor(32, 64, 96));
        assert_eq!(sample_colormap("constant:204060", 0.9), RGBColor(32, 64, 96));

        // Unknown names fall back to reds
        assert_eq!(sample_colormap("plasma", 0.0), sample_colormap("reds", 0.0));
    }

    #[test]
    fn test_nearest_index() {
        assert_eq!(nearest_index(-1.0, -1.0, 1.0, 5), 0);
        assert_eq!(nearest_index(0.0, -1.0, 1.0, 5), 2);
        assert_eq!(nearest_index(1.0, -1.0, 1.0, 5), 4);
        assert_eq!(nearest_index(0.2, -1.0, 1.0, 5), 2);
        // Single-sample axes always resolve to 0
        assert_eq!(nearest_index(0.7, 0.0, 1.0, 1), 0);
    }

    #[test]
    fn test_draw_surface_produces_pixels() {
        let model = GpapModel::with_grid(12, -1.0, 1.4, -0.9, 0.9).unwrap();
        let mut surface = BitmapSurface::new(160, 120);

        surface
            .redraw(model.grid(), model.height(), &SurfaceStyle::default())
            .unwrap();

        let (w, h) = surface.size();
        assert_eq!(surface.rgb().len(), (w * h * 3) as usize);
        assert!(surface.rgb().iter().any(|&b| b != 255));
    }

    #[test]
    fn test_draw_surface_flat_field() {
        // cutoff = 0 floors the whole field at 0, producing a flat surface
        let mut model = GpapModel::with_grid(8, -1.0, 1.4, -0.9, 0.9).unwrap();
        model.update_parameter("cutoff", 0.0).unwrap();
        assert!(model.height().iter().all(|&z| z == 0.0));

        let mut surface = BitmapSurface::new(80, 60);
        surface
            .redraw(model.grid(), model.height(), &SurfaceStyle::default())
            .unwrap();
    }

    #[test]
    fn test_draw_surface_wireframe_off() {
        let model = GpapModel::with_grid(8, -1.0, 1.4, -0.9, 0.9).unwrap();
        let style = SurfaceStyle::default()
            .with_line_width(0.0)
            .with_antialiased(false)
            .with_colormap("viridis");

        let mut surface = BitmapSurface::new(80, 60);
        surface.redraw(model.grid(), model.height(), &style).unwrap();
    }
}
