//! Desktop viewer: one bounded slider per model parameter plus the drawn
//! surface. The window toolkit is egui/eframe; drawing happens through the
//! library's plotters-backed bitmap target and is shown as a texture.

use std::env;

use anyhow::{anyhow, Result};
use eframe::egui;

use bilobe::models::create_model;
use bilobe::{BitmapSurface, ControlPanel, SurfaceModel};

const CANVAS_WIDTH: u32 = 780;
const CANVAS_HEIGHT: u32 = 520;

fn main() -> Result<()> {
    env_logger::init();

    let variant = env::args().nth(1).unwrap_or_else(|| "gpap".to_string());
    let model = create_model(&variant)?;
    log::info!(
        "starting viewer for variant '{}' with {} parameters",
        model.name(),
        model.parameters().len()
    );

    let mut panel = ControlPanel::new(model);
    panel.attach_target(BitmapSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT))?;

    let app = ViewerApp::new(panel);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native("bilobe", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow!("window session failed: {err}"))
}

struct ViewerApp {
    panel: ControlPanel<BitmapSurface>,
    values: Vec<f64>,
    texture: Option<egui::TextureHandle>,
    surface_dirty: bool,
}

impl ViewerApp {
    fn new(panel: ControlPanel<BitmapSurface>) -> Self {
        let values = panel
            .bindings()
            .iter()
            .map(|b| b.default_value())
            .collect();

        Self {
            panel,
            values,
            texture: None,
            surface_dirty: true,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel = &mut self.panel;
        let values = &mut self.values;
        let dirty = &mut self.surface_dirty;

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            let mut change: Option<(String, f64)> = None;

            for (i, binding) in panel.bindings().iter().enumerate() {
                let slider = egui::Slider::new(&mut values[i], binding.min()..=binding.max())
                    .text(binding.label());
                if ui.add(slider).changed() {
                    change = Some((binding.name().to_string(), values[i]));
                }
            }

            if let Some((name, value)) = change {
                match panel.set_parameter(&name, value) {
                    Ok(()) => *dirty = true,
                    // unreachable through bounded sliders, but never fatal
                    Err(err) => log::warn!("failed to update '{}': {}", name, err),
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if *dirty || self.texture.is_none() {
                if let Some(target) = panel.target() {
                    let (w, h) = target.size();
                    let image =
                        egui::ColorImage::from_rgb([w as usize, h as usize], target.rgb());
                    self.texture =
                        Some(ctx.load_texture("surface", image, egui::TextureOptions::LINEAR));
                }
                *dirty = false;
            }

            if let Some(texture) = &self.texture {
                let avail = ui.available_size();
                ui.image(egui::load::SizedTexture::new(texture.id(), avail));
            }
        });
    }
}
