//! Standalone overlay window for development and testing.
//!
//! Runs the tick-grid overlay with stock settings, no persistence and no
//! settings window. Useful for eyeballing deposit/decay changes.

use eframe::egui;
use glam::Vec2;
use tickgrid::core::sim::{GridSim, DEFAULT_FADE_FACTOR, DEFAULT_RESOLUTION};
use tickgrid::widgets::grid::{render_grid_overlay, GridOverlayConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("TickGrid - Overlay"),
        ..Default::default()
    };

    eframe::run_native(
        "tickgrid-overlay",
        options,
        Box::new(|_cc| Ok(Box::new(OverlayApp::new()))),
    )
}

struct OverlayApp {
    sim: Option<GridSim>,
    overlay: GridOverlayConfig,
}

impl OverlayApp {
    fn new() -> Self {
        Self {
            sim: None,
            overlay: GridOverlayConfig::default(),
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        let screen = ctx.input(|i| i.viewport_rect());
        let size = Vec2::new(screen.width(), screen.height());
        if self.sim.is_none() {
            self.sim = Some(GridSim::new(
                size.x,
                size.y,
                DEFAULT_RESOLUTION,
                DEFAULT_FADE_FACTOR,
            ));
        } else if let Some(sim) = self.sim.as_mut() {
            if sim.viewport() != size {
                sim.resize(size.x, size.y);
            }
        }

        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => sim.pointer_moved(Vec2::new(pos.x, pos.y)),
                egui::Event::PointerGone => sim.pointer_left(),
                _ => {}
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::from_rgb(250, 250, 249)))
            .show(ctx, |_ui| {});

        sim.begin_frame();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("tick_grid_overlay"),
        ));
        render_grid_overlay(&painter, sim, &self.overlay);
        sim.end_frame();

        ctx.request_repaint();
    }
}
