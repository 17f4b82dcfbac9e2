use tickgrid::cli::Args;
use tickgrid::config;
use tickgrid::core::sim::GridSim;
use tickgrid::dialogs::prefs::{render_settings_window, AppSettings};
use tickgrid::widgets::grid::{render_grid_overlay, GridOverlayConfig};

use clap::Parser;
use eframe::egui;
use glam::Vec2;
use log::{debug, info};

/// Main application state
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
struct TickGridApp {
    settings: AppSettings,
    /// Running simulation; rebuilt when the simulation parameters change.
    #[serde(skip)]
    sim: Option<GridSim>,
    #[serde(skip)]
    overlay: GridOverlayConfig,
    /// (resolution, fade_factor) currently applied to `sim`. Divergence
    /// from `settings` tears the sim down and rebuilds it.
    #[serde(skip)]
    applied_params: (f32, f32),
    #[serde(skip)]
    show_settings: bool,
    #[serde(skip)]
    is_fullscreen: bool,
}

impl Default for TickGridApp {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
            sim: None,
            overlay: GridOverlayConfig::default(),
            applied_params: (0.0, 0.0),
            show_settings: false,
            is_fullscreen: false,
        }
    }
}

impl TickGridApp {
    /// Enable or disable "cinema mode": borderless fullscreen.
    fn set_cinema_mode(&mut self, ctx: &egui::Context, enabled: bool) {
        self.is_fullscreen = enabled;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(enabled));
        // Hide window decorations in fullscreen for a cleaner look
        ctx.send_viewport_cmd(egui::ViewportCommand::Decorations(!enabled));
        ctx.request_repaint();
    }

    /// Build or rebuild the sim to match the current settings and viewport.
    fn ensure_sim(&mut self, ctx: &egui::Context) {
        self.settings.sanitize();
        let screen = ctx.input(|i| i.viewport_rect());
        let params = (self.settings.resolution, self.settings.fade_factor);

        let rebuild = self.sim.is_none() || self.applied_params != params;
        if rebuild {
            info!(
                "Building sim: {}x{}px viewport, resolution={}px, fade={}",
                screen.width(),
                screen.height(),
                params.0,
                params.1
            );
            self.sim = Some(GridSim::new(
                screen.width(),
                screen.height(),
                params.0,
                params.1,
            ));
            self.applied_params = params;
        } else if let Some(sim) = self.sim.as_mut() {
            // Destructive resize on viewport change
            let size = Vec2::new(screen.width(), screen.height());
            if sim.viewport() != size {
                sim.resize(size.x, size.y);
            }
        }
    }
}

impl eframe::App for TickGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme based on settings
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Hotkeys: F1 settings, F11 fullscreen, Esc leaves fullscreen
        let (f1, f11, esc) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F1),
                i.key_pressed(egui::Key::F11),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if f1 {
            self.show_settings = !self.show_settings;
        }
        if f11 {
            self.set_cinema_mode(ctx, !self.is_fullscreen);
        }
        if esc && self.is_fullscreen {
            self.set_cinema_mode(ctx, false);
        }

        self.ensure_sim(ctx);

        // Feed pointer events into the sim. Events only mutate state; the
        // frame step below picks up their effects.
        if let Some(sim) = self.sim.as_mut() {
            let events = ctx.input(|i| i.events.clone());
            for event in events {
                match event {
                    egui::Event::PointerMoved(pos) => {
                        sim.pointer_moved(Vec2::new(pos.x, pos.y));
                    }
                    egui::Event::PointerGone => sim.pointer_left(),
                    _ => {}
                }
            }
        }

        // Page content the overlay sits above
        render_demo_page(ctx, &self.settings);

        if self.show_settings {
            render_settings_window(ctx, &mut self.show_settings, &mut self.settings);
        }

        // Simulation frame: deposit, paint pre-decay, fade
        self.overlay.show_glyph = self.settings.show_pause_glyph;
        if let Some(sim) = self.sim.as_mut() {
            sim.begin_frame();
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("tick_grid_overlay"),
            ));
            render_grid_overlay(&painter, sim, &self.overlay);
            sim.end_frame();
        }

        // Continuous loop: one step per display refresh
        ctx.request_repaint();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            debug!(
                "App state saved: resolution={}, fade={}",
                self.settings.resolution, self.settings.fade_factor
            );
        }
    }
}

/// Stand-in page content beneath the overlay.
fn render_demo_page(ctx: &egui::Context, settings: &AppSettings) {
    let fill = if settings.dark_mode {
        egui::Color32::from_rgb(18, 18, 20)
    } else {
        egui::Color32::from_rgb(250, 250, 249)
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(fill))
        .show(ctx, |ui| {
            if !settings.show_demo_page {
                return;
            }
            ui.add_space(ui.available_height() * 0.35);
            ui.vertical_centered(|ui| {
                ui.heading("TICKGRID");
                ui.label("Move the pointer. The grid remembers where it went.");
                ui.add_space(8.0);
                ui.small("F1 settings  |  F11 fullscreen");
            });
        });
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());

    // Ensure directories exist
    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {}", e);
    }

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| config::data_file("tickgrid.log", &path_config));

        let file = std::fs::File::create(&log_path)?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .filter_module("eframe", log::LevelFilter::Info)
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .filter_module("eframe", log::LevelFilter::Info)
            .format_timestamp_millis()
            .init();
    }

    info!("TickGrid overlay starting...");
    debug!("Command-line args: {:?}", args);
    info!(
        "Config path: {}",
        config::config_file("tickgrid.json", &path_config).display()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "TickGrid v{} • F1 for settings",
                env!("CARGO_PKG_VERSION")
            ))
            .with_inner_size([1280.0, 800.0])
            .with_resizable(true),
        persist_window: true,
        #[cfg(not(target_arch = "wasm32"))]
        persistence_path: Some(config::config_file("tickgrid.json", &path_config)),
        ..Default::default()
    };

    // Run the app
    eframe::run_native(
        "TickGrid",
        native_options,
        Box::new(move |cc| {
            // Load persisted app state if available, otherwise create default
            let mut app: TickGridApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    TickGridApp::default()
                });

            // CLI arguments have priority over persisted settings
            if let Some(resolution) = args.resolution {
                app.settings.resolution = resolution;
            }
            if let Some(fade) = args.fade_factor {
                app.settings.fade_factor = fade;
            }
            if args.no_glyph {
                app.settings.show_pause_glyph = false;
            }
            app.settings.sanitize();

            info!(
                "Applied settings: resolution={}px, fade={}, glyph={}",
                app.settings.resolution, app.settings.fade_factor, app.settings.show_pause_glyph
            );

            if args.fullscreen {
                app.set_cinema_mode(&cc.egui_ctx, true);
            }

            Ok(Box::new(app))
        }),
    )?;

    info!("Application exiting");
    Ok(())
}
