use clap::Parser;
use std::path::PathBuf;

// Build version with renderer info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Renderer: eframe/egui 0.33\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Pointer-reactive tick-grid overlay
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Grid cell size in pixels (default: 20)
    #[arg(short = 'r', long = "resolution", value_name = "PX")]
    pub resolution: Option<f32>,

    /// Per-frame intensity decay factor, 0 < f < 1 (default: 0.95)
    #[arg(short = 'd', long = "fade", value_name = "FACTOR")]
    pub fade_factor: Option<f32>,

    /// Start in fullscreen mode
    #[arg(short = 'F', long = "fullscreen")]
    pub fullscreen: bool,

    /// Disable the fading pause glyph at the idle pointer
    #[arg(long = "no-glyph")]
    pub no_glyph: bool,

    /// Enable debug logging to file (default: tickgrid.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}
