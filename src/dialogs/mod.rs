//! Dialog windows (settings)

pub mod prefs;

pub use prefs::{render_settings_window, AppSettings};
