//! Engine configuration.
//!
//! A [`Config`] is built once, optionally merged with values from an INI
//! file, and handed to [`Engine::new`]. It is never mutated afterwards.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! title = my game
//! target_fps = 60
//! fullscreen = false
//! resizable = true
//! vsync = true
//! load_assets = true
//! ```
//!
//! [`Engine::new`]: crate::Engine::new

use std::path::Path;

use configparser::ini::Ini;
use log::info;
use raylib::prelude::{ConfigFlags, TraceLogLevel};

use crate::error::{Error, Result};

/// Default safe values for startup
const DEFAULT_WIDTH: i32 = 800;
const DEFAULT_HEIGHT: i32 = 600;
const DEFAULT_TITLE: &str = "rlstage";
const DEFAULT_TARGET_FPS: u32 = 60;

/// Application settings used during engine creation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Window width in pixels.
    pub width: i32,
    /// Window height in pixels.
    pub height: i32,
    /// Raylib window flags as a raw bitmask (e.g.
    /// `ConfigFlags::FLAG_WINDOW_RESIZABLE as u32`).
    pub window_mode: u32,
    /// Window title.
    pub title: String,
    /// Target frames per second for the game loop.
    pub target_fps: u32,
    /// Raylib trace-log verbosity.
    pub log_level: TraceLogLevel,
    /// Load the `assets` directory (relative to the working directory)
    /// automatically on engine creation.
    pub load_assets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a configuration with default values: an 800x600 window at
    /// 60 fps with asset auto-loading enabled.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            window_mode: 0,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            log_level: TraceLogLevel::LOG_DEBUG,
            load_assets: true,
        }
    }

    /// Whether `window_mode` carries the fullscreen flag.
    pub fn is_fullscreen(&self) -> bool {
        self.window_mode & ConfigFlags::FLAG_FULLSCREEN_MODE as u32 != 0
    }

    /// Check the window geometry.
    ///
    /// Width and height must both be positive unless the fullscreen flag is
    /// set, in which case the display resolution is used and the configured
    /// size does not matter.
    pub fn validate(&self) -> Result<()> {
        if (self.width <= 0 || self.height <= 0) && !self.is_fullscreen() {
            return Err(Error::InvalidConfig {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    fn set_mode_flag(&mut self, flag: ConfigFlags, enabled: bool) {
        if enabled {
            self.window_mode |= flag as u32;
        } else {
            self.window_mode &= !(flag as u32);
        }
    }

    /// Merge values from an INI file into this configuration.
    ///
    /// Missing keys retain their current values.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path).map_err(|reason| Error::Load {
            path: path.to_path_buf(),
            reason,
        })?;

        if let Some(width) = ini.getint("window", "width").ok().flatten() {
            self.width = width as i32;
        }
        if let Some(height) = ini.getint("window", "height").ok().flatten() {
            self.height = height as i32;
        }
        if let Some(title) = ini.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = ini.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(fullscreen) = ini.getbool("window", "fullscreen").ok().flatten() {
            self.set_mode_flag(ConfigFlags::FLAG_FULLSCREEN_MODE, fullscreen);
        }
        if let Some(resizable) = ini.getbool("window", "resizable").ok().flatten() {
            self.set_mode_flag(ConfigFlags::FLAG_WINDOW_RESIZABLE, resizable);
        }
        if let Some(vsync) = ini.getbool("window", "vsync").ok().flatten() {
            self.set_mode_flag(ConfigFlags::FLAG_VSYNC_HINT, vsync);
        }
        if let Some(load_assets) = ini.getbool("window", "load_assets").ok().flatten() {
            self.load_assets = load_assets;
        }

        info!(
            "loaded config: {}x{} \"{}\", fps={}, mode={:#x}, load_assets={}",
            self.width, self.height, self.title, self.target_fps, self.window_mode, self.load_assets
        );

        Ok(())
    }

    /// Save this configuration to an INI file, creating it if needed.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut ini = Ini::new();

        ini.set("window", "width", Some(self.width.to_string()));
        ini.set("window", "height", Some(self.height.to_string()));
        ini.set("window", "title", Some(self.title.clone()));
        ini.set("window", "target_fps", Some(self.target_fps.to_string()));
        ini.set("window", "fullscreen", Some(self.is_fullscreen().to_string()));
        ini.set(
            "window",
            "resizable",
            Some((self.window_mode & ConfigFlags::FLAG_WINDOW_RESIZABLE as u32 != 0).to_string()),
        );
        ini.set(
            "window",
            "vsync",
            Some((self.window_mode & ConfigFlags::FLAG_VSYNC_HINT as u32 != 0).to_string()),
        );
        ini.set("window", "load_assets", Some(self.load_assets.to_string()));

        ini.write(path).map_err(|err| Error::Save {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        info!("saved config to {}", path.display());

        Ok(())
    }
}
