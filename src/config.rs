//! Start-up settings, read once from a TOML file.
//!
//! Every field has a default, so a partial file (or none at all) is fine.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::animation::{DEFAULT_AMPLITUDE, DEFAULT_SPEED};
use crate::error::Error;
use crate::scene::ViewMode;
use crate::types::{clamp_radius, MAX_RADIUS};

/// File looked up in the working directory when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "midpoint-ellipse.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub width: usize,
    pub height: usize,
    /// Starting radii; also the base the animation swings around.
    pub rx: f32,
    pub ry: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub view: ViewMode,
    /// 0x00RRGGBB
    pub point_color: u32,
    pub background: u32,
    pub snapshot_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            rx: 200.0,
            ry: 100.0,
            amplitude: DEFAULT_AMPLITUDE,
            speed: DEFAULT_SPEED,
            view: ViewMode::Ellipse,
            point_color: 0x00_FF_80_33, // orange (1.0, 0.5, 0.2)
            background: 0x00_00_00_00,
            snapshot_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Parse TOML text. Missing keys take their defaults; out-of-range numbers
    /// are pulled back into range (TOML happily accepts `inf` and `nan`).
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut cfg: Self = toml::from_str(text)?;
        cfg.sanitize();
        Ok(cfg)
    }

    fn sanitize(&mut self) {
        let defaults = Self::default();
        // a zero-sized window can't be opened or normalized against
        self.width = self.width.max(1);
        self.height = self.height.max(1);

        let (rx, ry) = (clamp_radius(self.rx), clamp_radius(self.ry));
        if (rx, ry) != (self.rx, self.ry) {
            log::warn!("radii {} x {} out of range, using {rx} x {ry}", self.rx, self.ry);
            (self.rx, self.ry) = (rx, ry);
        }
        if !self.amplitude.is_finite() {
            log::warn!("amplitude {} is not finite, using {}", self.amplitude, defaults.amplitude);
            self.amplitude = defaults.amplitude;
        }
        self.amplitude = self.amplitude.clamp(0.0, MAX_RADIUS);
        if !self.speed.is_finite() {
            log::warn!("speed {} is not finite, using {}", self.speed, defaults.speed);
            self.speed = defaults.speed;
        }
    }

    /// Load from `path`, falling back to defaults when the file is missing or broken.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match Self::parse(&text) {
                Ok(cfg) => {
                    log::info!("config loaded from {}", path.display());
                    cfg
                }
                Err(e) => {
                    log::warn!("config file {} is invalid, using defaults: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// First CLI argument, or `DEFAULT_CONFIG_FILE`.
    pub fn path_from_args(mut args: impl Iterator<Item = String>) -> PathBuf {
        args.nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}
