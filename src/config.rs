use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{motion, DEFAULT_LOGO};

/// Tuning for the landing view, read once at startup.
///
/// Every field falls back to its default when missing from the file, so a
/// config only needs to name the values it changes.
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LandingConfig {
    /// Number of parts spawned at startup
    pub part_count: usize,
    /// Pointer distance (px) under which a part moves
    pub proximity_radius: f32,
    /// Fraction of the remaining distance covered per frame
    pub easing: f32,
    /// Per-axis distance (px) at which a part counts as placed
    pub snap_tolerance: f32,
    /// Progress percent gained per placed part
    pub progress_step: u32,
    /// Delay between reaching 100% and showing the reveal card
    pub reveal_delay_secs: f32,
    /// Smallest part size (px)
    pub size_min: f32,
    /// Width of the random size range (px)
    pub size_span: f32,
    /// How far below the bottom edge parts may start (px)
    pub spawn_depth: f32,
    /// Asset path or URL of the decorative logo
    pub logo: String,
    /// Time constant of the progress bar fill animation
    pub bar_smoothing_secs: f32,
    /// Duration of the reveal card fade-in
    pub fade_in_secs: f32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            part_count: motion::PART_COUNT,
            proximity_radius: motion::PROXIMITY_RADIUS,
            easing: motion::EASING,
            snap_tolerance: motion::SNAP_TOLERANCE,
            progress_step: motion::PROGRESS_STEP,
            reveal_delay_secs: 1.0,
            size_min: motion::SIZE_MIN,
            size_span: motion::SIZE_SPAN,
            spawn_depth: motion::SPAWN_DEPTH,
            logo: DEFAULT_LOGO.to_string(),
            bar_smoothing_secs: 0.1,
            fade_in_secs: 0.5,
        }
    }
}

impl LandingConfig {
    /// Get the config file path
    fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("kitchen_coming_soon");
            p.push("landing.ron");
            p
        })
    }

    /// Load the config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            debug!("No config directory, using default landing config");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load the config from `path`. A missing file yields the defaults; an
    /// unreadable or malformed one yields the defaults and a warning.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No landing config at {:?}, using defaults", path);
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read landing config {:?}: {}", path, e);
                return Self::default();
            }
        };

        match Self::parse(&content) {
            Ok(config) => {
                info!("Landing config loaded from: {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to parse landing config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Parse a RON document and sanitize the result.
    pub fn parse(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str::<Self>(content).map(Self::sanitized)
    }

    /// Clamp values into ranges the simulation can work with. Non-finite
    /// values fall back to their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.proximity_radius = finite_or(self.proximity_radius, defaults.proximity_radius).max(0.0);
        self.easing = finite_or(self.easing, defaults.easing).clamp(0.0, 1.0);
        self.snap_tolerance = finite_or(self.snap_tolerance, defaults.snap_tolerance).max(0.0);
        self.reveal_delay_secs = finite_or(self.reveal_delay_secs, defaults.reveal_delay_secs)
            .clamp(0.0, MAX_REVEAL_DELAY_SECS);
        self.size_min = finite_or(self.size_min, defaults.size_min).max(1.0);
        self.size_span = finite_or(self.size_span, defaults.size_span).max(0.0);
        self.spawn_depth = finite_or(self.spawn_depth, defaults.spawn_depth).max(0.0);
        self.bar_smoothing_secs =
            finite_or(self.bar_smoothing_secs, defaults.bar_smoothing_secs).max(0.0);
        self.fade_in_secs = finite_or(self.fade_in_secs, defaults.fade_in_secs).max(0.0);
        self
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.reveal_delay_secs).unwrap_or_else(|_| {
            warn!(
                "Reveal delay {} is not usable, using {}s",
                self.reveal_delay_secs,
                Self::default().reveal_delay_secs
            );
            Duration::from_secs_f32(Self::default().reveal_delay_secs)
        })
    }
}

/// Longest reveal delay accepted from a config file, one hour.
const MAX_REVEAL_DELAY_SECS: f32 = 3600.0;

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
