//! Centralized constants for the landing view
//!
//! Colors, default tuning values and UI copy shared across modules.

use bevy::prelude::*;

/// Wood finishes used to tint kitchen parts
pub mod finish_colors {
    use super::*;

    /// `#8B4513`
    pub const SADDLE_BROWN: Color = Color::srgb(0.545, 0.271, 0.075);
    /// `#D2691E`
    pub const CHOCOLATE: Color = Color::srgb(0.824, 0.412, 0.118);
    /// `#CD853F`
    pub const PERU: Color = Color::srgb(0.804, 0.522, 0.247);
    /// `#DEB887`
    pub const BURLYWOOD: Color = Color::srgb(0.871, 0.722, 0.529);
}

/// Default tuning for the part simulation
pub mod motion {
    /// Number of parts spawned at startup
    pub const PART_COUNT: usize = 50;
    /// Pointer distance (px) under which a part is pulled toward its target
    pub const PROXIMITY_RADIUS: f32 = 100.0;
    /// Fraction of the remaining distance covered per frame
    pub const EASING: f32 = 0.1;
    /// Per-axis distance (px) at which a part snaps into place
    pub const SNAP_TOLERANCE: f32 = 1.0;
    /// Progress percent gained per placed part
    pub const PROGRESS_STEP: u32 = 2;
    /// Smallest part size (px)
    pub const SIZE_MIN: f32 = 20.0;
    /// Width of the random size range (px)
    pub const SIZE_SPAN: f32 = 40.0;
    /// How far below the bottom edge parts may start (px)
    pub const SPAWN_DEPTH: f32 = 100.0;
}

/// Colors for the overlay UI
pub mod ui_colors {
    use super::*;

    /// Window background (amber-200)
    pub const BACKGROUND: Color = Color::srgb(0.992, 0.902, 0.541);
    /// Translucent white card behind the panels
    pub const CARD: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);
    /// Headings (amber-800)
    pub const HEADING: Color = Color::srgb(0.573, 0.251, 0.055);
    /// Body text (amber-700)
    pub const BODY: Color = Color::srgb(0.706, 0.325, 0.035);
    /// Empty progress track (gray-200)
    pub const TRACK: Color = Color::srgb(0.898, 0.906, 0.922);
    /// Progress fill (amber-600)
    pub const FILL: Color = Color::srgb(0.851, 0.467, 0.024);
}

/// Text shown by the overlay
pub mod copy {
    pub const BUILDING_TITLE: &str = "Building Your Dream Kitchen";
    pub const BUILDING_HINT: &str = "Move your mouse to build";
    pub const REVEAL_TITLE: &str = "Coming Soon";
    pub const REVEAL_SUBTITLE: &str = "Your perfect kitchen is almost ready!";
}

/// Decorative logo shown above the panels
pub const DEFAULT_LOGO: &str = "https://images.unsplash.com/photo-1556185781-a47769abb7ee?auto=format&fit=crop&w=100&q=80&fm=jpg&ext=.jpg";

/// Size of the logo (px)
pub const LOGO_SIZE: f32 = 96.0;

/// Progress bar dimensions (px)
pub const BAR_WIDTH: f32 = 256.0;
pub const BAR_HEIGHT: f32 = 24.0;
