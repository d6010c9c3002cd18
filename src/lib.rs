//! # Kitchen Coming Soon
//!
//! An animated "Coming Soon" landing view for Bevy. Kitchen parts rise from
//! below the window and drift into their slots while the cursor hovers near
//! them; every placed part fills the progress bar, and a full bar reveals
//! the "Coming Soon" card.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use kitchen_coming_soon::ComingSoonPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(ComingSoonPlugin::default())
//!         .run();
//! }
//! ```
//!
//! ## Configuration
//!
//! Tuning is read from `<config dir>/kitchen_coming_soon/landing.ron` when
//! present. Any field may be omitted:
//!
//! ```ron
//! (part_count: 50, proximity_radius: 100.0, reveal_delay_secs: 1.0)
//! ```
//!
//! Use [`ComingSoonPlugin::new`] to pass a config directly instead.

pub mod config;
pub mod constants;
pub mod input;
pub mod parts;
pub mod progress;
pub mod ui;

pub use config::LandingConfig;
pub use input::{PointerState, PointerPlugin, Surface};
pub use parts::{
    advance_parts, scatter_parts, KitchenPart, KitchenPartsPlugin, PartFinish, PartKind, PartShape,
};
pub use progress::{LandingPhase, Progress, ProgressPlugin, Reveal};
pub use ui::LandingUiPlugin;

use bevy::prelude::*;

/// Per-frame ordering of the landing view systems
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LandingSystems {
    /// Cursor and window size tracking
    Input,
    /// Moving and placing parts
    Simulate,
    /// Reveal countdown
    Progress,
    /// Writing part transforms
    Render,
    /// Overlay updates
    View,
}

/// Main plugin that bundles the whole landing view
#[derive(Default)]
pub struct ComingSoonPlugin {
    config: Option<LandingConfig>,
}

impl ComingSoonPlugin {
    /// Use `config` instead of reading the config file.
    pub fn new(config: LandingConfig) -> Self {
        Self {
            config: Some(config.sanitized()),
        }
    }
}

impl Plugin for ComingSoonPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().unwrap_or_else(LandingConfig::load);

        app.insert_resource(config)
            .configure_sets(
                Update,
                (
                    LandingSystems::Input,
                    LandingSystems::Simulate,
                    LandingSystems::Progress,
                    LandingSystems::Render,
                    LandingSystems::View,
                )
                    .chain(),
            )
            .add_plugins(PointerPlugin)
            .add_plugins(ProgressPlugin)
            .add_plugins(KitchenPartsPlugin)
            .add_plugins(LandingUiPlugin);
    }
}
