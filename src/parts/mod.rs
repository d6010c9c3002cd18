pub mod data;
pub mod render;

pub use data::*;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::LandingConfig;
use crate::input::{PointerState, Surface};
use crate::progress::Progress;
use crate::LandingSystems;
use render::PartAssets;

pub struct KitchenPartsPlugin;

impl Plugin for KitchenPartsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<KitchenPart>()
            .register_type::<PartKind>()
            .register_type::<PartFinish>()
            .add_systems(
                Startup,
                (
                    render::spawn_camera,
                    (render::setup_part_assets, spawn_kitchen_parts).chain(),
                ),
            )
            .add_systems(
                Update,
                advance_kitchen_parts.in_set(LandingSystems::Simulate),
            )
            .add_systems(
                Update,
                render::sync_part_transforms.in_set(LandingSystems::Render),
            );
    }
}

/// Scatter the startup batch of parts across the primary window.
///
/// Without a window there is nothing to draw on, so no parts are created
/// and the simulation stays idle.
pub fn spawn_kitchen_parts(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<LandingConfig>,
    assets: Res<PartAssets>,
    mut surface: ResMut<Surface>,
) {
    let Ok(window) = windows.single() else {
        debug!("No primary window, kitchen parts not spawned");
        return;
    };

    *surface = Surface::new(window.width(), window.height());

    let mut rng = fastrand::Rng::new();
    let parts = scatter_parts(&mut rng, surface.size, &config);
    let count = parts.len();
    for (order, part) in parts.into_iter().enumerate() {
        commands.spawn(render::part_bundle(part, order, &assets, &surface));
    }

    info!(
        "Spawned {} kitchen parts for a {}x{} surface",
        count, surface.size.x, surface.size.y
    );
}

/// Per-frame update: pull parts near the cursor toward their slots.
pub fn advance_kitchen_parts(
    pointer: Res<PointerState>,
    config: Res<LandingConfig>,
    mut progress: ResMut<Progress>,
    mut parts: Query<&mut KitchenPart>,
) {
    let unplaced = parts
        .iter_mut()
        .filter(|part| !part.placed)
        .map(Mut::into_inner);

    // Only flag progress as changed when a part actually lands
    let placed = advance_parts(
        unplaced,
        pointer.position,
        &config,
        progress.bypass_change_detection(),
    );
    if placed > 0 {
        progress.set_changed();
        debug!("{} part(s) placed, progress {}%", placed, progress.percent());
    }
}
