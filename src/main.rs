//! Main binary for running the landing view standalone.

use bevy::prelude::*;
use kitchen_coming_soon::ComingSoonPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dream Kitchen - Coming Soon".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ComingSoonPlugin::default())
        .run();
}
