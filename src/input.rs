//! Pointer and surface-size tracking.
//!
//! Both values are in logical pixels with the origin at the window's
//! top-left corner, the space `CursorMoved` reports positions in.

use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowResized};

use crate::LandingSystems;

/// Last known cursor position. Starts at the origin until the cursor moves.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

/// Current size of the drawing surface.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct Surface {
    pub size: Vec2,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Convert a surface position (top-left origin, y down) into 2D world
    /// space (centered origin, y up) for a camera at the origin.
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.size.x / 2.0, self.size.y / 2.0 - point.y)
    }
}

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<Surface>()
            .add_systems(
                Update,
                (track_pointer, track_surface).in_set(LandingSystems::Input),
            );
    }
}

/// Keep only the latest cursor position of the frame.
pub fn track_pointer(mut cursor: MessageReader<CursorMoved>, mut pointer: ResMut<PointerState>) {
    if let Some(moved) = cursor.read().last() {
        pointer.position = moved.position;
    }
}

/// Follow resizes of the primary window. Parts are untouched; only the
/// mapping used to draw them changes.
pub fn track_surface(
    mut resized: MessageReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut surface: ResMut<Surface>,
) {
    let Ok(window) = primary.single() else {
        resized.clear();
        return;
    };

    if let Some(event) = resized.read().filter(|e| e.window == window).last() {
        *surface = Surface::new(event.width, event.height);
        debug!("Surface resized to {}x{}", event.width, event.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn surface_corners_map_to_world_corners() {
        let surface = Surface::new(800.0, 600.0);

        assert_eq!(surface.to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(surface.to_world(Vec2::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
        assert_eq!(surface.to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn pointer_starts_at_origin() {
        assert_eq!(PointerState::default().position, Vec2::ZERO);
    }

    #[test]
    fn last_cursor_move_of_the_frame_wins() {
        let mut world = World::new();
        world.init_resource::<PointerState>();
        world.init_resource::<Messages<CursorMoved>>();
        let window = world.spawn(PrimaryWindow).id();

        for position in [Vec2::new(10.0, 20.0), Vec2::new(300.0, 150.0)] {
            world.write_message(CursorMoved {
                window,
                position,
                delta: None,
            });
        }
        world.run_system_once(track_pointer).unwrap();

        assert_eq!(world.resource::<PointerState>().position, Vec2::new(300.0, 150.0));
    }

    #[test]
    fn pointer_holds_still_without_cursor_moves() {
        let mut world = World::new();
        world.insert_resource(PointerState {
            position: Vec2::new(42.0, 7.0),
        });
        world.init_resource::<Messages<CursorMoved>>();

        world.run_system_once(track_pointer).unwrap();

        assert_eq!(world.resource::<PointerState>().position, Vec2::new(42.0, 7.0));
    }
}
