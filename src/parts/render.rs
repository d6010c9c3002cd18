//! Drawing kitchen parts as 2D meshes.
//!
//! Every part shares one unit square or unit circle mesh and one material
//! per finish; its `Transform` carries position and size.

use bevy::prelude::*;

use super::data::{KitchenPart, PartFinish, PartShape};
use crate::input::Surface;

/// Depth step between parts so overlapping parts draw in a stable order.
const DEPTH_STEP: f32 = 0.001;

/// Shared mesh and material handles for parts.
#[derive(Resource, Clone)]
pub struct PartAssets {
    pub square: Handle<Mesh>,
    pub disc: Handle<Mesh>,
    pub finishes: [Handle<ColorMaterial>; 4],
}

impl PartAssets {
    pub fn mesh_for(&self, shape: PartShape) -> Handle<Mesh> {
        match shape {
            PartShape::Block | PartShape::Bar => self.square.clone(),
            PartShape::Dot => self.disc.clone(),
        }
    }

    pub fn material_for(&self, finish: PartFinish) -> Handle<ColorMaterial> {
        self.finishes[finish.index()].clone()
    }
}

/// Create the shared part meshes and materials.
pub fn setup_part_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let square = meshes.add(Rectangle::new(1.0, 1.0));
    let disc = meshes.add(Circle::new(1.0));
    let finishes = PartFinish::ALL.map(|finish| materials.add(finish.color()));

    commands.insert_resource(PartAssets {
        square,
        disc,
        finishes,
    });
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Landing Camera"), Camera2d));
}

/// World transform for a part drawn at depth `z`.
pub fn part_transform(part: &KitchenPart, surface: &Surface, z: f32) -> Transform {
    let (center, extent) = part.shape().footprint(part.position, part.size);
    Transform::from_translation(surface.to_world(center).extend(z))
        .with_scale(extent.extend(1.0))
}

/// Components for a freshly spawned part; `order` picks its depth.
pub fn part_bundle(
    part: KitchenPart,
    order: usize,
    assets: &PartAssets,
    surface: &Surface,
) -> impl Bundle {
    let transform = part_transform(&part, surface, order as f32 * DEPTH_STEP);
    (
        Name::new(format!("{:?} {}", part.kind, order)),
        Mesh2d(assets.mesh_for(part.shape())),
        MeshMaterial2d(assets.material_for(part.finish)),
        transform,
        part,
    )
}

/// Redraw every part at its current position for the current surface.
pub fn sync_part_transforms(
    surface: Res<Surface>,
    mut parts: Query<(&KitchenPart, &mut Transform)>,
) {
    for (part, mut transform) in &mut parts {
        let z = transform.translation.z;
        *transform = part_transform(part, &surface, z);
    }
}
