use bevy::prelude::*;

use crate::config::LandingConfig;
use crate::constants::finish_colors;
use crate::progress::Progress;

/// What a part represents. Decides how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PartKind {
    Cabinet,
    Drawer,
    Countertop,
    Handle,
}

impl PartKind {
    pub const ALL: [PartKind; 4] = [
        PartKind::Cabinet,
        PartKind::Drawer,
        PartKind::Countertop,
        PartKind::Handle,
    ];

    pub fn shape(self) -> PartShape {
        match self {
            PartKind::Cabinet | PartKind::Drawer => PartShape::Block,
            PartKind::Countertop => PartShape::Bar,
            PartKind::Handle => PartShape::Dot,
        }
    }
}

/// Render variants for parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartShape {
    /// Square of side `size`, anchored at its top-left corner
    Block,
    /// `2 * size` wide, `size / 4` tall, anchored at its top-left corner
    Bar,
    /// Circle of radius `size / 4`, anchored at its center
    Dot,
}

impl PartShape {
    /// Footprint of the shape on the surface as `(center, extent)`.
    ///
    /// `anchor` is the part position in surface pixels. The extent is the
    /// full width/height for rectangles and the radius (on both axes) for
    /// the dot, matching unit rectangle and unit circle meshes.
    pub fn footprint(self, anchor: Vec2, size: f32) -> (Vec2, Vec2) {
        match self {
            PartShape::Block => {
                let extent = Vec2::splat(size);
                (anchor + extent / 2.0, extent)
            }
            PartShape::Bar => {
                let extent = Vec2::new(size * 2.0, size / 4.0);
                (anchor + extent / 2.0, extent)
            }
            PartShape::Dot => (anchor, Vec2::splat(size / 4.0)),
        }
    }
}

/// Wood finish a part is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PartFinish {
    SaddleBrown,
    Chocolate,
    Peru,
    Burlywood,
}

impl PartFinish {
    pub const ALL: [PartFinish; 4] = [
        PartFinish::SaddleBrown,
        PartFinish::Chocolate,
        PartFinish::Peru,
        PartFinish::Burlywood,
    ];

    pub fn color(self) -> Color {
        match self {
            PartFinish::SaddleBrown => finish_colors::SADDLE_BROWN,
            PartFinish::Chocolate => finish_colors::CHOCOLATE,
            PartFinish::Peru => finish_colors::PERU,
            PartFinish::Burlywood => finish_colors::BURLYWOOD,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single kitchen part drifting toward its slot.
///
/// Positions are surface pixels with the origin at the top-left corner and
/// y growing downward, the same space the cursor is reported in.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct KitchenPart {
    pub position: Vec2,
    pub target: Vec2,
    pub size: f32,
    pub finish: PartFinish,
    pub kind: PartKind,
    /// Terminal: once set, the part never moves again.
    pub placed: bool,
}

impl KitchenPart {
    pub fn new(position: Vec2, target: Vec2, size: f32, finish: PartFinish, kind: PartKind) -> Self {
        Self {
            position,
            target,
            size,
            finish,
            kind,
            placed: false,
        }
    }

    /// Randomize a part for a surface of size `surface`. It starts below
    /// the bottom edge and aims for a slot anywhere on the surface.
    pub fn random(rng: &mut fastrand::Rng, surface: Vec2, config: &LandingConfig) -> Self {
        let position = Vec2::new(
            rng.f32() * surface.x,
            surface.y + rng.f32() * config.spawn_depth,
        );
        let target = Vec2::new(rng.f32() * surface.x, rng.f32() * surface.y);
        let size = rng.f32() * config.size_span + config.size_min;
        let finish = PartFinish::ALL[rng.usize(..PartFinish::ALL.len())];
        let kind = PartKind::ALL[rng.usize(..PartKind::ALL.len())];
        Self::new(position, target, size, finish, kind)
    }

    pub fn shape(&self) -> PartShape {
        self.kind.shape()
    }

    /// Advance one frame. Returns true on the frame the part gets placed.
    pub fn advance(&mut self, pointer: Vec2, config: &LandingConfig) -> bool {
        if self.placed {
            return false;
        }

        if pointer.distance(self.position) >= config.proximity_radius {
            return false;
        }

        self.position += (self.target - self.position) * config.easing;

        let gap = (self.position - self.target).abs();
        if gap.x < config.snap_tolerance && gap.y < config.snap_tolerance {
            self.placed = true;
            return true;
        }
        false
    }
}

/// Build the startup batch of parts.
pub fn scatter_parts(
    rng: &mut fastrand::Rng,
    surface: Vec2,
    config: &LandingConfig,
) -> Vec<KitchenPart> {
    (0..config.part_count)
        .map(|_| KitchenPart::random(rng, surface, config))
        .collect()
}

/// Run one frame of the simulation over a batch of parts, crediting
/// `progress` for each newly placed part. Returns how many were placed.
pub fn advance_parts<'a>(
    parts: impl IntoIterator<Item = &'a mut KitchenPart>,
    pointer: Vec2,
    config: &LandingConfig,
    progress: &mut Progress,
) -> usize {
    let mut placed = 0;
    for part in parts {
        if part.advance(pointer, config) {
            progress.advance(config.progress_step);
            placed += 1;
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part_at(position: Vec2, target: Vec2) -> KitchenPart {
        KitchenPart::new(position, target, 30.0, PartFinish::Peru, PartKind::Cabinet)
    }

    #[test]
    fn part_on_target_is_placed_on_first_update() {
        let config = LandingConfig::default();
        let mut parts = vec![part_at(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0))];
        let mut progress = Progress::default();

        let placed = advance_parts(&mut parts, Vec2::new(50.0, 50.0), &config, &mut progress);

        assert_eq!(placed, 1);
        assert!(parts[0].placed);
        assert_eq!(progress.percent(), 2);
    }

    #[test]
    fn distant_pointer_leaves_part_alone() {
        let config = LandingConfig::default();
        let start = Vec2::new(400.0, 400.0);
        let mut parts = vec![part_at(start, Vec2::new(10.0, 10.0))];
        let mut progress = Progress::default();

        for pointer in [Vec2::ZERO, Vec2::new(250.0, 300.0), Vec2::new(400.0, 500.0)] {
            for _ in 0..100 {
                advance_parts(&mut parts, pointer, &config, &mut progress);
            }
        }

        assert_eq!(parts[0].position, start);
        assert!(!parts[0].placed);
        assert_eq!(progress.percent(), 0);
    }

    #[test]
    fn radius_is_exclusive() {
        let config = LandingConfig::default();
        let start = Vec2::new(100.0, 0.0);
        let mut part = part_at(start, Vec2::new(200.0, 0.0));

        assert!(!part.advance(Vec2::ZERO, &config));
        assert_eq!(part.position, start);
    }

    #[test]
    fn movement_eases_ten_percent_of_remaining_distance() {
        let config = LandingConfig::default();
        let mut part = part_at(Vec2::new(0.0, 0.0), Vec2::new(100.0, 50.0));

        part.advance(Vec2::ZERO, &config);

        assert!((part.position - Vec2::new(10.0, 5.0)).length() < 1e-4);
        assert!(!part.placed);
    }

    #[test]
    fn pointer_following_part_converges_and_places_once() {
        let config = LandingConfig::default();
        let mut part = part_at(Vec2::new(300.0, 700.0), Vec2::new(320.0, 640.0));
        let mut placements = 0;

        for _ in 0..200 {
            // Keep the cursor on the part the whole way
            let pointer = part.position;
            if part.advance(pointer, &config) {
                placements += 1;
            }
        }

        assert_eq!(placements, 1);
        assert!(part.placed);
        assert!((part.position - part.target).abs().max_element() < config.snap_tolerance);
    }

    #[test]
    fn placed_part_never_moves_again() {
        let config = LandingConfig::default();
        let mut part = part_at(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert!(part.advance(Vec2::new(5.0, 5.0), &config));

        let settled = part.clone();
        part.target = Vec2::new(90.0, 90.0);
        for _ in 0..10 {
            assert!(!part.advance(Vec2::new(5.0, 5.0), &config));
        }

        assert!(part.placed);
        assert_eq!(part.position, settled.position);
    }

    #[test]
    fn progress_saturates_at_one_hundred() {
        let config = LandingConfig::default();
        let spot = Vec2::new(20.0, 20.0);
        let mut parts: Vec<_> = (0..60).map(|_| part_at(spot, spot)).collect();
        let mut progress = Progress::default();

        let placed = advance_parts(&mut parts, spot, &config, &mut progress);

        assert_eq!(placed, 60);
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn scatter_respects_bounds() {
        let config = LandingConfig::default();
        let surface = Vec2::new(800.0, 600.0);
        let mut rng = fastrand::Rng::with_seed(7);

        let parts = scatter_parts(&mut rng, surface, &config);

        assert_eq!(parts.len(), config.part_count);
        for part in &parts {
            assert!(!part.placed);
            assert!((0.0..=surface.x).contains(&part.position.x));
            assert!((surface.y..=surface.y + config.spawn_depth).contains(&part.position.y));
            assert!((0.0..=surface.x).contains(&part.target.x));
            assert!((0.0..=surface.y).contains(&part.target.y));
            assert!((config.size_min..=config.size_min + config.size_span).contains(&part.size));
        }
    }

    #[test]
    fn scatter_is_reproducible_with_a_seed() {
        let config = LandingConfig::default();
        let surface = Vec2::new(1024.0, 768.0);

        let a = scatter_parts(&mut fastrand::Rng::with_seed(42), surface, &config);
        let b = scatter_parts(&mut fastrand::Rng::with_seed(42), surface, &config);

        assert_eq!(a, b);
    }

    #[test]
    fn kinds_map_onto_shapes() {
        assert_eq!(PartKind::Cabinet.shape(), PartShape::Block);
        assert_eq!(PartKind::Drawer.shape(), PartShape::Block);
        assert_eq!(PartKind::Countertop.shape(), PartShape::Bar);
        assert_eq!(PartKind::Handle.shape(), PartShape::Dot);
    }

    #[test]
    fn footprints_follow_anchor_rules() {
        let anchor = Vec2::new(10.0, 20.0);

        let (center, extent) = PartShape::Block.footprint(anchor, 40.0);
        assert_eq!(center, Vec2::new(30.0, 40.0));
        assert_eq!(extent, Vec2::new(40.0, 40.0));

        let (center, extent) = PartShape::Bar.footprint(anchor, 40.0);
        assert_eq!(center, Vec2::new(50.0, 25.0));
        assert_eq!(extent, Vec2::new(80.0, 10.0));

        let (center, extent) = PartShape::Dot.footprint(anchor, 40.0);
        assert_eq!(center, anchor);
        assert_eq!(extent, Vec2::splat(10.0));
    }
}
