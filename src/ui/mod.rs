//! Overlay UI: progress panel, then the "Coming Soon" card.

mod panels;

pub use panels::*;

use bevy::color::Alpha;
use bevy::prelude::*;

use crate::config::LandingConfig;
use crate::constants::ui_colors;
use crate::progress::{LandingPhase, Progress};
use crate::LandingSystems;

pub struct LandingUiPlugin;

impl Plugin for LandingUiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(ui_colors::BACKGROUND))
            .add_systems(Startup, spawn_overlay)
            .add_systems(OnEnter(LandingPhase::Revealed), show_reveal_card)
            .add_systems(
                Update,
                (update_progress_label, animate_progress_fill)
                    .run_if(in_state(LandingPhase::Building))
                    .in_set(LandingSystems::View),
            )
            .add_systems(
                Update,
                fade_in_reveal
                    .run_if(in_state(LandingPhase::Revealed))
                    .in_set(LandingSystems::View),
            );
    }
}

/// Move `current` toward `target` like a first-order lag with time
/// constant `tau`. A non-positive `tau` jumps straight to the target.
pub fn ease_toward(current: f32, target: f32, dt: f32, tau: f32) -> f32 {
    if tau <= 0.0 {
        return target;
    }
    current + (target - current) * (1.0 - (-dt / tau).exp())
}

/// Opacity factor `0..=1` after `elapsed` seconds of a `duration` fade.
pub fn fade_factor(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

fn update_progress_label(
    progress: Res<Progress>,
    mut labels: Query<&mut Text, With<ProgressLabel>>,
) {
    if !progress.is_changed() {
        return;
    }
    for mut text in labels.iter_mut() {
        **text = format!("Progress: {}%", progress.percent());
    }
}

fn animate_progress_fill(
    time: Res<Time>,
    progress: Res<Progress>,
    config: Res<LandingConfig>,
    mut fills: Query<(&mut ProgressFill, &mut Node)>,
) {
    let target = progress.fraction() * 100.0;
    for (mut fill, mut node) in fills.iter_mut() {
        if fill.shown == target {
            continue;
        }
        fill.shown = ease_toward(
            fill.shown,
            target,
            time.delta_secs(),
            config.bar_smoothing_secs,
        );
        // Settle instead of creeping forever
        if (target - fill.shown).abs() < 0.05 {
            fill.shown = target;
        }
        node.width = Val::Percent(fill.shown);
    }
}

/// Swap the progress panel for the reveal card.
fn show_reveal_card(
    mut panels: Query<&mut Node, (With<BuildingPanel>, Without<RevealCard>)>,
    mut cards: Query<&mut Node, (With<RevealCard>, Without<BuildingPanel>)>,
) {
    for mut node in panels.iter_mut() {
        node.display = Display::None;
    }
    for mut node in cards.iter_mut() {
        node.display = Display::Flex;
    }
}

fn fade_in_reveal(
    time: Res<Time>,
    config: Res<LandingConfig>,
    mut elapsed: Local<f32>,
    mut backgrounds: Query<(&FadeIn, &mut BackgroundColor)>,
    mut texts: Query<(&FadeIn, &mut TextColor)>,
) {
    if *elapsed > config.fade_in_secs && config.fade_in_secs > 0.0 {
        return;
    }
    *elapsed += time.delta_secs();
    let factor = fade_factor(*elapsed, config.fade_in_secs);

    for (fade, mut color) in backgrounds.iter_mut() {
        color.0.set_alpha(fade.alpha * factor);
    }
    for (fade, mut color) in texts.iter_mut() {
        color.0.set_alpha(fade.alpha * factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn ease_moves_part_of_the_way() {
        let next = ease_toward(0.0, 100.0, 0.016, 0.1);
        assert!(next > 0.0 && next < 100.0);

        // One time constant covers ~63% of the gap
        let one_tau = ease_toward(0.0, 100.0, 0.1, 0.1);
        assert!((one_tau - 63.212).abs() < 0.01);
    }

    #[test]
    fn ease_without_smoothing_jumps() {
        assert_eq!(ease_toward(10.0, 42.0, 0.016, 0.0), 42.0);
    }

    #[test]
    fn ease_never_overshoots() {
        let mut shown = 0.0;
        for _ in 0..1000 {
            shown = ease_toward(shown, 100.0, 0.5, 0.1);
            assert!(shown <= 100.0);
        }
    }

    #[test]
    fn fade_factor_is_clamped() {
        assert_eq!(fade_factor(0.0, 0.5), 0.0);
        assert_eq!(fade_factor(0.25, 0.5), 0.5);
        assert_eq!(fade_factor(3.0, 0.5), 1.0);
        assert_eq!(fade_factor(0.0, 0.0), 1.0);
    }

    #[test]
    fn label_shows_current_percent() {
        let mut world = World::new();
        world.init_resource::<Progress>();
        world.resource_mut::<Progress>().advance(34);
        let label = world.spawn((Text::new("Progress: 0%"), ProgressLabel)).id();

        world.run_system_once(update_progress_label).unwrap();

        assert_eq!(world.get::<Text>(label).unwrap().0, "Progress: 34%");
    }

    #[test]
    fn revealing_swaps_panel_for_card() {
        let mut world = World::new();
        let panel = world.spawn((BuildingPanel, Node::default())).id();
        let card = world
            .spawn((
                RevealCard,
                Node {
                    display: Display::None,
                    ..default()
                },
            ))
            .id();

        world.run_system_once(show_reveal_card).unwrap();

        assert_eq!(world.get::<Node>(panel).unwrap().display, Display::None);
        assert_eq!(world.get::<Node>(card).unwrap().display, Display::Flex);
    }
}
