use bevy::prelude::*;
use bevy::color::Alpha;
use bevy::ui::px;

use crate::config::LandingConfig;
use crate::constants::{copy, ui_colors, BAR_HEIGHT, BAR_WIDTH, LOGO_SIZE};

// Marker components for overlay elements
#[derive(Component)]
pub struct BuildingPanel;

#[derive(Component)]
pub struct RevealCard;

#[derive(Component)]
pub struct ProgressLabel;

/// Fill of the progress bar. `shown` is the percent currently drawn, which
/// trails the real progress.
#[derive(Component, Default)]
pub struct ProgressFill {
    pub shown: f32,
}

/// Element faded in with the reveal card; `alpha` is its resting opacity.
#[derive(Component)]
pub struct FadeIn {
    pub alpha: f32,
}

fn card_node() -> Node {
    Node {
        padding: UiRect::all(px(32.0)),
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        border_radius: BorderRadius::all(px(12.0)),
        ..default()
    }
}

/// Spawn the overlay: logo, progress panel and the hidden reveal card.
pub fn spawn_overlay(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<LandingConfig>,
) {
    let logo = asset_server.load(config.logo.clone());

    // Root container: full-screen column, centered
    commands
        .spawn((
            Name::new("Landing Overlay"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Pickable::IGNORE,
        ))
        .with_children(|root| {
            root.spawn((
                Name::new("Logo"),
                ImageNode::new(logo),
                Node {
                    width: px(LOGO_SIZE),
                    height: px(LOGO_SIZE),
                    margin: UiRect::bottom(px(32.0)),
                    border_radius: BorderRadius::MAX,
                    ..default()
                },
            ));

            root.spawn((
                BuildingPanel,
                Name::new("Building Panel"),
                card_node(),
                BackgroundColor(ui_colors::CARD),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Text::new(copy::BUILDING_TITLE),
                    TextFont {
                        font_size: 30.0,
                        ..default()
                    },
                    TextColor(ui_colors::HEADING),
                    Node {
                        margin: UiRect::bottom(px(16.0)),
                        ..default()
                    },
                ));

                // Track + fill
                panel
                    .spawn((
                        Node {
                            width: px(BAR_WIDTH),
                            height: px(BAR_HEIGHT),
                            overflow: Overflow::clip(),
                            border_radius: BorderRadius::all(px(BAR_HEIGHT / 2.0)),
                            ..default()
                        },
                        BackgroundColor(ui_colors::TRACK),
                    ))
                    .with_children(|track| {
                        track.spawn((
                            ProgressFill::default(),
                            Node {
                                width: Val::Percent(0.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(ui_colors::FILL),
                        ));
                    });

                panel.spawn((
                    ProgressLabel,
                    Text::new("Progress: 0%"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(ui_colors::BODY),
                    Node {
                        margin: UiRect::top(px(16.0)),
                        ..default()
                    },
                ));

                panel.spawn((
                    Text::new(copy::BUILDING_HINT),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(ui_colors::HEADING),
                    Node {
                        margin: UiRect::top(px(16.0)),
                        ..default()
                    },
                ));
            });

            // Reveal card, not laid out until the reveal
            root.spawn((
                RevealCard,
                Name::new("Reveal Card"),
                Node {
                    display: Display::None,
                    ..card_node()
                },
                BackgroundColor(ui_colors::CARD.with_alpha(0.0)),
                FadeIn {
                    alpha: ui_colors::CARD.alpha(),
                },
            ))
            .with_children(|card| {
                card.spawn((
                    Text::new(copy::REVEAL_TITLE),
                    TextFont {
                        font_size: 60.0,
                        ..default()
                    },
                    TextColor(ui_colors::HEADING.with_alpha(0.0)),
                    FadeIn { alpha: 1.0 },
                    Node {
                        margin: UiRect::bottom(px(16.0)),
                        ..default()
                    },
                ));

                card.spawn((
                    Text::new(copy::REVEAL_SUBTITLE),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(ui_colors::BODY.with_alpha(0.0)),
                    FadeIn { alpha: 1.0 },
                    Node {
                        margin: UiRect::bottom(px(32.0)),
                        ..default()
                    },
                ));
            });
        });
}
