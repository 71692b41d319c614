use bevy::color::palettes::tailwind::{EMERALD_400, SLATE_950};
use bevy::prelude::*;

use crate::plugin::{FontHandles, SiteData};
use crate::scene::ScrollState;

pub fn systems() -> impl Plugin {
    HudPlugin
}

struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, setup_hud)
            .add_systems(Update, update_progress_bar);
    }
}

/// The emerald bar whose width tracks scroll progress.
#[derive(Component)]
struct ProgressFill;

fn setup_hud(mut commands: Commands, site: Res<SiteData>, fonts: Res<FontHandles>) {
    let meta = &site.content.meta;

    // Scroll progress bar, pinned to the very top edge.
    commands.spawn((
        NodeBundle {
            style: Style {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(0.0),
                height: Val::Px(3.0),
                ..default()
            },
            background_color: Color::from(EMERALD_400).into(),
            z_index: ZIndex::Global(60),
            ..default()
        },
        ProgressFill,
    ));

    // Fixed navbar strip under the progress bar.
    commands.spawn(NodeBundle {
        style: Style {
            position_type: PositionType::Absolute,
            top: Val::Px(3.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Px(52.0),
            border: UiRect::bottom(Val::Px(1.0)),
            ..default()
        },
        background_color: Color::from(SLATE_950).with_alpha(0.7).into(),
        border_color: Color::srgba(1.0, 1.0, 1.0, 0.1).into(),
        z_index: ZIndex::Global(50),
        ..default()
    });

    commands.spawn(TextBundle {
        z_index: ZIndex::Global(55),
        ..TextBundle::from_sections([
            TextSection::new(
                meta.wordmark_leading.clone(),
                TextStyle {
                    font: fonts.display.clone(),
                    font_size: 20.0,
                    color: Color::srgba(1.0, 1.0, 1.0, 0.9),
                },
            ),
            TextSection::new(
                meta.wordmark_accent.clone(),
                TextStyle {
                    font: fonts.display.clone(),
                    font_size: 20.0,
                    color: EMERALD_400.into(),
                },
            ),
        ])
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(18.0),
            left: Val::Px(24.0),
            ..default()
        })
    });

    let nav = meta.nav_labels.join("      ");
    commands.spawn(TextBundle {
        z_index: ZIndex::Global(55),
        ..TextBundle::from_section(
            nav,
            TextStyle {
                font: fonts.body.clone(),
                font_size: 14.0,
                color: Color::srgba(1.0, 1.0, 1.0, 0.8),
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(22.0),
            right: Val::Px(24.0),
            ..default()
        })
    });
}

fn update_progress_bar(
    scroll: Option<Res<ScrollState>>,
    mut fill: Query<&mut Style, With<ProgressFill>>,
) {
    let Some(scroll) = scroll else { return };
    if let Ok(mut style) = fill.get_single_mut() {
        style.width = Val::Percent(scroll.progress * 100.0);
    }
}
