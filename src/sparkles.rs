use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::layout::{build_sparkle_field, SPARKLE_OPACITY, SPARKLE_SCALE};
use crate::lifecycle::{keyframe_track_eased, safe_cycle_secs};
use crate::plugin::{GlowfolioSettings, ViewReady};
use crate::textures::soft_disc;
use crate::types::SparkleDescriptor;

const SPARKLE_LAYER_Z: f32 = -7.0;
const DISC_TEXTURE_PX: u32 = 32;

pub struct SparklePlugin;

impl Plugin for SparklePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_sparkles, twinkle));
    }
}

#[derive(Component)]
pub struct SparkleLayer;

#[derive(Component)]
pub struct Sparkle {
    descriptor: SparkleDescriptor,
    /// App time at which the first twinkle cycle begins.
    start: f32,
}

/// Scatters the hero sparkle field on the readiness edge, gated exactly
/// like the rays.
fn spawn_sparkles(
    mut commands: Commands,
    mut ready_rx: EventReader<ViewReady>,
    settings: Res<GlowfolioSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut images: ResMut<Assets<Image>>,
    existing: Query<(), With<SparkleLayer>>,
    time: Res<Time>,
) {
    if ready_rx.is_empty() {
        return;
    }
    ready_rx.clear();
    if !existing.is_empty() {
        return;
    }
    let Ok(window) = windows.get_single() else { return };
    let view_w = window.width();
    let band_h = window.height();

    let field = build_sparkle_field(settings.sparkles.count, settings.sparkles.seed);
    let disc = images.add(soft_disc(DISC_TEXTURE_PX));
    let now = time.elapsed_seconds();

    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_xyz(0.0, 0.0, SPARKLE_LAYER_Z)),
            SparkleLayer,
        ))
        .with_children(|layer| {
            for descriptor in field {
                let x = descriptor.x / 100.0 * view_w - view_w / 2.0;
                let y = band_h / 2.0 - descriptor.y / 100.0 * band_h;
                layer.spawn((
                    SpriteBundle {
                        texture: disc.clone(),
                        sprite: Sprite {
                            color: Color::srgba(1.0, 1.0, 1.0, 0.0),
                            custom_size: Some(Vec2::splat(descriptor.size * 2.0)),
                            ..default()
                        },
                        transform: Transform::from_xyz(x, y, 0.0),
                        ..default()
                    },
                    Sparkle { descriptor, start: now + descriptor.delay },
                ));
            }
        });
}

/// Eased opacity and scale cycles per sparkle. Nothing shows until a
/// sparkle's delay has elapsed.
fn twinkle(time: Res<Time>, mut sparkles: Query<(&Sparkle, &mut Sprite, &mut Transform)>) {
    let now = time.elapsed_seconds();
    for (sparkle, mut sprite, mut transform) in sparkles.iter_mut() {
        let local = now - sparkle.start;
        if local < 0.0 {
            sprite.color = sprite.color.with_alpha(0.0);
            continue;
        }
        let duration = safe_cycle_secs(sparkle.descriptor.duration);
        let position = (local / duration).rem_euclid(1.0);
        let alpha = keyframe_track_eased(&SPARKLE_OPACITY, position);
        let scale = keyframe_track_eased(&SPARKLE_SCALE, position);
        sprite.color = Color::srgba(1.0, 1.0, 1.0, alpha);
        transform.scale = Vec3::splat(scale);
    }
}
