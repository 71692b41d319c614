use bevy::color::palettes::tailwind::{CYAN_500, EMERALD_500};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_tweening::lens::*;
use bevy_tweening::*;
use std::time::Duration;

use crate::layout::{build_ray_layout, RAY_FLICKER};
use crate::lifecycle::{cycle_phase, keyframe_track, safe_cycle_secs};
use crate::plugin::{GlowfolioSettings, ViewReady};
use crate::textures::vertical_fade;
use crate::types::{RayDescriptor, Side};

/// Peak sprite alpha; the flicker keyframes scale it further down.
const RAY_PEAK_ALPHA: f32 = 0.4;
const RAY_LAYER_Z: f32 = -6.0;
const GRADIENT_ROWS: u32 = 256;

pub struct RayLayerPlugin;

impl Plugin for RayLayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (spawn_ray_layer, flicker_rays));
    }
}

/// Anchor entity for one spawned layer. Despawning it recursively tears
/// down every ray sprite and animator in one call.
#[derive(Component)]
pub struct RayLayer;

#[derive(Component)]
pub struct Ray {
    descriptor: RayDescriptor,
    /// Seconds to add to app time so the flicker lands on the same cycle
    /// position as the drift tween.
    cycle_offset: f32,
}

fn side_tint(side: Side) -> Color {
    match side {
        Side::Left => CYAN_500.into(),
        Side::Right => EMERALD_500.into(),
    }
}

/// Spawns the hero ray layer on the readiness edge. Until [`ViewReady`]
/// fires, no ray exists anywhere in the world.
fn spawn_ray_layer(
    mut commands: Commands,
    mut ready_rx: EventReader<ViewReady>,
    settings: Res<GlowfolioSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut images: ResMut<Assets<Image>>,
    existing: Query<(), With<RayLayer>>,
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

    let rays = build_ray_layout(
        settings.rays.side,
        settings.rays.ray_count,
        settings.rays.base_duration,
    );
    info!("ray layer up: {} rays ({})", rays.len(), settings.rays.side);

    let gradient = images.add(vertical_fade(GRADIENT_ROWS));
    let now = time.elapsed_seconds();

    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_xyz(0.0, 0.0, RAY_LAYER_Z)),
            RayLayer,
        ))
        .with_children(|layer| {
            for descriptor in rays {
                spawn_ray(layer, descriptor, &gradient, view_w, band_h, now);
            }
        });
}

fn spawn_ray(
    layer: &mut ChildBuilder,
    descriptor: RayDescriptor,
    gradient: &Handle<Image>,
    view_w: f32,
    band_h: f32,
    now: f32,
) {
    let width_px = descriptor.width / 100.0 * view_w;
    let inset = descriptor.offset / 100.0 * view_w;
    let x = match descriptor.side {
        Side::Left => -view_w / 2.0 + inset + width_px / 2.0,
        Side::Right => view_w / 2.0 - inset - width_px / 2.0,
    };
    // Siblings keep a stable blend order via a tiny z stagger.
    let z = descriptor.id as f32 * 0.001;

    let duration = safe_cycle_secs(descriptor.duration);
    let mut drift = Tween::new(
        EaseMethod::Linear,
        Duration::from_secs_f32(duration),
        TransformPositionLens {
            start: Vec3::new(x, band_h, z),
            end: Vec3::new(x, -band_h, z),
        },
    )
    .with_repeat_count(RepeatCount::Infinite);
    // A negative delay means the cycle is already this far along.
    let phase = cycle_phase(descriptor.delay, duration);
    drift.set_elapsed(Duration::from_secs_f32(phase));

    layer.spawn((
        SpriteBundle {
            texture: gradient.clone(),
            sprite: Sprite {
                color: side_tint(descriptor.side).with_alpha(0.0),
                custom_size: Some(Vec2::new(width_px, band_h)),
                ..default()
            },
            transform: Transform::from_xyz(x, band_h, z),
            ..default()
        },
        Ray { descriptor, cycle_offset: phase - now },
        Animator::new(drift),
    ));
}

/// Runs every ray's opacity along the flicker keyframes, phase-locked to
/// its drift cycle.
fn flicker_rays(time: Res<Time>, mut rays: Query<(&Ray, &mut Sprite)>) {
    let now = time.elapsed_seconds();
    for (ray, mut sprite) in rays.iter_mut() {
        let duration = safe_cycle_secs(ray.descriptor.duration);
        let position = ((now + ray.cycle_offset) / duration).rem_euclid(1.0);
        let alpha = RAY_PEAK_ALPHA * keyframe_track(&RAY_FLICKER, position);
        sprite.color = side_tint(ray.descriptor.side).with_alpha(alpha);
    }
}
