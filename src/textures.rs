//! Procedural stand-ins for the page's CSS paintwork: the ray gradient,
//! sparkle dots, hero glow washes and the faint background grid. Built
//! once at spawn time, tinted per sprite.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// White column whose alpha ramps from opaque at the top to transparent at
/// the bottom. A ray sprite stretches this and multiplies its tint in.
pub fn vertical_fade(height: u32) -> Image {
    rgba_image(1, height, vertical_fade_pixels(height))
}

pub(crate) fn vertical_fade_pixels(height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(height as usize * 4);
    for row in 0..height {
        let t = 1.0 - row as f32 / (height.max(2) - 1) as f32;
        data.extend_from_slice(&[255, 255, 255, (t * 255.0) as u8]);
    }
    data
}

/// Soft white dot with a quadratic falloff, used for sparkles.
pub fn soft_disc(diameter: u32) -> Image {
    rgba_image(diameter, diameter, radial_pixels(diameter, 2.0))
}

/// Wide, very soft blob for the hero's blurred color washes.
pub fn radial_glow(diameter: u32) -> Image {
    rgba_image(diameter, diameter, radial_pixels(diameter, 3.0))
}

pub(crate) fn radial_pixels(diameter: u32, falloff: f32) -> Vec<u8> {
    let mut data = Vec::with_capacity((diameter * diameter) as usize * 4);
    let radius = diameter as f32 / 2.0;
    for y in 0..diameter {
        for x in 0..diameter {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let dist = (dx * dx + dy * dy).sqrt() / radius;
            let alpha = (1.0 - dist).clamp(0.0, 1.0).powf(falloff);
            data.extend_from_slice(&[255, 255, 255, (alpha * 255.0) as u8]);
        }
    }
    data
}

/// One grid cell: hairline top and left edges, transparent body. Tiled
/// across the page it reads as the site's faint background grid.
pub fn grid_tile(cell: u32) -> Image {
    rgba_image(cell, cell, grid_tile_pixels(cell))
}

pub(crate) fn grid_tile_pixels(cell: u32) -> Vec<u8> {
    let mut data = vec![0u8; (cell * cell) as usize * 4];
    for x in 0..cell {
        write_px(&mut data, cell, x, 0, [255, 255, 255, 10]);
    }
    for y in 0..cell {
        write_px(&mut data, cell, 0, y, [255, 255, 255, 10]);
    }
    data
}

fn write_px(data: &mut [u8], width: u32, x: u32, y: u32, rgba: [u8; 4]) {
    let at = ((y * width + x) * 4) as usize;
    data[at..at + 4].copy_from_slice(&rgba);
}

fn rgba_image(width: u32, height: u32, data: Vec<u8>) -> Image {
    Image::new(
        Extent3d { width, height, depth_or_array_layers: 1 },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}
