use crate::rng::SequenceRng;
use crate::types::{RayDescriptor, Side, SideMode, SparkleDescriptor};

/// Fixed seed shared by every ray layer. The pattern is part of the page's
/// identity and must survive re-mounts and restarts unchanged.
pub const LAYOUT_SEED: u32 = 1234;

pub const RAY_WIDTH_MIN_VW: f32 = 0.5;
pub const RAY_WIDTH_SPAN_VW: f32 = 1.0;
pub const RAY_OFFSET_MAX_PCT: f32 = 95.0;
pub const RAY_DURATION_JITTER_SECS: f32 = 7.5;

/// Opacity keyframes for the ray flicker, spread evenly over one cycle,
/// linear in between. Applied on top of the peak tint alpha.
pub const RAY_FLICKER: [f32; 5] = [0.1, 0.2, 0.08, 0.15, 0.1];

/// Opacity and scale keyframes for the sparkle twinkle, eased per segment.
pub const SPARKLE_OPACITY: [f32; 5] = [0.0, 0.2, 0.0, 0.3, 0.0];
pub const SPARKLE_SCALE: [f32; 5] = [1.0, 1.2, 0.8, 1.1, 1.0];

const SPARKLE_SIZE_MIN_PX: f32 = 0.5;
const SPARKLE_SIZE_SPAN_PX: f32 = 2.0;
const SPARKLE_DURATION_MIN_SECS: f32 = 4.0;
const SPARKLE_DURATION_SPAN_SECS: f32 = 8.0;
const SPARKLE_DELAY_SPAN_SECS: f32 = 5.0;

/// Builds the ray descriptors for one layer.
///
/// Every layer restarts the generator at [`LAYOUT_SEED`], so equal inputs
/// give equal layouts. The four draws per ray happen in a fixed order
/// (width, offset, duration, delay); reordering them would shift every
/// later value. `Both` doubles the count and alternates sides starting on
/// the left; a single side keeps the identical draw sequence and pins each
/// ray to that side.
pub fn build_ray_layout(side: SideMode, ray_count: usize, base_duration: f32) -> Vec<RayDescriptor> {
    let mut rng = SequenceRng::new(LAYOUT_SEED);
    let total = side.total_rays(ray_count);
    let mut rays = Vec::with_capacity(total);
    for id in 0..total {
        let ray_side = match side {
            SideMode::Both => {
                if id % 2 == 0 { Side::Left } else { Side::Right }
            }
            SideMode::Left => Side::Left,
            SideMode::Right => Side::Right,
        };
        let width = rng.next_f32() * RAY_WIDTH_SPAN_VW + RAY_WIDTH_MIN_VW;
        let offset = rng.next_f32() * RAY_OFFSET_MAX_PCT;
        let duration = base_duration + rng.next_f32() * (RAY_DURATION_JITTER_SECS * 2.0)
            - RAY_DURATION_JITTER_SECS;
        let delay = -(rng.next_f32() * base_duration);
        rays.push(RayDescriptor { id, width, offset, duration, delay, side: ray_side });
    }
    rays
}

/// Builds the sparkle field for the hero band. Seeded like the rays so the
/// whole scene replays bit-for-bit; pass a different seed for a different
/// constellation.
pub fn build_sparkle_field(count: usize, seed: u32) -> Vec<SparkleDescriptor> {
    let mut rng = SequenceRng::new(seed);
    let mut sparkles = Vec::with_capacity(count);
    for id in 0..count {
        let x = rng.next_f32() * 100.0;
        let y = rng.next_f32() * 100.0;
        let size = rng.next_f32() * SPARKLE_SIZE_SPAN_PX + SPARKLE_SIZE_MIN_PX;
        let duration = rng.next_f32() * SPARKLE_DURATION_SPAN_SECS + SPARKLE_DURATION_MIN_SECS;
        let delay = rng.next_f32() * SPARKLE_DELAY_SPAN_SECS;
        sparkles.push(SparkleDescriptor { id, x, y, size, duration, delay });
    }
    sparkles
}
