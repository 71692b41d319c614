use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Viewport edge a ray is anchored to. Also selects its tint.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side { Left, Right }

/// Which edges a ray layer covers.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SideMode { Left, Right, Both }

impl SideMode {
    /// Descriptor count for a layer: `Both` pairs the sides and doubles
    /// the requested per-side count.
    pub fn total_rays(self, ray_count: usize) -> usize {
        match self {
            SideMode::Both => ray_count * 2,
            SideMode::Left | SideMode::Right => ray_count,
        }
    }
}

/// One decorative ray: geometry plus drift timing. Immutable once built;
/// the render layer reads descriptors and never writes back.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RayDescriptor {
    pub id: usize,
    /// Width in viewport-width units, 0.5..1.5.
    pub width: f32,
    /// Inset from the anchored edge, percent of viewport width, 0..95.
    pub offset: f32,
    /// Seconds per drift cycle.
    pub duration: f32,
    /// Phase offset in seconds, always non-positive so a fresh layer comes
    /// up mid-cycle instead of with every ray in lockstep.
    pub delay: f32,
    pub side: Side,
}

/// One hero-band sparkle.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SparkleDescriptor {
    pub id: usize,
    /// Position inside the band, percent on each axis, 0..100.
    pub x: f32,
    pub y: f32,
    /// Dot diameter in logical pixels, 0.5..2.5.
    pub size: f32,
    /// Seconds per twinkle cycle, 4..12.
    pub duration: f32,
    /// Seconds before the first cycle starts, 0..5.
    pub delay: f32,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::Left => "left",
            Side::Right => "right",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for SideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SideMode::Left => "left",
            SideMode::Right => "right",
            SideMode::Both => "both",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SideMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(SideMode::Left),
            "right" => Ok(SideMode::Right),
            "both" => Ok(SideMode::Both),
            _ => Err(()),
        }
    }
}
