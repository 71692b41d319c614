use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::config::RayConfig;
use crate::layout::build_ray_layout;
use crate::types::RayDescriptor;

/// A frozen ray layout together with the inputs that produced it. Written
/// once, checked later to prove the generator still replays the same
/// scene after refactors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub config: RayConfig,
    pub rays: Vec<RayDescriptor>,
}

#[derive(Debug, PartialEq)]
pub enum VerifyError {
    CountMismatch { recorded: usize, rebuilt: usize },
    RayMismatch { index: usize },
}

impl LayoutSnapshot {
    pub fn capture(config: RayConfig) -> Self {
        let rays = build_ray_layout(config.side, config.ray_count, config.base_duration);
        Self { config, rays }
    }

    pub fn to_json(&self) -> String {
        // Serializing plain numeric fields cannot fail.
        serde_json::to_string_pretty(self).unwrap()
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Rebuilds the layout from the recorded inputs and compares it
    /// field for field against the recorded rays.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let rebuilt =
            build_ray_layout(self.config.side, self.config.ray_count, self.config.base_duration);
        if rebuilt.len() != self.rays.len() {
            return Err(VerifyError::CountMismatch {
                recorded: self.rays.len(),
                rebuilt: rebuilt.len(),
            });
        }
        for (index, (recorded, fresh)) in self.rays.iter().zip(&rebuilt).enumerate() {
            if recorded != fresh {
                return Err(VerifyError::RayMismatch { index });
            }
        }
        Ok(())
    }
}

pub fn write_snapshot(path: &Path, snapshot: &LayoutSnapshot) -> io::Result<()> {
    fs::write(path, snapshot.to_json())
}

pub fn load_snapshot(path: &Path) -> Option<LayoutSnapshot> {
    let raw = fs::read_to_string(path).ok()?;
    LayoutSnapshot::from_json(&raw).ok()
}
