// Readiness gating plus the small animation math the render layer leans on.
// Everything here is pure and stepped explicitly, which keeps it testable
// without a windowing stack.

/// One-way readiness flag for a hosted view.
///
/// A view starts `Pending` and renders no decorative effects; once the host
/// confirms an interactive surface exists it flips to `Ready` and stays
/// there for the life of the instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Pending,
    Ready,
}

impl Lifecycle {
    /// Marks the view interactive. Returns `true` only on the transition
    /// edge, so callers can fire one-shot work exactly once.
    pub fn confirm(&mut self) -> bool {
        match self {
            Lifecycle::Pending => {
                *self = Lifecycle::Ready;
                true
            }
            Lifecycle::Ready => false,
        }
    }

    pub fn is_ready(self) -> bool { matches!(self, Lifecycle::Ready) }
}

/// Damped spring follower used by the scroll progress indicator.
///
/// Semi-implicit Euler is plenty at UI rates; `step` clamps `dt` because a
/// long frame hitch would otherwise destabilize the integration.
#[derive(Copy, Clone, Debug)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub stiffness: f32,
    pub damping: f32,
}

const SPRING_MAX_DT: f32 = 0.05;

impl Spring {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self { value: 0.0, velocity: 0.0, stiffness, damping }
    }

    /// Jumps straight to `value` with no residual motion.
    pub fn settle_at(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
    }

    /// Advances toward `target` by `dt` seconds and returns the new value.
    pub fn step(&mut self, target: f32, dt: f32) -> f32 {
        let dt = dt.clamp(0.0, SPRING_MAX_DT);
        let accel = self.stiffness * (target - self.value) - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
        self.value
    }
}

/// Attract-mode scroll program: dwell at the top, glide to the bottom,
/// dwell, glide back, forever.
#[derive(Copy, Clone, Debug)]
pub struct ScrollTimeline {
    pub glide_secs: f32,
    pub dwell_secs: f32,
}

impl ScrollTimeline {
    pub fn period(self) -> f32 { 2.0 * (self.glide_secs + self.dwell_secs) }

    /// Maps elapsed seconds to a page fraction in `0..=1`.
    pub fn target(self, elapsed: f32) -> f32 {
        let glide = self.glide_secs.max(f32::EPSILON);
        let dwell = self.dwell_secs.max(0.0);
        let period = 2.0 * (glide + dwell);
        let t = elapsed.rem_euclid(period);
        if t < dwell {
            0.0
        } else if t < dwell + glide {
            (t - dwell) / glide
        } else if t < 2.0 * dwell + glide {
            1.0
        } else {
            1.0 - (t - 2.0 * dwell - glide) / glide
        }
    }
}

/// Folds a signed phase offset into `[0, duration)`.
///
/// Negative delays mean "already this far into the cycle", so a layer that
/// spawns late still looks like it has been drifting all along. Offsets
/// larger than one cycle wrap.
pub fn cycle_phase(delay: f32, duration: f32) -> f32 {
    if !(duration > 0.0) || !delay.is_finite() {
        return 0.0;
    }
    (-delay).rem_euclid(duration)
}

/// Clamps a cycle length to something `Duration` and division can take.
/// Garbage configuration degrades to a visible one-second cycle rather
/// than taking the view down.
pub fn safe_cycle_secs(secs: f32) -> f32 {
    if secs.is_finite() && secs > 0.0 { secs } else { 1.0 }
}

/// Samples an evenly spaced keyframe list at `phase` in `0..=1`, linear
/// between neighbours.
pub fn keyframe_track(frames: &[f32], phase: f32) -> f32 {
    sample_frames(frames, phase, |t| t)
}

/// [`keyframe_track`] with smoothstep easing inside each segment; reads as
/// ease-in-out per keyframe pair.
pub fn keyframe_track_eased(frames: &[f32], phase: f32) -> f32 {
    sample_frames(frames, phase, |t| t * t * (3.0 - 2.0 * t))
}

fn sample_frames(frames: &[f32], phase: f32, ease: impl Fn(f32) -> f32) -> f32 {
    match frames {
        [] => 0.0,
        [only] => *only,
        _ => {
            let phase = if phase.is_finite() { phase.clamp(0.0, 1.0) } else { 0.0 };
            let span = (frames.len() - 1) as f32;
            let pos = phase * span;
            let index = (pos.floor() as usize).min(frames.len() - 2);
            let frac = ease(pos - index as f32);
            frames[index] + (frames[index + 1] - frames[index]) * frac
        }
    }
}
