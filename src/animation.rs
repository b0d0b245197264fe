// Sinusoidal "breathing" of the ellipse.
// Visual: rx and ry orbit a quarter period out of phase, so the outline morphs
// between wide, round and tall while animation is on.

use std::f32::consts::TAU;

use crate::types::ShapeParameters;

pub const DEFAULT_SPEED: f32 = 0.0005;
pub const DEFAULT_AMPLITUDE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub enabled: bool,
    pub elapsed: f32,   // phase in [0, TAU) radians; frozen while disabled, never reset
    pub speed: f32,
    pub amplitude: f32, // radius swing in pixels
    pub base_rx: f32,   // captured when the animation is configured
    pub base_ry: f32,
}

impl AnimationState {
    pub fn new(base_rx: f32, base_ry: f32, speed: f32, amplitude: f32) -> Self {
        Self { enabled: false, elapsed: 0.0, speed, amplitude, base_rx, base_ry }
    }

    /// Flip on/off. Phase is kept, so switching back on resumes where it stopped.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Grow the phase by `speed * timestamp`, where `timestamp` is seconds since
    /// start-up (not a frame delta). The increment grows with wall-clock time,
    /// so the morphing speeds up the longer the app runs.
    ///
    /// The phase is kept modulo one period; an unbounded f32 sum would lose
    /// the low bits sin/cos depend on after a long session.
    pub fn advance(&mut self, timestamp: f32) {
        if self.enabled {
            self.elapsed = (self.elapsed + self.speed * timestamp).rem_euclid(TAU);
        }
    }

    /// Write the radii for the current phase.
    pub fn apply(&self, shape: &mut ShapeParameters) {
        let (s, c) = self.elapsed.sin_cos();
        shape.set_radii(self.base_rx + self.amplitude * s, self.base_ry + self.amplitude * c);
    }

    /// One frame: advance then override radii. No-op while disabled.
    pub fn tick(&mut self, timestamp: f32, shape: &mut ShapeParameters) {
        if !self.enabled {
            return;
        }
        self.advance(timestamp);
        self.apply(shape);
    }
}
