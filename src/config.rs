//! Fixed configuration for the particle field and the intro overlay.
//!
//! Every value here is chosen once, when the showcase is built. A running
//! [`AnimatorState`](crate::AnimatorState) only ever reads its configuration.
//!
//! ```ignore
//! use mote::prelude::*;
//!
//! let field = FieldConfig::new()
//!     .with_particle_count(4_000)
//!     .with_color(Vec3::new(0.1, 0.1, 0.3));
//! ```

use std::time::Duration;

use glam::Vec3;

/// Parameters of the particle cloud.
///
/// The defaults give a quiet look: 2500 small black points in a
/// flattened box, a slow wobble, and a barely visible breathing motion.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Number of particles. Fixed for the lifetime of the field.
    pub particle_count: usize,
    /// Edge length of the spawn volume along x (y and z are flattened from it).
    pub area: f32,
    /// World-space diameter of one point sprite.
    pub particle_size: f32,
    /// Angular rate of the group wobble, in radians per second.
    pub rotation_speed: f64,
    /// Angular rate of the breathing sine, in radians per second.
    pub breath_speed: f64,
    /// Phase shift between consecutive particle indices, in radians.
    pub phase_step: f64,
    /// Peak relative displacement of a particle from its base position.
    pub amplitude: f32,
    /// Scale applied to the offset on the vertical axis. Must stay below 1.
    pub vertical_damping: f32,
    /// Peak yaw of the group wobble, in radians.
    pub wobble_yaw: f32,
    /// Peak pitch of the group wobble, in radians.
    pub wobble_pitch: f32,
    /// Pitch oscillates at `rotation_speed * pitch_rate`.
    pub pitch_rate: f64,
    /// Particle color (RGB, 0.0-1.0).
    pub color: Vec3,
    /// Particle opacity (0.0-1.0).
    pub opacity: f32,
    /// Fragments with alpha below this value are discarded.
    pub alpha_test: f32,
    /// Clear color behind the cloud (RGB, 0.0-1.0).
    pub background: Vec3,
}

impl FieldConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self {
            particle_count: 2500,
            area: 3.0,
            particle_size: 0.018,
            rotation_speed: 0.3,
            breath_speed: 1.0,
            phase_step: 0.12,
            amplitude: 0.015,
            vertical_damping: 0.6,
            wobble_yaw: 0.15,
            wobble_pitch: 0.07,
            pitch_rate: 0.7,
            color: Vec3::ZERO,
            opacity: 1.0,
            alpha_test: 0.01,
            background: Vec3::splat(0.96),
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the spread of the spawn volume.
    pub fn with_area(mut self, area: f32) -> Self {
        self.area = area;
        self
    }

    /// Set the world-space size of each point.
    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.particle_size = size;
        self
    }

    /// Set the wobble rate. Lower is slower.
    pub fn with_rotation_speed(mut self, speed: f64) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Set the breathing rate.
    pub fn with_breath_speed(mut self, speed: f64) -> Self {
        self.breath_speed = speed;
        self
    }

    /// Set the peak breathing displacement.
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the particle color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Set the particle opacity, clamped to 0.0-1.0.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the clear color behind the cloud.
    pub fn with_background(mut self, background: Vec3) -> Self {
        self.background = background;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the intro overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroConfig {
    /// Whether an overlay exists at all. A disabled intro is never armed.
    pub enabled: bool,
    /// Time from load until the overlay is hidden.
    pub delay: Duration,
    /// Length of the fade-out once hidden.
    pub fade: Duration,
    /// Overlay color (RGB, 0.0-1.0).
    pub color: Vec3,
}

impl IntroConfig {
    /// Create an intro configuration with the default timings.
    pub fn new() -> Self {
        Self {
            enabled: true,
            delay: Duration::from_millis(2500),
            fade: Duration::from_millis(600),
            color: Vec3::splat(0.04),
        }
    }

    /// Configuration for a page without an intro overlay.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Set the delay before the overlay hides.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the fade-out duration.
    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// Set the overlay color.
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self::new()
    }
}
