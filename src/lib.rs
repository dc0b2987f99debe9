//! # mote
//!
//! A breathing particle cloud behind a timed intro overlay.
//!
//! Two small effects run side by side:
//!
//! - **Intro dismissal**: an overlay covers the window at start-up and is
//!   hidden 2.5 s later, fading out.
//! - **Particle field**: a few thousand points in a flattened volume. The whole
//!   cloud wobbles gently and every point "breathes" along its own sine phase.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mote::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     Showcase::new()
//!         .with_field(FieldConfig::new().with_particle_count(2_500))
//!         .run()
//! }
//! ```
//!
//! ## Animation Model
//!
//! Each frame is a pure function of elapsed time `t`, in `f64` seconds:
//!
//! | Quantity | Value |
//! |----------|-------|
//! | yaw | `sin(t * rotation_speed) * 0.15` |
//! | pitch | `cos(t * rotation_speed * 0.7) * 0.07` |
//! | offset of particle `i` | `sin(t * breath_speed + i * phase_step) * amplitude` |
//! | x, z | `base * (1 + offset)` |
//! | y | `base * (1 + offset * vertical_damping)` |
//!
//! ## Headless Use
//!
//! The animator draws through the [`Renderer`] trait and reads its size from a
//! [`Surface`], so it can be driven without a window or GPU:
//!
//! ```ignore
//! let mut state = initialize(Some(&surface), &mut renderer, FieldConfig::default(), &mut rng)
//!     .expect("surface present");
//! state.tick(0.5, &mut renderer)?;
//! ```

mod animator;
pub mod breathing;
mod camera;
mod config;
mod error;
pub mod frame_loop;
mod gpu;
pub mod intro;
mod particles;
mod showcase;
pub mod spawn;
pub mod textures;
pub mod time;

pub use animator::{initialize, AnimatorState, Frame, Renderer, Surface, SurfaceSize};
pub use breathing::{Breathing, GroupRotation, Wobble};
pub use camera::PerspectiveCamera;
pub use config::{FieldConfig, IntroConfig};
pub use error::{GpuError, RenderError, RunError};
pub use frame_loop::{FrameLoop, NextFrame, StopToken};
pub use glam::{Vec2, Vec3, Vec4};
pub use gpu::GpuRenderer;
pub use intro::{IntroOverlay, IntroTimer, Overlay, OverlayState};
pub use particles::ParticleField;
pub use showcase::Showcase;
pub use textures::SpriteTexture;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use mote::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animator::{initialize, AnimatorState, Frame, Renderer, Surface, SurfaceSize};
    pub use crate::config::{FieldConfig, IntroConfig};
    pub use crate::error::{RenderError, RunError};
    pub use crate::frame_loop::{FrameLoop, NextFrame, StopToken};
    pub use crate::intro::{IntroOverlay, IntroTimer, Overlay};
    pub use crate::showcase::Showcase;
    pub use crate::time::AnimationClock;
    pub use crate::{Vec2, Vec3, Vec4};
    pub use std::time::Duration;
}
