//! The particle field animator.
//!
//! [`AnimatorState`] owns everything the animation needs between frames: the
//! particle buffers, the camera, and the fixed configuration. Drawing goes
//! through the [`Renderer`] capability, so the animator runs the same against
//! the wgpu backend and against a recording stub in tests.
//!
//! ```ignore
//! let mut state = initialize(Some(&window), &mut renderer, FieldConfig::default(), &mut rng)
//!     .expect("window is present");
//! state.tick(clock.seconds_at(Instant::now()), &mut renderer)?;
//! ```

use glam::{Mat4, Vec3};
use rand::Rng;

use crate::breathing::{Breathing, GroupRotation, Wobble};
use crate::camera::PerspectiveCamera;
use crate::config::FieldConfig;
use crate::error::RenderError;
use crate::particles::ParticleField;
use crate::spawn::SpawnVolume;

/// Pixel dimensions of a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Something the cloud can be drawn into.
pub trait Surface {
    /// Current pixel dimensions.
    fn size(&self) -> SurfaceSize;
}

impl Surface for winit::window::Window {
    fn size(&self) -> SurfaceSize {
        let size = self.inner_size();
        SurfaceSize::new(size.width, size.height)
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Current particle positions, in model space.
    pub positions: &'a [Vec3],
    /// Whether `positions` changed since the previous frame.
    pub positions_dirty: bool,
    /// Group rotation applied to every particle.
    pub rotation: GroupRotation,
    pub camera: &'a PerspectiveCamera,
    pub config: &'a FieldConfig,
}

impl Frame<'_> {
    /// Model matrix of the particle group.
    pub fn model_matrix(&self) -> Mat4 {
        self.rotation.matrix()
    }
}

/// Drawing capability used by the animator.
pub trait Renderer {
    /// Set the output size in pixels.
    fn set_size(&mut self, width: u32, height: u32);

    /// Draw one frame.
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), RenderError>;
}

/// Running state of the animator.
#[derive(Debug, Clone)]
pub struct AnimatorState {
    config: FieldConfig,
    field: ParticleField,
    camera: PerspectiveCamera,
    breathing: Breathing,
    wobble: Wobble,
    rotation: GroupRotation,
}

/// Set up the animator for `container`.
///
/// Returns `None` when there is no container; nothing else can fail here.
/// Base positions are drawn from `rng`, and the renderer and camera are sized
/// to the container before returning.
pub fn initialize<S, R, G>(
    container: Option<&S>,
    renderer: &mut R,
    config: FieldConfig,
    rng: &mut G,
) -> Option<AnimatorState>
where
    S: Surface + ?Sized,
    R: Renderer + ?Sized,
    G: Rng + ?Sized,
{
    let Some(container) = container else {
        tracing::debug!(target: "mote::animator", "no render container, skipping setup");
        return None;
    };

    let bases = SpawnVolume::new(config.area).sample_many(rng, config.particle_count);
    let mut state = AnimatorState {
        field: ParticleField::from_base(bases),
        camera: PerspectiveCamera::new(),
        breathing: Breathing::from_config(&config),
        wobble: Wobble::from_config(&config),
        rotation: GroupRotation::default(),
        config,
    };
    state.resize(container, renderer);

    tracing::info!(
        target: "mote::animator",
        particles = state.field.len(),
        "animator initialized"
    );
    Some(state)
}

impl AnimatorState {
    /// Match the renderer output and camera aspect to the container.
    ///
    /// A container with a zero dimension is ignored.
    pub fn resize<S, R>(&mut self, container: &S, renderer: &mut R)
    where
        S: Surface + ?Sized,
        R: Renderer + ?Sized,
    {
        let size = container.size();
        if size.is_empty() {
            tracing::debug!(target: "mote::animator", ?size, "ignoring empty container size");
            return;
        }
        renderer.set_size(size.width, size.height);
        self.camera.set_aspect(size.width, size.height);
    }

    /// Advance to `elapsed_secs` and draw once.
    pub fn tick<R>(&mut self, elapsed_secs: f64, renderer: &mut R) -> Result<(), RenderError>
    where
        R: Renderer + ?Sized,
    {
        self.rotation = self.wobble.at(elapsed_secs);
        self.field.breathe(&self.breathing, elapsed_secs);

        let frame = Frame {
            positions: self.field.positions(),
            positions_dirty: self.field.is_dirty(),
            rotation: self.rotation,
            camera: &self.camera,
            config: &self.config,
        };
        renderer.render(&frame)?;
        self.field.mark_clean();
        Ok(())
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Rotation applied by the last tick.
    pub fn rotation(&self) -> GroupRotation {
        self.rotation
    }
}
