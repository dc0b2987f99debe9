//! Showcase builder and runner.
//!
//! Opens a window, hosts the animator in it, and drives both effects from the
//! winit event loop: the intro timer is armed when the window appears, and
//! every redraw polls it and runs one animator frame.

use std::sync::Arc;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::animator::{initialize, AnimatorState};
use crate::config::{FieldConfig, IntroConfig};
use crate::error::{RenderError, RunError};
use crate::frame_loop::{FrameLoop, NextFrame};
use crate::gpu::GpuRenderer;
use crate::intro::{IntroOverlay, IntroTimer};
use crate::textures::SpriteTexture;

/// A particle showcase builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// use mote::prelude::*;
///
/// Showcase::new()
///     .with_field(FieldConfig::new().with_particle_count(4_000))
///     .with_intro(IntroConfig::new().with_delay(Duration::from_secs(1)))
///     .with_seed(7)
///     .run()?;
/// ```
pub struct Showcase {
    field: FieldConfig,
    intro: IntroConfig,
    seed: Option<u64>,
    title: String,
}

impl Showcase {
    /// Create a showcase with default settings.
    pub fn new() -> Self {
        Self {
            field: FieldConfig::default(),
            intro: IntroConfig::default(),
            seed: None,
            title: "mote".to_string(),
        }
    }

    /// Set the particle field configuration.
    pub fn with_field(mut self, field: FieldConfig) -> Self {
        self.field = field;
        self
    }

    /// Set the intro overlay configuration.
    pub fn with_intro(mut self, intro: IntroConfig) -> Self {
        self.intro = intro;
        self
    }

    /// Seed the base-position generator for a reproducible cloud.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the showcase. Blocks until the window is closed.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything that exists once the window is up.
struct Running {
    window: Arc<Window>,
    renderer: GpuRenderer,
    animator: AnimatorState,
    frames: FrameLoop,
    intro: IntroTimer,
    overlay: IntroOverlay,
    last_title_frame: u64,
}

struct App {
    settings: Showcase,
    running: Option<Running>,
    error: Option<RunError>,
}

impl App {
    fn new(settings: Showcase) -> Self {
        Self {
            settings,
            running: None,
            error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Option<Running>, RunError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.settings.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let field = self.settings.field.clone();
        let sprite = SpriteTexture::default();
        let mut renderer = pollster::block_on(GpuRenderer::new(
            window.clone(),
            field.particle_count,
            &sprite,
        ))?;

        let mut rng = match self.settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let Some(animator) = initialize(Some(window.as_ref()), &mut renderer, field, &mut rng)
        else {
            return Ok(None);
        };

        let now = Instant::now();
        let mut intro = IntroTimer::new(self.settings.intro.delay);
        let overlay = IntroOverlay::new(&self.settings.intro);
        if self.settings.intro.enabled {
            intro.arm(now);
        }

        Ok(Some(Running {
            window,
            renderer,
            animator,
            frames: FrameLoop::start(now),
            intro,
            overlay,
            last_title_frame: 0,
        }))
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RunError) {
        tracing::error!(target: "mote::showcase", %error, "showcase stopped");
        self.error = Some(error);
        event_loop.exit();
    }
}

impl Running {
    fn redraw(&mut self, intro_enabled: bool) -> Result<NextFrame, RenderError> {
        let now = Instant::now();

        let overlay_opacity = if intro_enabled {
            self.intro.poll(now, &mut self.overlay);
            self.overlay.opacity(now)
        } else {
            0.0
        };
        self.renderer.set_overlay(self.overlay.color(), overlay_opacity);

        let next = match self.frames.run_frame(now, &mut self.animator, &mut self.renderer) {
            Ok(next) => next,
            Err(RenderError::SurfaceLost) => {
                self.renderer.reconfigure();
                NextFrame::Requested
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::warn!(target: "mote::showcase", error = %e, "frame skipped");
                NextFrame::Requested
            }
        };

        self.update_title();
        Ok(next)
    }

    /// Refresh the FPS readout in the title twice a second or so.
    fn update_title(&mut self) {
        let clock = self.frames.clock();
        if clock.frames() >= self.last_title_frame + 30 {
            self.last_title_frame = clock.frames();
            let particles = self.animator.field().len();
            self.window
                .set_title(&format!("mote - {particles} particles - {:.0} fps", clock.fps()));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.running.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(Some(running)) => {
                running.window.request_redraw();
                self.running = Some(running);
            }
            Ok(None) => event_loop.exit(),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(running) = &mut self.running else {
            return;
        };

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                running.frames.stop_token().stop();
                event_loop.exit();
            }
            WindowEvent::Resized(_) => {
                running
                    .animator
                    .resize(running.window.as_ref(), &mut running.renderer);
            }
            WindowEvent::RedrawRequested => {
                match running.redraw(self.settings.intro.enabled) {
                    Ok(NextFrame::Requested) => running.window.request_redraw(),
                    Ok(NextFrame::Stopped) => {}
                    Err(e) => self.fail(event_loop, e.into()),
                }
            }
            _ => {}
        }
    }
}
