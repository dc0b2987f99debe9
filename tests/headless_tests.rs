//! Integration tests driving both effects through the public API, without a
//! window or GPU.

use std::time::{Duration, Instant};

use mote::prelude::*;
use mote::{GroupRotation, OverlayState};
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ============================================================================
// Test doubles
// ============================================================================

struct Container {
    width: u32,
    height: u32,
}

impl Surface for Container {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }
}

#[derive(Default)]
struct Recorder {
    size: Option<(u32, u32)>,
    frames: usize,
    positions: Vec<Vec3>,
    rotation: Option<GroupRotation>,
}

impl Renderer for Recorder {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }

    fn render(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
        self.frames += 1;
        if frame.positions_dirty {
            self.positions = frame.positions.to_vec();
        }
        self.rotation = Some(frame.rotation);
        Ok(())
    }
}

fn container(width: u32, height: u32) -> Container {
    Container { width, height }
}

// ============================================================================
// Particle field
// ============================================================================

#[test]
fn test_end_to_end_first_frame() {
    let mut renderer = Recorder::default();
    let mut rng = SmallRng::seed_from_u64(400);
    let surface = container(400, 300);

    let mut state = initialize(
        Some(&surface),
        &mut renderer,
        FieldConfig::new().with_particle_count(2500),
        &mut rng,
    )
    .expect("container present");

    state.resize(&surface, &mut renderer);
    assert_eq!(renderer.size, Some((400, 300)));
    assert_eq!(state.camera().aspect, 400.0 / 300.0);
    assert!((state.camera().aspect - 1.333_333).abs() < 1e-5);

    state.tick(0.0, &mut renderer).unwrap();
    assert_eq!(renderer.frames, 1);
    assert_eq!(renderer.positions.len(), 2500);

    for (i, (current, base)) in renderer
        .positions
        .iter()
        .zip(state.field().base_positions())
        .enumerate()
    {
        let off = (i as f64 * 0.12).sin() as f32 * 0.015;
        assert_eq!(current.x, base.x * (1.0 + off), "x of particle {i}");
        assert_eq!(current.y, base.y * (1.0 + off * 0.6), "y of particle {i}");
        assert_eq!(current.z, base.z * (1.0 + off), "z of particle {i}");
    }
}

#[test]
fn test_missing_container_stays_uninitialized() {
    let mut renderer = Recorder::default();
    let state = initialize::<Container, _, _>(
        None,
        &mut renderer,
        FieldConfig::default(),
        &mut SmallRng::seed_from_u64(0),
    );
    assert!(state.is_none());
    assert_eq!(renderer.frames, 0);
}

#[test]
fn test_frames_are_replayable() {
    let config = FieldConfig::new().with_particle_count(300);
    let mut renderer = Recorder::default();
    let surface = container(64, 64);

    let mut a = initialize(Some(&surface), &mut renderer, config.clone(), &mut SmallRng::seed_from_u64(5))
        .unwrap();
    let mut b = initialize(Some(&surface), &mut renderer, config, &mut SmallRng::seed_from_u64(5))
        .unwrap();

    for t in [0.1, 2.0, 17.5, 3.0] {
        a.tick(t, &mut renderer).unwrap();
    }
    b.tick(3.0, &mut renderer).unwrap();

    assert_eq!(a.field().positions(), b.field().positions());
    assert_eq!(a.rotation(), b.rotation());
}

// ============================================================================
// Frame loop
// ============================================================================

#[test]
fn test_frame_loop_runs_until_stopped() {
    let mut renderer = Recorder::default();
    let surface = container(320, 240);
    let mut state = initialize(
        Some(&surface),
        &mut renderer,
        FieldConfig::new().with_particle_count(50),
        &mut SmallRng::seed_from_u64(1),
    )
    .unwrap();

    let start = Instant::now();
    let mut frames = FrameLoop::start(start);
    let stop = frames.stop_token();

    let mut now = start;
    let mut ticks = 0;
    loop {
        now += Duration::from_millis(16);
        if ticks == 10 {
            stop.stop();
        }
        match frames.run_frame(now, &mut state, &mut renderer).unwrap() {
            NextFrame::Requested => ticks += 1,
            NextFrame::Stopped => break,
        }
    }

    assert_eq!(ticks, 10);
    assert_eq!(renderer.frames, 10);
}

// ============================================================================
// Intro overlay
// ============================================================================

#[test]
fn test_intro_hides_at_2500ms_exactly_once() {
    let config = IntroConfig::default();
    let load = Instant::now();
    let mut timer = IntroTimer::new(config.delay);
    let mut overlay = IntroOverlay::new(&config);
    timer.arm(load);

    assert!(!timer.poll(load + Duration::from_millis(2499), &mut overlay));
    assert_eq!(overlay.state(), OverlayState::Visible);

    assert!(timer.poll(load + Duration::from_millis(2500), &mut overlay));
    let hidden = overlay.state();
    assert!(matches!(hidden, OverlayState::Hidden { .. }));

    assert!(!timer.poll(load + Duration::from_millis(5000), &mut overlay));
    assert_eq!(overlay.state(), hidden);
}
