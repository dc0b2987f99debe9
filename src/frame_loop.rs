//! Self-rescheduling per-frame loop with explicit cancellation.
//!
//! The host calls [`FrameLoop::run_frame`] whenever the display is ready for a
//! new frame. Each call ticks the animator and answers whether the host should
//! schedule another one. Tripping the [`StopToken`] ends the sequence: the next
//! call performs no tick and reports [`NextFrame::Stopped`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::animator::{AnimatorState, Renderer};
use crate::error::RenderError;
use crate::time::AnimationClock;

/// Shared cancellation flag for a [`FrameLoop`].
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop. Idempotent.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// What the host should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextFrame {
    /// Schedule another frame.
    Requested,
    /// The loop has ended; do not schedule again.
    Stopped,
}

/// Drives an [`AnimatorState`] from a monotonic clock.
#[derive(Debug)]
pub struct FrameLoop {
    clock: AnimationClock,
    stop: StopToken,
}

impl FrameLoop {
    /// Start the loop with its clock zero at `now`.
    pub fn start(now: Instant) -> Self {
        Self {
            clock: AnimationClock::starting_at(now),
            stop: StopToken::new(),
        }
    }

    /// A handle that can stop this loop.
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Run one frame at `now`.
    ///
    /// Fatal render errors trip the stop token before being returned; other
    /// errors leave the loop running.
    pub fn run_frame<R>(
        &mut self,
        now: Instant,
        state: &mut AnimatorState,
        renderer: &mut R,
    ) -> Result<NextFrame, RenderError>
    where
        R: Renderer + ?Sized,
    {
        if self.stop.is_stopped() {
            return Ok(NextFrame::Stopped);
        }

        let t = self.clock.frame(now);
        if let Err(e) = state.tick(t, renderer) {
            if e.is_fatal() {
                tracing::error!(target: "mote::frame_loop", error = %e, "stopping frame loop");
                self.stop.stop();
            }
            return Err(e);
        }

        Ok(NextFrame::Requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::tests::{FixedSurface, RecordingRenderer};
    use crate::animator::{initialize, Frame, SurfaceSize};
    use crate::config::FieldConfig;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn state(renderer: &mut RecordingRenderer) -> AnimatorState {
        let surface = FixedSurface(SurfaceSize::new(400, 300));
        let config = FieldConfig::default().with_particle_count(100);
        initialize(Some(&surface), renderer, config, &mut SmallRng::seed_from_u64(9))
            .expect("container is present")
    }

    #[test]
    fn test_loop_resubmits_until_stopped() {
        let mut renderer = RecordingRenderer::default();
        let mut state = state(&mut renderer);
        let start = Instant::now();
        let mut frames = FrameLoop::start(start);
        let stop = frames.stop_token();

        for i in 1..=5 {
            let now = start + Duration::from_millis(i * 16);
            let next = frames.run_frame(now, &mut state, &mut renderer).unwrap();
            assert_eq!(next, NextFrame::Requested);
        }
        assert_eq!(renderer.frames, 5);

        stop.stop();
        stop.stop();
        let next = frames
            .run_frame(start + Duration::from_millis(200), &mut state, &mut renderer)
            .unwrap();
        assert_eq!(next, NextFrame::Stopped);
        assert_eq!(renderer.frames, 5, "no tick after stop");
    }

    #[test]
    fn test_frame_uses_start_relative_time() {
        let mut renderer = RecordingRenderer::default();
        let mut reference = state(&mut renderer);
        let mut looped = reference.clone();

        let start = Instant::now();
        let mut frames = FrameLoop::start(start);
        frames
            .run_frame(start + Duration::from_millis(1250), &mut looped, &mut renderer)
            .unwrap();
        reference.tick(1.25, &mut renderer).unwrap();

        assert_eq!(looped.field().positions(), reference.field().positions());
        assert_eq!(frames.clock().frames(), 1);
    }

    #[test]
    fn test_long_run_moves_every_frame() {
        let mut renderer = RecordingRenderer::default();
        let mut state = state(&mut renderer);
        let start = Instant::now();
        let mut frames = FrameLoop::start(start);
        let later = start + Duration::from_secs(10 * 24 * 60 * 60);

        frames.run_frame(later, &mut state, &mut renderer).unwrap();
        let mut previous = renderer.last_positions.clone();
        for k in 1..=60 {
            let now = later + Duration::from_micros(16_667 * k);
            frames.run_frame(now, &mut state, &mut renderer).unwrap();
            assert_ne!(renderer.last_positions, previous, "frame {k} did not move");
            previous = renderer.last_positions.clone();
        }
        assert_eq!(renderer.uploads, 61);
    }

    struct FlakyRenderer {
        error: Option<RenderError>,
    }

    impl Renderer for FlakyRenderer {
        fn set_size(&mut self, _width: u32, _height: u32) {}

        fn render(&mut self, _frame: &Frame<'_>) -> Result<(), RenderError> {
            match self.error.take() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn test_fatal_error_stops_loop() {
        let mut recording = RecordingRenderer::default();
        let mut state = state(&mut recording);
        let start = Instant::now();
        let mut frames = FrameLoop::start(start);
        let mut renderer = FlakyRenderer {
            error: Some(RenderError::OutOfMemory),
        };

        assert!(frames.run_frame(start, &mut state, &mut renderer).is_err());
        assert!(frames.stop_token().is_stopped());
        assert_eq!(
            frames.run_frame(start, &mut state, &mut renderer).unwrap(),
            NextFrame::Stopped
        );
    }

    #[test]
    fn test_recoverable_error_keeps_loop_alive() {
        let mut recording = RecordingRenderer::default();
        let mut state = state(&mut recording);
        let start = Instant::now();
        let mut frames = FrameLoop::start(start);
        let mut renderer = FlakyRenderer {
            error: Some(RenderError::SurfaceLost),
        };

        assert!(frames.run_frame(start, &mut state, &mut renderer).is_err());
        assert!(!frames.stop_token().is_stopped());
        assert_eq!(
            frames.run_frame(start, &mut state, &mut renderer).unwrap(),
            NextFrame::Requested
        );
    }
}
