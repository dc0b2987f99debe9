//! Monotonic animation clock.
//!
//! The clock captures a single start instant. Every frame asks for the
//! elapsed time at a given `now`, so the animation is fully determined by
//! `now - start` and can be replayed from any instant.
//!
//! # Example
//!
//! ```ignore
//! use mote::time::AnimationClock;
//! use std::time::Instant;
//!
//! let mut clock = AnimationClock::starting_at(Instant::now());
//!
//! // In the frame callback:
//! let t = clock.frame(Instant::now());
//! println!("Elapsed: {:.2}s, FPS: {:.1}", t, clock.fps());
//! ```

use std::time::{Duration, Instant};

/// Start-relative clock with frame counting.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    /// When the animation started.
    start: Instant,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl AnimationClock {
    /// Create a clock whose zero is `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: start,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Create a clock starting now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Elapsed time at `now`. Instants before the start clamp to zero.
    #[inline]
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    /// Elapsed seconds at `now`.
    ///
    /// Kept in `f64`: an `f32` second count loses frame resolution after a
    /// few hours of running.
    #[inline]
    pub fn seconds_at(&self, now: Instant) -> f64 {
        self.elapsed_at(now).as_secs_f64()
    }

    /// Record one frame at `now` and return its elapsed seconds.
    pub fn frame(&mut self, now: Instant) -> f64 {
        self.frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.seconds_at(now)
    }

    /// Total frames recorded since start.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// The start instant.
    #[inline]
    pub fn start_instant(&self) -> Instant {
        self.start
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let clock = AnimationClock::new();
        assert_eq!(clock.frames(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_elapsed_is_start_relative() {
        let start = Instant::now();
        let clock = AnimationClock::starting_at(start);
        let now = start + Duration::from_millis(1500);

        assert_eq!(clock.elapsed_at(now), Duration::from_millis(1500));
        assert!((clock.seconds_at(now) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_elapsed_before_start_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let clock = AnimationClock::starting_at(start);
        assert_eq!(clock.elapsed_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_fps_updates_after_interval() {
        let start = Instant::now();
        let mut clock = AnimationClock::starting_at(start);

        for i in 1..=30 {
            clock.frame(start + Duration::from_millis(i * 20));
        }

        assert_eq!(clock.frames(), 30);
        // 25 frames in the first 500ms window
        assert!((clock.fps() - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_frames_stay_distinct_after_ten_days() {
        let start = Instant::now();
        let mut clock = AnimationClock::starting_at(start);
        let later = start + Duration::from_secs(10 * 24 * 60 * 60);

        let elapsed: Vec<f64> = (1..=60)
            .map(|k| clock.frame(later + Duration::from_micros(16_667 * k)))
            .collect();

        assert!(elapsed.windows(2).all(|w| w[1] > w[0]));
        let step = elapsed[1] - elapsed[0];
        assert!((step - 0.016_667).abs() < 1e-6, "step was {step}");
    }
}
