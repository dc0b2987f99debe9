//! Timed dismissal of the intro overlay.
//!
//! The timer is armed once at load and polled from the frame callback. When
//! its deadline passes it hides the overlay, exactly once. The overlay then
//! fades out over [`IntroConfig::fade`].

use std::time::{Duration, Instant};

use glam::Vec3;

use crate::config::IntroConfig;

/// Anything that can be put into the hidden state.
pub trait Overlay {
    /// Apply the hidden state. Called at most once per timer.
    fn hide(&mut self, at: Instant);
}

/// One-shot timer that hides an [`Overlay`].
#[derive(Debug, Clone)]
pub struct IntroTimer {
    delay: Duration,
    deadline: Option<Instant>,
    fired: bool,
}

impl IntroTimer {
    /// Create an unarmed timer.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            fired: false,
        }
    }

    /// Schedule the dismissal `delay` after `now`.
    ///
    /// Only the first call has an effect.
    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.delay);
            tracing::debug!(target: "mote::intro", delay_ms = self.delay.as_millis() as u64, "intro timer armed");
        }
    }

    /// Fire if the deadline has passed. Returns `true` on the call that fires.
    pub fn poll<O: Overlay + ?Sized>(&mut self, now: Instant, overlay: &mut O) -> bool {
        match self.deadline {
            Some(deadline) if !self.fired && now >= deadline => {
                self.fired = true;
                overlay.hide(now);
                tracing::debug!(target: "mote::intro", "intro overlay hidden");
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Visibility of the intro overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Visible,
    /// Terminal state.
    Hidden { since: Instant },
}

/// Full-screen intro overlay that fades out once hidden.
#[derive(Debug, Clone)]
pub struct IntroOverlay {
    state: OverlayState,
    fade: Duration,
    color: Vec3,
}

impl IntroOverlay {
    pub fn new(config: &IntroConfig) -> Self {
        Self {
            state: OverlayState::Visible,
            fade: config.fade,
            color: config.color,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Coverage at `now`: 1.0 while visible, falling linearly to 0.0 across
    /// the fade window after hiding.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.state {
            OverlayState::Visible => 1.0,
            OverlayState::Hidden { since } => {
                if self.fade.is_zero() {
                    return 0.0;
                }
                let t = now.saturating_duration_since(since).as_secs_f32() / self.fade.as_secs_f32();
                (1.0 - t).clamp(0.0, 1.0)
            }
        }
    }
}

impl Overlay for IntroOverlay {
    fn hide(&mut self, at: Instant) {
        if self.state == OverlayState::Visible {
            self.state = OverlayState::Hidden { since: at };
        }
    }
}
