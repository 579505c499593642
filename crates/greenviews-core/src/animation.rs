//! Time-driven value animation.
//!
//! [`Animator`] is a host-agnostic ticker: the host's frame clock calls
//! [`Animator::advance`] with the time since the last frame and forwards each
//! returned [`AnimationFrame`] to an [`AnimationListener`]. Play time is
//! clamped to the duration, so the last frame always lands exactly on the end
//! value.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lifecycle of an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimatorState {
    /// Not started yet
    #[default]
    Idle,
    /// Producing frames
    Running,
    /// Terminal frame delivered
    Finished,
}

/// One tick of a running animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Milliseconds since start, clamped to the duration
    pub play_time_ms: u64,
    /// Linear progress in `[0, 1]`
    pub fraction: f64,
    /// Interpolated integer value
    pub value: i32,
    /// Whether this is the last frame
    pub terminal: bool,
}

/// Per-tick callback for a running animation.
pub trait AnimationListener {
    /// Called once per frame, including the initial frame at play time 0 and
    /// the terminal frame.
    fn on_animation_update(&mut self, frame: &AnimationFrame);
}

/// Integer value animator.
///
/// ```
/// use greenviews_core::animation::Animator;
/// use std::time::Duration;
///
/// let mut anim = Animator::of_int(0, 1).with_duration(Duration::from_millis(400));
/// let first = anim.start();
/// assert_eq!(first.play_time_ms, 0);
/// assert_eq!(first.value, 0);
///
/// let last = anim.advance(Duration::from_millis(500)).expect("running");
/// assert_eq!(last.play_time_ms, 400);
/// assert_eq!(last.value, 1);
/// assert!(anim.is_finished());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animator {
    from: i32,
    to: i32,
    duration_ms: u64,
    play_time_ms: u64,
    state: AnimatorState,
}

impl Animator {
    /// Default duration when none is set.
    pub const DEFAULT_DURATION_MS: u64 = 300;

    /// Animate an integer from `from` to `to`.
    #[must_use]
    pub const fn of_int(from: i32, to: i32) -> Self {
        Self {
            from,
            to,
            duration_ms: Self::DEFAULT_DURATION_MS,
            play_time_ms: 0,
            state: AnimatorState::Idle,
        }
    }

    /// Set the duration (millisecond resolution).
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Current play time in milliseconds.
    #[must_use]
    pub const fn play_time_ms(&self) -> u64 {
        self.play_time_ms
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> AnimatorState {
        self.state
    }

    /// Whether frames are still being produced.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Whether the terminal frame has been delivered.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == AnimatorState::Finished
    }

    /// Start (or restart) from play time 0 and return the initial frame.
    ///
    /// A zero-length animation finishes immediately; its initial frame is the
    /// terminal one.
    pub fn start(&mut self) -> AnimationFrame {
        self.play_time_ms = 0;
        self.state = AnimatorState::Running;
        self.frame()
    }

    /// Advance play time by `dt` and return the resulting frame.
    ///
    /// Returns `None` when the animator is not running.
    pub fn advance(&mut self, dt: Duration) -> Option<AnimationFrame> {
        if !self.is_running() {
            return None;
        }
        let dt_ms = u64::try_from(dt.as_millis()).unwrap_or(u64::MAX);
        self.play_time_ms = self
            .play_time_ms
            .saturating_add(dt_ms)
            .min(self.duration_ms);
        Some(self.frame())
    }

    fn frame(&mut self) -> AnimationFrame {
        let terminal = self.play_time_ms >= self.duration_ms;
        let fraction = if terminal {
            1.0
        } else {
            self.play_time_ms as f64 / self.duration_ms as f64
        };
        let span = f64::from(self.to) - f64::from(self.from);
        let value = if terminal {
            self.to
        } else {
            (f64::from(self.from) + fraction * span).trunc() as i32
        };
        if terminal {
            self.state = AnimatorState::Finished;
            tracing::trace!(duration_ms = self.duration_ms, "animation finished");
        }
        AnimationFrame {
            play_time_ms: self.play_time_ms,
            fraction,
            value,
            terminal,
        }
    }
}
