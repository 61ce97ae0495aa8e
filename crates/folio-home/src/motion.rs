//! Cosmetic rise-and-fade for the shown emoji.
//!
//! Three-phase track: hidden, then (appear, rise, fade), then hidden again.
//! Purely visual — the sequencer never waits on a completion callback, and
//! sampling this track has no effect on logical state.

use folio_core::{Easing, Keyframes};
use web_time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    /// Offset from the resting position, in logical pixels (negative = up).
    pub translate_y: f32,
    pub opacity: f32,
}

impl MotionFrame {
    /// The parked state of an emoji that is not currently shown.
    pub const HIDDEN: MotionFrame = MotionFrame {
        translate_y: -80.0,
        opacity: 0.0,
    };
}

pub struct ReactionMotion {
    rise: Keyframes<f32>,
    fade: Keyframes<f32>,
    duration: Duration,
}

impl ReactionMotion {
    pub fn new() -> Self {
        Self {
            rise: Keyframes::new(vec![0.0, -40.0, -60.0], Easing::EaseOut),
            fade: Keyframes::new(vec![0.0, 1.0, 0.0], Easing::EaseOut),
            duration: Duration::from_millis(300),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Samples the track `elapsed` into the transition. Past the end the
    /// frame holds the final (fully faded) pose.
    pub fn sample(&self, elapsed: Duration) -> MotionFrame {
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        MotionFrame {
            translate_y: self.rise.sample(t),
            opacity: self.fade.sample(t),
        }
    }
}

impl Default for ReactionMotion {
    fn default() -> Self {
        Self::new()
    }
}
