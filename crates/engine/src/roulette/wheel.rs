//! Roulette wheel geometry and animation state machine
//!
//! The wheel has eight equal segments laid out clockwise from the top.
//! Rotation is in degrees, clockwise, and only ever grows. A fixed pointer
//! sits at the top; the segment under it after landing is the prize.
//!
//! Phases: `Idle -> Spinning -> Landing -> Stopped`. Spinning turns at a
//! constant speed for as long as the participate call is pending; landing
//! eases out to the rest angle of the target segment.

use std::time::Duration;
use voltup_core::Points;

/// Point value of each segment, clockwise from the top
pub const SEGMENTS: [u64; 8] = [0, 100, 0, 50, 0, 30, 0, 10];

/// Angular width of one segment
pub const SEGMENT_DEG: f64 = 360.0 / SEGMENTS.len() as f64;

/// Continuous spin speed while waiting for the server
pub const SPIN_SPEED_DEG_PER_MS: f64 = 0.28;

/// Longest frame delta applied while spinning (a stalled frame must not jump)
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(50);

/// Time from result to full stop
pub const LANDING_DURATION: Duration = Duration::from_millis(1600);

/// Full turns added on top of the offset so the landing always looks like a spin
pub const EXTRA_REVOLUTIONS: f64 = 2.0;

/// Segment for a granted amount: exact value first, else the 100P segment
/// for any other win, else the first miss segment.
pub fn segment_index(granted: Points) -> usize {
    let value = granted.as_u64();
    if let Some(index) = SEGMENTS.iter().position(|&p| p == value) {
        return index;
    }
    if value > 0 {
        1
    } else {
        0
    }
}

/// Cubic ease-out on `t` in `[0, 1]` (inputs outside are clamped)
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Rotation (mod 360) that centres segment `index` under the pointer
pub fn rest_angle(index: usize) -> f64 {
    let centre = index as f64 * SEGMENT_DEG + SEGMENT_DEG / 2.0;
    (360.0 - centre).rem_euclid(360.0)
}

/// Segment under the pointer at `rotation`
pub fn segment_under_pointer(rotation: f64) -> usize {
    let under = (-rotation).rem_euclid(360.0);
    ((under / SEGMENT_DEG) as usize) % SEGMENTS.len()
}

/// Final rotation when landing on segment `index` from `start`.
///
/// Always moves forward: the offset to the rest angle, plus one more turn
/// when that offset is under half a turn, plus [`EXTRA_REVOLUTIONS`].
pub fn landing_target(start: f64, index: usize) -> f64 {
    let current = start.rem_euclid(360.0);
    let mut offset = (rest_angle(index) - current).rem_euclid(360.0);
    if offset < 180.0 {
        offset += 360.0;
    }
    start + offset + 360.0 * EXTRA_REVOLUTIONS
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelPhase {
    Idle,
    Spinning,
    Landing {
        from: f64,
        to: f64,
        elapsed: Duration,
        segment: usize,
    },
    Stopped {
        segment: usize,
    },
}

/// Snapshot handed to renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelFrame {
    pub rotation: f64,
    pub phase: WheelPhase,
}

impl WheelFrame {
    /// Segment the wheel came to rest on, once stopped
    pub fn stopped_on(&self) -> Option<usize> {
        match self.phase {
            WheelPhase::Stopped { segment } => Some(segment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Wheel {
    rotation: f64,
    phase: WheelPhase,
}

impl Wheel {
    pub fn new() -> Self {
        Self {
            rotation: 0.0,
            phase: WheelPhase::Idle,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> WheelPhase {
        self.phase
    }

    pub fn frame(&self) -> WheelFrame {
        WheelFrame {
            rotation: self.rotation,
            phase: self.phase,
        }
    }

    /// Whether frames still change over time
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, WheelPhase::Spinning | WheelPhase::Landing { .. })
    }

    /// Start turning at constant speed. Ignored while already animating.
    pub fn spin(&mut self) {
        if !self.is_animating() {
            self.phase = WheelPhase::Spinning;
        }
    }

    /// Begin easing towards the segment for `granted`; returns that segment.
    pub fn land(&mut self, granted: Points) -> usize {
        let segment = segment_index(granted);
        self.phase = WheelPhase::Landing {
            from: self.rotation,
            to: landing_target(self.rotation, segment),
            elapsed: Duration::ZERO,
            segment,
        };
        segment
    }

    /// Stop where it is (failed spin)
    pub fn halt(&mut self) {
        self.phase = WheelPhase::Idle;
    }

    /// Advance by `dt` and return the new frame
    pub fn tick(&mut self, dt: Duration) -> WheelFrame {
        match self.phase {
            WheelPhase::Spinning => {
                let dt = dt.min(MAX_FRAME_DELTA);
                self.rotation += SPIN_SPEED_DEG_PER_MS * dt.as_secs_f64() * 1000.0;
            }
            WheelPhase::Landing {
                from,
                to,
                elapsed,
                segment,
            } => {
                let elapsed = elapsed + dt;
                let progress = elapsed.as_secs_f64() / LANDING_DURATION.as_secs_f64();
                if progress >= 1.0 {
                    self.rotation = to;
                    self.phase = WheelPhase::Stopped { segment };
                } else {
                    self.rotation = from + (to - from) * ease_out_cubic(progress);
                    self.phase = WheelPhase::Landing {
                        from,
                        to,
                        elapsed,
                        segment,
                    };
                }
            }
            WheelPhase::Idle | WheelPhase::Stopped { .. } => {}
        }
        self.frame()
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}
