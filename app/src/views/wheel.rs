//! Roulette wheel as a single line of text
//!
//! Segments are listed clockwise starting with the one under the pointer,
//! which is bracketed.

use voltup_engine::roulette::wheel::segment_under_pointer;
use voltup_engine::roulette::{WheelFrame, WheelPhase, SEGMENTS};

pub fn segment_label(points: u64) -> String {
    if points == 0 {
        "Miss".to_string()
    } else {
        format!("{}P", points)
    }
}

pub fn render(frame: &WheelFrame) -> String {
    let under = segment_under_pointer(frame.rotation);
    let labels: Vec<String> = (0..SEGMENTS.len())
        .map(|offset| {
            let index = (under + offset) % SEGMENTS.len();
            let label = segment_label(SEGMENTS[index]);
            if offset == 0 {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();

    let state = match frame.phase {
        WheelPhase::Idle => "ready",
        WheelPhase::Spinning => "spinning",
        WheelPhase::Landing { .. } => "slowing down",
        WheelPhase::Stopped { .. } => "stopped",
    };

    format!("▼ {}  ({:.0}°, {})", labels.join(" "), frame.rotation.rem_euclid(360.0), state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltup_engine::roulette::wheel::rest_angle;

    #[test]
    fn test_pointer_segment_is_first_and_bracketed() {
        let frame = WheelFrame {
            rotation: rest_angle(3) + 720.0,
            phase: WheelPhase::Stopped { segment: 3 },
        };
        let line = render(&frame);
        assert!(line.starts_with("▼ [50P] Miss 30P Miss 10P Miss 100P Miss"));
        assert!(line.ends_with("stopped)"));
    }
}
