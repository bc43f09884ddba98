//! Daily roulette: wheel geometry, animation and the spin flow

mod animator;
mod flow;
pub mod wheel;

pub use animator::{WheelAnimator, WheelDriver, FRAME_INTERVAL};
pub use flow::{result_modal_text, RouletteFlow, RouletteView, SpinOutcome};
pub use wheel::{Wheel, WheelFrame, WheelPhase, SEGMENTS};
