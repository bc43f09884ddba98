//! Wheel animator task
//!
//! Owns a [`Wheel`] on a tokio task and publishes a frame roughly every
//! 16ms while it is moving. Commands arrive over a channel; the latest
//! frame is always available through a watch channel. The task ends when
//! [`WheelAnimator::stop`] is called or the animator is dropped.

use super::wheel::{Wheel, WheelFrame};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use voltup_core::Points;

/// Frame cadence (about 60 fps)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What the roulette flow needs from a wheel
pub trait WheelDriver: Send + Sync {
    /// Start the continuous spin while the result is pending
    fn spin(&self);
    /// Ease out onto the segment for `granted`
    fn land(&self, granted: Points);
    /// Stop without a result
    fn halt(&self);
}

#[derive(Debug)]
enum Command {
    Spin,
    Land(Points),
    Halt,
}

pub struct WheelAnimator {
    commands: mpsc::UnboundedSender<Command>,
    frames: watch::Receiver<WheelFrame>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl WheelAnimator {
    /// Spawn the animation task; the wheel starts idle
    pub fn spawn() -> Self {
        let wheel = Wheel::new();
        let (frame_tx, frames) = watch::channel(wheel.frame());
        let (commands, command_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let task = tokio::spawn(run(wheel, command_rx, frame_tx, cancel.clone()));
        info!("Wheel animator started");

        Self {
            commands,
            frames,
            cancel,
            task: Some(task),
        }
    }

    /// Subscribe to frames
    pub fn frames(&self) -> watch::Receiver<WheelFrame> {
        self.frames.clone()
    }

    pub fn current(&self) -> WheelFrame {
        *self.frames.borrow()
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Wait until the wheel has come to rest on a segment
    pub async fn settled(&self) -> Option<WheelFrame> {
        let mut frames = self.frames();
        let settled = frames
            .wait_for(|frame| frame.stopped_on().is_some())
            .await
            .ok()
            .map(|frame| *frame);
        settled
    }

    /// Stop the task and wait for it to finish
    pub async fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        info!("Wheel animator stopped");
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            debug!("Wheel animator already stopped, command dropped");
        }
    }
}

impl WheelDriver for WheelAnimator {
    fn spin(&self) {
        self.send(Command::Spin);
    }

    fn land(&self, granted: Points) {
        self.send(Command::Land(granted));
    }

    fn halt(&self) {
        self.send(Command::Halt);
    }
}

impl Drop for WheelAnimator {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(
    mut wheel: Wheel,
    mut commands: mpsc::UnboundedReceiver<Command>,
    frames: watch::Sender<WheelFrame>,
    cancel: CancellationToken,
) {
    let mut interval = tokio::time::interval(FRAME_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,

            command = commands.recv() => {
                let Some(command) = command else { break };
                match command {
                    Command::Spin => wheel.spin(),
                    Command::Land(granted) => {
                        let segment = wheel.land(granted);
                        debug!("Landing on segment {} for {}", segment, granted);
                    }
                    Command::Halt => wheel.halt(),
                }
                // time spent idle must not count towards the next frame
                last = Instant::now();
                frames.send_replace(wheel.frame());
            }

            _ = interval.tick() => {
                let now = Instant::now();
                let dt = now - last;
                last = now;
                if wheel.is_animating() {
                    frames.send_replace(wheel.tick(dt));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roulette::wheel::{segment_under_pointer, WheelPhase, LANDING_DURATION};

    #[tokio::test(start_paused = true)]
    async fn test_spin_then_land_on_prize() {
        let animator = WheelAnimator::spawn();
        animator.spin();

        tokio::time::sleep(Duration::from_millis(500)).await;
        let spinning = animator.current();
        assert_eq!(spinning.phase, WheelPhase::Spinning);
        assert!(spinning.rotation > 0.0);

        animator.land(Points(30));
        let settled = tokio::time::timeout(LANDING_DURATION * 2, animator.settled())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(settled.stopped_on(), Some(5));
        assert_eq!(segment_under_pointer(settled.rotation), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_halt_freezes_rotation() {
        let animator = WheelAnimator::spawn();
        animator.spin();
        tokio::time::sleep(Duration::from_millis(200)).await;
        animator.halt();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let frozen = animator.current();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(animator.current(), frozen);
        assert_eq!(frozen.phase, WheelPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_task() {
        let mut animator = WheelAnimator::spawn();
        animator.spin();
        animator.stop().await;
        assert!(!animator.is_running());

        // commands after stop are dropped quietly
        animator.land(Points(10));
    }
}
