//! Roulette page (also embedded in the home page as a section)

use super::frame;
use crate::router::Route;
use crate::state::AppState;
use crate::views::{layout, wheel};
use std::sync::Arc;
use tracing::debug;
use voltup_engine::roulette::{result_modal_text, RouletteFlow, RouletteView, SpinOutcome, WheelAnimator};
use voltup_engine::Scope;

/// Section text for a roulette view; `wheel_line` is the last frame drawn
pub fn section(view: &RouletteView, wheel_line: Option<&str>) -> String {
    let mut out = vec![
        "Roulette".to_string(),
        "One spin per day. Spin the wheel for bonus points.".to_string(),
    ];

    if view.status_loading {
        out.push("Checking today's status...".to_string());
    }
    if let Some(line) = wheel_line {
        out.push(line.to_string());
    }

    if view.participated_today && view.result.is_none() {
        out.push("Please come back tomorrow.".to_string());
        out.push("You've already played today.".to_string());
    } else if !view.participated_today {
        if view.spinning {
            out.push("Spinning...".to_string());
        } else {
            out.push("Spin now: voltup roulette --spin".to_string());
        }
    }

    if let Some(error) = &view.error {
        out.push(format!("! {}", error));
    }

    if let Some(result) = &view.result {
        let (title, body) = result_modal_text(result);
        out.push(layout::modal(title, &[body]));
    }

    out.join("\n")
}

/// Show the roulette; with `spin`, play once and stream wheel frames to
/// `on_frame` until the wheel stops.
pub async fn render(state: &AppState, scope: &Scope, spin: bool, on_frame: &mut dyn FnMut(&str)) -> String {
    let animator = Arc::new(WheelAnimator::spawn());
    let flow = RouletteFlow::new(state.api.clone(), state.queries.clone(), animator.clone());

    if scope.run(flow.load_status()).await.is_none() {
        return frame(state, Route::Roulette, &section(&flow.view(), None));
    }

    let mut last_line = None;
    if spin && flow.view().can_spin() {
        let mut frames = animator.frames();
        let spin = scope.run(flow.spin());
        tokio::pin!(spin);

        let outcome = loop {
            tokio::select! {
                outcome = &mut spin => break outcome,
                Ok(()) = frames.changed() => {
                    let line = wheel::render(&frames.borrow_and_update());
                    on_frame(&line);
                }
            }
        };

        if let Some(SpinOutcome::Granted(_)) = outcome {
            let landing = async {
                while frames.changed().await.is_ok() {
                    let current = *frames.borrow_and_update();
                    let line = wheel::render(&current);
                    on_frame(&line);
                    if current.stopped_on().is_some() {
                        return Some(line);
                    }
                }
                None
            };
            last_line = scope.run(landing).await.flatten();
        }
        debug!("Spin finished: {:?}", outcome);
    } else if spin {
        debug!("Spin request ignored");
    }

    frame(state, Route::Roulette, &section(&flow.view(), last_line.as_deref()))
}
