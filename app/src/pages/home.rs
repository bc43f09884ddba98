//! Home: balance, shortcuts and the roulette section

use super::{frame, roulette};
use crate::router::Route;
use crate::state::AppState;
use crate::views::{skeleton, Loadable};
use std::sync::Arc;
use voltup_core::{load_error_message, PointsSummary};
use voltup_engine::roulette::{RouletteFlow, WheelAnimator};
use voltup_engine::Scope;

/// Balance block shared with the My page
pub fn points_section(points: &Loadable<PointsSummary>) -> String {
    match points {
        Loadable::Loading => skeleton::points(),
        Loadable::Ready(summary) => format!(
            "Available  {}\nExpiring within 7 days  {}",
            summary.available_balance, summary.expiring_within_7_days
        ),
        Loadable::Failed(message) => format!("! {}", message),
    }
}

pub async fn render(state: &AppState, scope: &Scope) -> String {
    let greeting = match state.auth.session() {
        Some(session) => format!("Hi, {}!", session.display_name()),
        None => "Welcome to VoltUp.".to_string(),
    };

    let points = Loadable::from_scoped(
        scope.run(state.queries.points_me(state.api.as_ref())).await,
        load_error_message,
    );

    let animator = Arc::new(WheelAnimator::spawn());
    let flow = RouletteFlow::new(state.api.clone(), state.queries.clone(), animator);
    scope.run(flow.load_status()).await;

    let body = [
        greeting,
        String::new(),
        points_section(&points),
        String::new(),
        "Shortcuts".to_string(),
        format!("  Products       {}", Route::Products.path()),
        format!("  Order history  {}", Route::Orders.path()),
        format!("  Point history  {} (voltup my --detail)", Route::MyInfo.path()),
        String::new(),
        roulette::section(&flow.view(), None),
    ]
    .join("\n");

    frame(state, Route::Home, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltup_core::Points;

    #[test]
    fn test_points_section_states() {
        assert!(points_section(&Loadable::Loading).contains('░'));
        let ready = Loadable::Ready(PointsSummary {
            available_balance: Points(12500),
            expiring_within_7_days: Points(300),
        });
        let text = points_section(&ready);
        assert!(text.contains("12,500P"));
        assert!(text.contains("300P"));
        assert_eq!(points_section(&Loadable::Failed("offline".into())), "! offline");
    }
}
