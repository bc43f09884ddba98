//! My page: identity, balance, point history and logout

use super::{frame, home};
use crate::router::Route;
use crate::state::AppState;
use crate::views::{layout, skeleton, Loadable};
use voltup_core::{format_date, format_signed_points, load_error_message, PointsDetail};
use voltup_engine::Scope;

pub fn detail_section(detail: &Loadable<PointsDetail>) -> String {
    let lines = match detail {
        Loadable::Loading => vec![skeleton::list(3)],
        Loadable::Failed(message) => vec![format!("! {}", message)],
        Loadable::Ready(detail) => {
            let mut lines = vec![format!("Total balance  {}", detail.total_balance)];
            if detail.histories.is_empty() {
                lines.push("No point history yet.".to_string());
            }
            for entry in &detail.histories {
                let expiry = entry
                    .expiry_date
                    .as_deref()
                    .map(|d| format!("  expires {}", format_date(d)))
                    .unwrap_or_default();
                lines.push(format!(
                    "{:<24} {:>10}{}",
                    entry.description,
                    format_signed_points(entry.amount),
                    expiry
                ));
            }
            lines
        }
    };
    layout::modal("Point history", &lines)
}

pub async fn render(state: &AppState, scope: &Scope, detail: bool) -> String {
    let session = state.auth.session();
    let user_id = session.as_ref().map(|s| s.user_id.clone()).unwrap_or_default();

    let points = Loadable::from_scoped(
        scope.run(state.queries.points_me(state.api.as_ref())).await,
        load_error_message,
    );

    let mut body = vec![
        format!("Nickname  {}", state.auth.nickname().unwrap_or_else(|| "-".to_string())),
        format!("User ID   {}", if user_id.is_empty() { "-" } else { user_id.as_str() }),
        String::new(),
        home::points_section(&points),
        String::new(),
    ];

    if detail {
        let result = scope.run(state.api.fetch_points_detail(&user_id)).await;
        body.push(detail_section(&Loadable::from_scoped(result, load_error_message)));
    } else {
        body.push("Point history: voltup my --detail".to_string());
        body.push(format!("Order history: {}", Route::Orders.path()));
    }
    body.push("Log out: voltup logout".to_string());

    frame(state, Route::MyInfo, &body.join("\n"))
}

/// Log out and show where that left us
pub async fn logout(state: &AppState) -> String {
    state.auth.logout().await;
    super::login::form(state, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltup_core::{PointHistoryEntry, Points};

    #[test]
    fn test_detail_lists_signed_amounts() {
        let detail = Loadable::Ready(PointsDetail {
            total_balance: Points(1500),
            histories: vec![
                PointHistoryEntry {
                    description: "Roulette".into(),
                    amount: 100,
                    expiry_date: Some("2026-12-31T00:00:00".into()),
                },
                PointHistoryEntry {
                    description: "Coffee".into(),
                    amount: -1200,
                    expiry_date: None,
                },
            ],
        });
        let text = detail_section(&detail);
        assert!(text.contains("Total balance  1,500P"));
        assert!(text.contains("+100P"));
        assert!(text.contains("-1,200P"));
        assert!(text.contains("expires 2026-12-31"));
    }

    #[test]
    fn test_empty_history() {
        let text = detail_section(&Loadable::Ready(PointsDetail::default()));
        assert!(text.contains("No point history yet."));
    }
}
