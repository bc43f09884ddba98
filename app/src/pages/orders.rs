//! Order history page

use super::frame;
use crate::router::Route;
use crate::state::AppState;
use crate::views::{skeleton, Loadable};
use voltup_core::{load_error_message, Order};
use voltup_engine::Scope;

pub fn list(orders: &Loadable<Vec<Order>>) -> String {
    match orders {
        Loadable::Loading => skeleton::list(3),
        Loadable::Failed(message) => format!("! {}", message),
        Loadable::Ready(orders) if orders.is_empty() => "No orders yet.".to_string(),
        Loadable::Ready(orders) => orders
            .iter()
            .map(|order| {
                format!(
                    "{} x{}  {}  {}  [{}]",
                    order.product_name,
                    order.quantity,
                    order.used_point,
                    order.ordered_at_display(),
                    order.status
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub async fn render(state: &AppState, scope: &Scope) -> String {
    let orders = match state.auth.user_id() {
        Some(user_id) => Loadable::from_scoped(
            scope.run(state.api.fetch_my_orders(&user_id)).await,
            load_error_message,
        ),
        None => Loadable::Loading,
    };

    let body = format!("Products you've bought.\n\n{}", list(&orders));
    frame(state, Route::Orders, &body)
}
