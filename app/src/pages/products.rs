//! Product catalog and the purchase modal

use super::frame;
use crate::router::Route;
use crate::state::AppState;
use crate::views::{layout, skeleton, Loadable};
use voltup_core::{load_error_message, Product};
use voltup_engine::purchase::{PurchaseModal, PurchaseOutcome};
use voltup_engine::Scope;

/// Placeholder cards shown while the catalog loads
const SKELETON_CARDS: usize = 4;

fn card(product: &Product) -> String {
    let stock = if product.is_out_of_stock() {
        "SOLD OUT".to_string()
    } else {
        format!("{} left", product.stock)
    };
    format!("#{:<4} {:<24} {:>10}  {}", product.id, product.name, product.point_price, stock)
}

pub fn list(products: &Loadable<Vec<Product>>) -> String {
    match products {
        Loadable::Loading => skeleton::product_cards(SKELETON_CARDS),
        Loadable::Failed(message) => format!("! {}", message),
        Loadable::Ready(products) if products.is_empty() => "No products available.".to_string(),
        Loadable::Ready(products) => products.iter().map(card).collect::<Vec<_>>().join("\n"),
    }
}

pub fn modal_view(modal: &PurchaseModal) -> String {
    let product = modal.product();
    let selector = modal.selector();
    let lines = vec![
        format!("Price     {}", product.point_price),
        format!("Quantity  {} (1-{})", selector.quantity(), selector.max()),
        format!("Total     {}", modal.total()),
        format!("[{}]", modal.button_label()),
    ];
    layout::modal(&product.name, &lines)
}

pub async fn render(state: &AppState, scope: &Scope) -> String {
    let products = Loadable::from_scoped(
        scope.run(state.queries.products(state.api.as_ref())).await,
        load_error_message,
    );
    let body = format!(
        "Spend your points.\n\n{}\n\nBuy: voltup buy <id> --quantity <n>",
        list(&products)
    );
    frame(state, Route::Products, &body)
}

/// Open the modal for product `id`, pick `quantity` and submit once
pub async fn buy(state: &AppState, scope: &Scope, id: &str, quantity: u32) -> (Option<PurchaseOutcome>, String) {
    let catalog = match scope.run(state.queries.products(state.api.as_ref())).await {
        Some(Ok(products)) => products,
        Some(Err(e)) => {
            let body = format!("! {}", load_error_message(&e));
            return (None, frame(state, Route::Products, &body));
        }
        None => return (None, frame(state, Route::Products, &list(&Loadable::Loading))),
    };

    let Some(product) = catalog.into_iter().find(|p| p.id == id) else {
        let body = format!("! No product with id {}.", id);
        return (None, frame(state, Route::Products, &body));
    };

    let mut modal = PurchaseModal::open(product);
    modal.selector_mut().set(quantity);
    let before = modal_view(&modal);

    let Some(outcome) = scope
        .run(modal.submit(state.api.as_ref(), &state.queries, state.toasts.as_ref()))
        .await
    else {
        return (None, frame(state, Route::Products, &before));
    };

    let mut body = vec![before];
    if modal.is_open() {
        // still open after a failure so the user can adjust and retry
        body.push(modal_view(&modal));
    }
    (Some(outcome), frame(state, Route::Products, &body.join("\n\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltup_core::Points;

    fn product(id: &str, stock: u32) -> Product {
        Product {
            id: id.into(),
            name: "Coffee".into(),
            point_price: Points(1200),
            stock,
            image_url: None,
        }
    }

    #[test]
    fn test_sold_out_card() {
        let text = list(&Loadable::Ready(vec![product("1", 3), product("2", 0)]));
        assert!(text.contains("3 left"));
        assert!(text.contains("SOLD OUT"));
        assert!(text.contains("1,200P"));
    }

    #[test]
    fn test_modal_shows_total() {
        let mut modal = PurchaseModal::open(product("1", 5));
        modal.selector_mut().set(3);
        let text = modal_view(&modal);
        assert!(text.contains("Quantity  3 (1-5)"));
        assert!(text.contains("Total     3,600P"));
        assert!(text.contains("[Purchase]"));
    }

    #[test]
    fn test_loading_uses_placeholders() {
        assert_eq!(list(&Loadable::Loading), skeleton::product_cards(SKELETON_CARDS));
    }
}
