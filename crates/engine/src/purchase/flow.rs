//! Purchase modal flow
//!
//! The server validates points and stock; this flow only guards against
//! obviously invalid submits and reports the outcome. The modal stays open
//! on failure so the user can change the quantity and retry.

use super::QuantitySelector;
use crate::notify::ToastSink;
use crate::query::{points_me_key, products_key, QueryClient};
use tracing::{info, warn};
use voltup_core::{order_error_message, OrderReceipt, Points, Product};
use voltup_networking::RewardsApi;

pub const PURCHASE_SUCCESS_MESSAGE: &str = "Your purchase is complete.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Sold out, already submitting or closed; nothing was sent
    Refused,
    Completed(OrderReceipt),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct PurchaseModal {
    product: Product,
    selector: QuantitySelector,
    loading: bool,
    open: bool,
}

impl PurchaseModal {
    pub fn open(product: Product) -> Self {
        let selector = QuantitySelector::new(product.stock);
        Self {
            product,
            selector,
            loading: false,
            open: true,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selector(&self) -> &QuantitySelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut QuantitySelector {
        &mut self.selector
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn total(&self) -> Points {
        self.selector.total(self.product.point_price)
    }

    pub fn can_submit(&self) -> bool {
        self.open && !self.loading && !self.product.is_out_of_stock()
    }

    pub fn button_label(&self) -> &'static str {
        if self.product.is_out_of_stock() {
            "Sold out"
        } else if self.loading {
            "Purchasing..."
        } else {
            "Purchase"
        }
    }

    /// Place the order.
    ///
    /// Success refreshes the balance and the catalog, shows a toast and
    /// closes the modal. Failure shows a toast and leaves it open.
    pub async fn submit(
        &mut self,
        api: &dyn RewardsApi,
        queries: &QueryClient,
        toasts: &dyn ToastSink,
    ) -> PurchaseOutcome {
        if !self.can_submit() {
            return PurchaseOutcome::Refused;
        }

        let quantity = self.selector.quantity();
        self.loading = true;
        let response = api.create_order(&self.product.id, quantity).await;
        self.loading = false;

        match response {
            Ok(receipt) => {
                info!(
                    "Purchased {} x {} (order {:?})",
                    quantity, self.product.name, receipt.order_id
                );
                queries.invalidate(&points_me_key());
                queries.invalidate(&products_key());
                toasts.success(PURCHASE_SUCCESS_MESSAGE);
                self.close();
                PurchaseOutcome::Completed(receipt)
            }
            Err(e) => {
                warn!("Purchase of {} failed: {}", self.product.name, e);
                let message = order_error_message(&e);
                toasts.error(&message);
                PurchaseOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ToastCenter, ToastKind};
    use crate::testing::{api_error, FakeApi};
    use voltup_core::{Error, ORDER_FALLBACK_MESSAGE};

    fn product(stock: u32) -> Product {
        Product {
            id: "7".into(),
            name: "Coffee".into(),
            point_price: Points(1200),
            stock,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_success_invalidates_and_closes() {
        let api = FakeApi::default().with_order(Ok(OrderReceipt {
            order_id: Some("55".into()),
        }));
        let queries = QueryClient::new();
        let toasts = ToastCenter::new();

        let mut modal = PurchaseModal::open(product(3));
        modal.selector_mut().set(2);
        assert_eq!(modal.total(), Points(2400));

        let outcome = modal.submit(&api, &queries, &toasts).await;

        assert!(matches!(outcome, PurchaseOutcome::Completed(_)));
        assert!(!modal.is_open());
        assert_eq!(queries.cache().invalidation_count(&points_me_key()), 1);
        assert_eq!(queries.cache().invalidation_count(&products_key()), 1);

        let shown = toasts.active();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, ToastKind::Success);
        assert_eq!(shown[0].message, PURCHASE_SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_insufficient_points_keeps_modal_open() {
        let api = FakeApi::default().with_order(Err(api_error(400, Some("C005"), Some("insufficient"))));
        let queries = QueryClient::new();
        let toasts = ToastCenter::new();
        let mut modal = PurchaseModal::open(product(3));

        let outcome = modal.submit(&api, &queries, &toasts).await;

        let expected = "You don't have enough points. Earn more points and try again.";
        assert_eq!(outcome, PurchaseOutcome::Failed(expected.into()));
        assert!(modal.is_open());
        assert!(!modal.is_loading());
        assert_eq!(toasts.active()[0].message, expected);
        assert_eq!(queries.cache().invalidation_count(&points_me_key()), 0);
    }

    #[tokio::test]
    async fn test_free_text_and_fallback_messages() {
        let queries = QueryClient::new();
        let toasts = ToastCenter::new();

        let api = FakeApi::default().with_order(Err(api_error(400, Some("C999"), Some(" Store closed "))));
        let mut modal = PurchaseModal::open(product(3));
        assert_eq!(
            modal.submit(&api, &queries, &toasts).await,
            PurchaseOutcome::Failed("Store closed".into())
        );

        let api = FakeApi::default().with_order(Err(Error::NetworkError("reset".into())));
        assert_eq!(
            modal.submit(&api, &queries, &toasts).await,
            PurchaseOutcome::Failed(ORDER_FALLBACK_MESSAGE.into())
        );
    }

    #[tokio::test]
    async fn test_sold_out_is_refused_without_request() {
        let api = FakeApi::default();
        let queries = QueryClient::new();
        let toasts = ToastCenter::new();
        let mut modal = PurchaseModal::open(product(0));

        assert_eq!(modal.button_label(), "Sold out");
        assert_eq!(modal.submit(&api, &queries, &toasts).await, PurchaseOutcome::Refused);
        assert_eq!(api.call_count("create_order"), 0);
        assert!(toasts.active().is_empty());
    }
}
