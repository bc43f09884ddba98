//! In-process fakes shared by the flow tests

use crate::auth::Navigator;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use voltup_core::errors::ApiErrorBody;
use voltup_core::{
    AuthLogin, CreateUserRequest, CreatedUser, Error, Order, OrderReceipt, PointsDetail,
    PointsSummary, Product, Result, RouletteResult, RouletteStatus,
};
use voltup_networking::RewardsApi;

pub fn api_error(status: u16, code: Option<&str>, message: Option<&str>) -> Error {
    Error::ApiError {
        status,
        body: ApiErrorBody {
            code: code.map(str::to_string),
            message: message.map(str::to_string),
        },
    }
}

fn not_found() -> Error {
    api_error(404, None, None)
}

fn replay(err: &Error) -> Error {
    match err {
        Error::ApiError { status, body } => Error::ApiError {
            status: *status,
            body: body.clone(),
        },
        Error::NetworkError(msg) => Error::NetworkError(msg.clone()),
        other => Error::Unknown(other.to_string()),
    }
}

/// A canned reply, replayed on every call
struct Reply<T>(Option<Result<T>>);

impl<T: Clone> Reply<T> {
    fn get(&self) -> Result<T> {
        match &self.0 {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(e)) => Err(replay(e)),
            None => Err(not_found()),
        }
    }
}

impl<T> Default for Reply<T> {
    fn default() -> Self {
        Reply(None)
    }
}

#[derive(Default)]
pub struct FakeApi {
    login: Reply<AuthLogin>,
    points_me: Reply<PointsSummary>,
    products: Reply<Vec<Product>>,
    order: Reply<OrderReceipt>,
    status: Reply<RouletteStatus>,
    participate: Reply<RouletteResult>,
    participate_delay: Duration,
    calls: Mutex<Vec<&'static str>>,
    login_nicknames: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_login(mut self, user_id: &str) -> Self {
        self.login = Reply(Some(Ok(AuthLogin {
            user_id: user_id.to_string(),
        })));
        self
    }

    pub fn with_login_error(mut self, err: Error) -> Self {
        self.login = Reply(Some(Err(err)));
        self
    }

    pub fn with_points(mut self, available: u64) -> Self {
        self.points_me = Reply(Some(Ok(PointsSummary {
            available_balance: available.into(),
            expiring_within_7_days: 0.into(),
        })));
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Reply(Some(Ok(products)));
        self
    }

    pub fn with_order(mut self, result: Result<OrderReceipt>) -> Self {
        self.order = Reply(Some(result));
        self
    }

    pub fn with_status(mut self, result: Result<RouletteStatus>) -> Self {
        self.status = Reply(Some(result));
        self
    }

    pub fn with_participate(mut self, result: Result<RouletteResult>) -> Self {
        self.participate = Reply(Some(result));
        self
    }

    /// Make participation take a while (server-side lock)
    pub fn with_participate_delay(mut self, delay: Duration) -> Self {
        self.participate_delay = delay;
        self
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.iter().filter(|c| **c == name).count())
            .unwrap_or(0)
    }

    pub fn login_nicknames(&self) -> Vec<String> {
        self.login_nicknames.lock().map(|n| n.clone()).unwrap_or_default()
    }

    fn record(&self, name: &'static str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(name);
        }
    }
}

#[async_trait]
impl RewardsApi for FakeApi {
    async fn login(&self, nickname: &str) -> Result<AuthLogin> {
        self.record("login");
        if let Ok(mut names) = self.login_nicknames.lock() {
            names.push(nickname.to_string());
        }
        self.login.get()
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<CreatedUser> {
        self.record("create_user");
        Ok(CreatedUser {
            id: "1".into(),
            login_id: request.login_id.clone(),
            name: request.name.clone(),
        })
    }

    async fn fetch_points_me(&self) -> Result<PointsSummary> {
        self.record("fetch_points_me");
        self.points_me.get()
    }

    async fn fetch_points_detail(&self, _user_id: &str) -> Result<PointsDetail> {
        self.record("fetch_points_detail");
        Ok(PointsDetail::default())
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        self.record("fetch_products");
        self.products.get()
    }

    async fn create_order(&self, _product_id: &str, _quantity: u32) -> Result<OrderReceipt> {
        self.record("create_order");
        self.order.get()
    }

    async fn fetch_my_orders(&self, _user_id: &str) -> Result<Vec<Order>> {
        self.record("fetch_my_orders");
        Ok(Vec::new())
    }

    async fn fetch_roulette_status(&self) -> Result<RouletteStatus> {
        self.record("fetch_roulette_status");
        self.status.get()
    }

    async fn participate(&self) -> Result<RouletteResult> {
        self.record("participate");
        if !self.participate_delay.is_zero() {
            tokio::time::sleep(self.participate_delay).await;
        }
        self.participate.get()
    }
}

/// Navigator that only remembers where it was sent
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(String, bool)>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<(String, bool)> {
        self.visits.lock().ok().and_then(|v| v.last().cloned())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str, replace: bool) {
        if let Ok(mut visits) = self.visits.lock() {
            visits.push((path.to_string(), replace));
        }
    }
}
