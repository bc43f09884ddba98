//! Rewards API trait
//!
//! Higher layers depend on this trait rather than the concrete client so
//! flows can run against an in-process fake.

use super::{auth, orders, points, products, roulette, users};
use crate::VoltupClient;
use async_trait::async_trait;
use voltup_core::{
    AuthLogin, CreateUserRequest, CreatedUser, Order, OrderReceipt, PointsDetail, PointsSummary,
    Product, Result, RouletteResult, RouletteStatus,
};

#[async_trait]
pub trait RewardsApi: Send + Sync {
    async fn login(&self, nickname: &str) -> Result<AuthLogin>;

    async fn create_user(&self, request: &CreateUserRequest) -> Result<CreatedUser>;

    async fn fetch_points_me(&self) -> Result<PointsSummary>;

    async fn fetch_points_detail(&self, user_id: &str) -> Result<PointsDetail>;

    async fn fetch_products(&self) -> Result<Vec<Product>>;

    async fn create_order(&self, product_id: &str, quantity: u32) -> Result<OrderReceipt>;

    async fn fetch_my_orders(&self, user_id: &str) -> Result<Vec<Order>>;

    async fn fetch_roulette_status(&self) -> Result<RouletteStatus>;

    async fn participate(&self) -> Result<RouletteResult>;
}

#[async_trait]
impl RewardsApi for VoltupClient {
    async fn login(&self, nickname: &str) -> Result<AuthLogin> {
        auth::login(self, nickname).await
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<CreatedUser> {
        users::create_user(self, request).await
    }

    async fn fetch_points_me(&self) -> Result<PointsSummary> {
        points::fetch_points_me(self).await
    }

    async fn fetch_points_detail(&self, user_id: &str) -> Result<PointsDetail> {
        points::fetch_points_detail(self, user_id).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        products::fetch_products(self).await
    }

    async fn create_order(&self, product_id: &str, quantity: u32) -> Result<OrderReceipt> {
        orders::create_order(self, product_id, quantity).await
    }

    async fn fetch_my_orders(&self, user_id: &str) -> Result<Vec<Order>> {
        orders::fetch_my_orders(self, user_id).await
    }

    async fn fetch_roulette_status(&self) -> Result<RouletteStatus> {
        roulette::fetch_roulette_status(self).await
    }

    async fn participate(&self) -> Result<RouletteResult> {
        roulette::participate(self).await
    }
}
