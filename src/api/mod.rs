//! Transport layer for the backend's admin REST endpoints.

mod http;

pub use http::HttpAdminApi;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{NewProduct, Order, User, UserDetailsPatch};
use crate::error::TransportResult;

/// Terminal payload of every mutation endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// The backend's admin capabilities, one method per endpoint.
///
/// A trait so the repository and store can be exercised against a scripted
/// implementation with no network. The real implementation is
/// [`HttpAdminApi`].
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn get_all_users(&self) -> TransportResult<Vec<User>>;

    async fn approve_user(&self, user_id: &str) -> TransportResult<MessageResponse>;

    /// `block_user` is 1 to block, 0 to unblock.
    async fn block_unblock_user(
        &self,
        block_user: u8,
        user_id: &str,
    ) -> TransportResult<MessageResponse>;

    async fn delete_user(&self, user_id: &str) -> TransportResult<MessageResponse>;

    async fn add_product(&self, product: NewProduct) -> TransportResult<MessageResponse>;

    async fn get_all_orders(&self) -> TransportResult<Vec<Order>>;

    async fn approve_order(&self, order_id: &str) -> TransportResult<MessageResponse>;

    async fn update_user_details(
        &self,
        patch: UserDetailsPatch,
    ) -> TransportResult<MessageResponse>;
}
