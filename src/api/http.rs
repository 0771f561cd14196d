use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::domain::{NewProduct, Order, User, UserDetailsPatch};
use crate::error::{TransportError, TransportResult};

use super::{AdminApi, MessageResponse};

/// reqwest-backed transport client.
///
/// Stateless and cheap to share: every operation issues one request with the
/// configured timeout, sends its parameters form-url-encoded, and decodes
/// the JSON response body. No retries, no auth, no per-call overrides.
#[derive(Debug, Clone)]
pub struct HttpAdminApi {
    client: Client,
    base_url: String,
}

impl HttpAdminApi {
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    async fn send_form<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        form: &B,
    ) -> TransportResult<T> {
        debug!(%method, path, "form request");
        let response = self
            .client
            .request(method, self.url(path))
            .form(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> TransportResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn get_all_users(&self) -> TransportResult<Vec<User>> {
        self.get_json("getAllUsers").await
    }

    async fn approve_user(&self, user_id: &str) -> TransportResult<MessageResponse> {
        self.send_form(Method::PATCH, "approveUser", &[("userId", user_id)])
            .await
    }

    async fn block_unblock_user(
        &self,
        block_user: u8,
        user_id: &str,
    ) -> TransportResult<MessageResponse> {
        let form = [
            ("blockUser", block_user.to_string()),
            ("userId", user_id.to_string()),
        ];
        self.send_form(Method::PATCH, "blockUnblockUser", &form).await
    }

    async fn delete_user(&self, user_id: &str) -> TransportResult<MessageResponse> {
        // The backend reads the id from a form body even on DELETE.
        self.send_form(Method::DELETE, "deleteUser", &[("userId", user_id)])
            .await
    }

    async fn add_product(&self, product: NewProduct) -> TransportResult<MessageResponse> {
        self.send_form(Method::POST, "addProduct", &product).await
    }

    async fn get_all_orders(&self) -> TransportResult<Vec<Order>> {
        self.get_json("getAllOrdersDetails").await
    }

    async fn approve_order(&self, order_id: &str) -> TransportResult<MessageResponse> {
        self.send_form(Method::PATCH, "approveOrder", &[("orderId", order_id)])
            .await
    }

    async fn update_user_details(
        &self,
        patch: UserDetailsPatch,
    ) -> TransportResult<MessageResponse> {
        self.send_form(Method::PATCH, "updateUserDetails", &patch).await
    }
}
