//! # Mock transport
//!
//! Scripted [`AdminApi`] implementation for exercising the repository and
//! store without a network.
//!
//! # Testing Strategy
//! Each operation owns a queue of canned outcomes; a call pops the next one
//! and records itself in [`MockApi::calls`]. An outcome may carry a gate:
//! the call then waits until the test releases (or drops) the gate before
//! returning, which pins down the order in which overlapping calls
//! complete.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{AdminApi, MessageResponse};
use crate::domain::{NewProduct, Order, User, UserDetailsPatch};
use crate::error::TransportResult;

pub type Script<T> = Mutex<VecDeque<ScriptedCall<T>>>;

pub struct ScriptedCall<T> {
    result: TransportResult<T>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Queue a canned outcome for one operation.
pub fn enqueue<T>(script: &Script<T>, result: TransportResult<T>) {
    script
        .lock()
        .unwrap()
        .push_back(ScriptedCall { result, gate: None });
}

/// Queue a canned outcome that is held back until the returned sender is
/// used (or dropped).
pub fn enqueue_gated<T>(script: &Script<T>, result: TransportResult<T>) -> oneshot::Sender<()> {
    let (release, gate) = oneshot::channel();
    script.lock().unwrap().push_back(ScriptedCall {
        result,
        gate: Some(gate),
    });
    release
}

#[derive(Default)]
pub struct MockApi {
    pub users: Script<Vec<User>>,
    pub approve_user: Script<MessageResponse>,
    pub block_unblock_user: Script<MessageResponse>,
    pub delete_user: Script<MessageResponse>,
    pub add_product: Script<MessageResponse>,
    pub orders: Script<Vec<Order>>,
    pub approve_order: Script<MessageResponse>,
    pub update_user_details: Script<MessageResponse>,
    calls: Mutex<Vec<String>>,
}

impl MockApi {
    /// Every call recorded so far, as "endpoint args" strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn take<T>(&self, script: &Script<T>, name: &str) -> TransportResult<T> {
        let call = script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response for {name}"));
        if let Some(gate) = call.gate {
            let _ = gate.await;
        }
        call.result
    }
}

#[async_trait]
impl AdminApi for MockApi {
    async fn get_all_users(&self) -> TransportResult<Vec<User>> {
        self.record("getAllUsers".to_string());
        self.take(&self.users, "getAllUsers").await
    }

    async fn approve_user(&self, user_id: &str) -> TransportResult<MessageResponse> {
        self.record(format!("approveUser {user_id}"));
        self.take(&self.approve_user, "approveUser").await
    }

    async fn block_unblock_user(
        &self,
        block_user: u8,
        user_id: &str,
    ) -> TransportResult<MessageResponse> {
        self.record(format!("blockUnblockUser {block_user} {user_id}"));
        self.take(&self.block_unblock_user, "blockUnblockUser").await
    }

    async fn delete_user(&self, user_id: &str) -> TransportResult<MessageResponse> {
        self.record(format!("deleteUser {user_id}"));
        self.take(&self.delete_user, "deleteUser").await
    }

    async fn add_product(&self, product: NewProduct) -> TransportResult<MessageResponse> {
        self.record(format!("addProduct {}", product.name));
        self.take(&self.add_product, "addProduct").await
    }

    async fn get_all_orders(&self) -> TransportResult<Vec<Order>> {
        self.record("getAllOrdersDetails".to_string());
        self.take(&self.orders, "getAllOrdersDetails").await
    }

    async fn approve_order(&self, order_id: &str) -> TransportResult<MessageResponse> {
        self.record(format!("approveOrder {order_id}"));
        self.take(&self.approve_order, "approveOrder").await
    }

    async fn update_user_details(
        &self,
        patch: UserDetailsPatch,
    ) -> TransportResult<MessageResponse> {
        // Record the form exactly as it would go on the wire, so tests can
        // assert that absent fields are omitted.
        self.record(format!(
            "updateUserDetails {}",
            serde_json::to_string(&patch).unwrap()
        ));
        self.take(&self.update_user_details, "updateUserDetails").await
    }
}

/// A canned user awaiting approval.
pub fn sample_user(user_id: &str) -> User {
    User {
        id: None,
        user_id: user_id.to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        address: "12 Main St".to_string(),
        phone_number: "5550001111".to_string(),
        pincode: "110001".to_string(),
        account_creation_date: "2024-01-15".to_string(),
        password: None,
        is_approved: 0,
        is_blocked: 0,
    }
}

/// A canned pending order.
pub fn sample_order(order_id: &str) -> Order {
    Order {
        id: None,
        order_id: order_id.to_string(),
        user_id: "u1".to_string(),
        username: "Alice".to_string(),
        product_id: "p3".to_string(),
        product_name: "Paracetamol".to_string(),
        category: "Tablets".to_string(),
        quantity: 4,
        price: 12.5,
        total_amount: 50.0,
        order_date: "2024-02-02".to_string(),
        is_approved: 0,
        message: "Order placed".to_string(),
    }
}

pub fn message(text: &str) -> MessageResponse {
    MessageResponse {
        message: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_outcomes_pop_in_order() {
        let api = MockApi::default();
        enqueue(&api.approve_user, Ok(message("first")));
        enqueue(&api.approve_user, Ok(message("second")));

        let first = api.approve_user("u1").await.unwrap();
        let second = api.approve_user("u2").await.unwrap();
        assert_eq!(first.message, "first");
        assert_eq!(second.message, "second");
        assert_eq!(api.calls(), vec!["approveUser u1", "approveUser u2"]);
    }

    #[tokio::test]
    async fn gated_outcome_waits_for_release() {
        let api = std::sync::Arc::new(MockApi::default());
        let release = enqueue_gated(&api.users, Ok(vec![sample_user("u1")]));

        let call = tokio::spawn({
            let api = std::sync::Arc::clone(&api);
            async move { api.get_all_users().await }
        });

        // The call is parked on the gate until we release it.
        tokio::task::yield_now().await;
        assert!(!call.is_finished());

        release.send(()).unwrap();
        let users = call.await.unwrap().unwrap();
        assert_eq!(users[0].user_id, "u1");
    }
}
