//! Operation façade over the transport client.
//!
//! Each method wraps one backend call into a two-emission sequence on a
//! fresh channel: `Loading` immediately, then exactly one terminal
//! `Success` or `Error`, after which the channel closes. Transport failures
//! never escape as `Err`; they collapse to their display text inside the
//! sequence. The repository keeps no state between calls, and it never
//! refreshes anything on its own: composing "re-list after a mutation
//! succeeded" belongs to the caller.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, instrument, Instrument};

use crate::api::{AdminApi, MessageResponse};
use crate::domain::{NewProduct, Order, User, UserDetailsPatch};
use crate::error::TransportResult;
use crate::progress::Progress;

#[derive(Clone)]
pub struct AdminRepository {
    api: Arc<dyn AdminApi>,
}

impl AdminRepository {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }

    #[instrument(skip(self))]
    pub fn get_all_users(&self) -> mpsc::Receiver<Progress<Vec<User>>> {
        debug!("Sending request");
        self.emit(move |api| async move { api.get_all_users().await })
    }

    #[instrument(skip(self))]
    pub fn approve_user(&self, user_id: String) -> mpsc::Receiver<Progress<MessageResponse>> {
        debug!("Sending request");
        self.emit(move |api| async move { api.approve_user(&user_id).await })
    }

    #[instrument(skip(self))]
    pub fn block_unblock_user(
        &self,
        block_user: u8,
        user_id: String,
    ) -> mpsc::Receiver<Progress<MessageResponse>> {
        debug!("Sending request");
        self.emit(move |api| async move { api.block_unblock_user(block_user, &user_id).await })
    }

    #[instrument(skip(self))]
    pub fn delete_user(&self, user_id: String) -> mpsc::Receiver<Progress<MessageResponse>> {
        debug!("Sending request");
        self.emit(move |api| async move { api.delete_user(&user_id).await })
    }

    #[instrument(skip(self))]
    pub fn add_product(&self, product: NewProduct) -> mpsc::Receiver<Progress<MessageResponse>> {
        debug!("Sending request");
        self.emit(move |api| async move { api.add_product(product).await })
    }

    #[instrument(skip(self))]
    pub fn get_all_orders(&self) -> mpsc::Receiver<Progress<Vec<Order>>> {
        debug!("Sending request");
        self.emit(move |api| async move { api.get_all_orders().await })
    }

    #[instrument(skip(self))]
    pub fn approve_order(&self, order_id: String) -> mpsc::Receiver<Progress<MessageResponse>> {
        debug!("Sending request");
        self.emit(move |api| async move { api.approve_order(&order_id).await })
    }

    #[instrument(skip(self))]
    pub fn update_user_details(
        &self,
        patch: UserDetailsPatch,
    ) -> mpsc::Receiver<Progress<MessageResponse>> {
        debug!("Sending request");
        self.emit(move |api| async move { api.update_user_details(patch).await })
    }

    /// Spawns the call and returns the receiving end of its emission
    /// sequence.
    fn emit<T, F, Fut>(&self, call: F) -> mpsc::Receiver<Progress<T>>
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn AdminApi>) -> Fut + Send + 'static,
        Fut: Future<Output = TransportResult<T>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(2);
        let api = Arc::clone(&self.api);
        tokio::spawn(
            async move {
                let _ = tx.send(Progress::Loading).await;
                let terminal = match call(api).await {
                    Ok(value) => Progress::Success(value),
                    Err(e) => {
                        error!(error = %e, "Request failed");
                        Progress::Error(e.to_string())
                    }
                };
                let _ = tx.send(terminal).await;
            }
            .in_current_span(),
        );
        rx
    }
}
