//! Per-operation request state, observable by a presentation layer.

mod slot;

pub use slot::{RequestState, Slot};

use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::api::MessageResponse;
use crate::domain::{NewProduct, Order, User};
use crate::progress::Progress;
use crate::repository::AdminRepository;

/// Holds the latest request state for every admin operation, one slot each.
///
/// Trigger methods overwrite their slot with the loading state
/// synchronously, then drive it from the repository's emission sequence on
/// a background task. Consumers read or subscribe to slots and call the
/// matching `clear_*` once they have acted on a terminal value, so a stale
/// outcome is never processed twice.
///
/// The store never chains operations: re-listing after a successful
/// mutation is the caller's composition.
#[derive(Clone)]
pub struct AdminStore {
    repository: AdminRepository,
    pub all_users_state: Slot<Vec<User>>,
    pub approve_user_state: Slot<MessageResponse>,
    pub block_unblock_user_state: Slot<MessageResponse>,
    pub delete_user_state: Slot<MessageResponse>,
    pub add_product_state: Slot<MessageResponse>,
    pub all_orders_state: Slot<Vec<Order>>,
    pub approve_order_state: Slot<MessageResponse>,
}

impl AdminStore {
    pub fn new(repository: AdminRepository) -> Self {
        Self {
            repository,
            all_users_state: Slot::new(),
            approve_user_state: Slot::new(),
            block_unblock_user_state: Slot::new(),
            delete_user_state: Slot::new(),
            add_product_state: Slot::new(),
            all_orders_state: Slot::new(),
            approve_order_state: Slot::new(),
        }
    }

    #[instrument(skip(self))]
    pub fn get_all_users(&self) {
        debug!("Triggering");
        Self::drive(&self.all_users_state, self.repository.get_all_users());
    }

    pub fn clear_all_users_state(&self) {
        self.all_users_state.clear();
    }

    #[instrument(skip(self))]
    pub fn approve_user(&self, user_id: String) {
        debug!("Triggering");
        Self::drive(&self.approve_user_state, self.repository.approve_user(user_id));
    }

    pub fn clear_approve_user_state(&self) {
        self.approve_user_state.clear();
    }

    /// `block_user` is 1 to block, 0 to unblock.
    #[instrument(skip(self))]
    pub fn block_unblock_user(&self, block_user: u8, user_id: String) {
        debug!("Triggering");
        Self::drive(
            &self.block_unblock_user_state,
            self.repository.block_unblock_user(block_user, user_id),
        );
    }

    pub fn clear_block_unblock_user_state(&self) {
        self.block_unblock_user_state.clear();
    }

    #[instrument(skip(self))]
    pub fn delete_user(&self, user_id: String) {
        debug!("Triggering");
        Self::drive(&self.delete_user_state, self.repository.delete_user(user_id));
    }

    pub fn clear_delete_user_state(&self) {
        self.delete_user_state.clear();
    }

    #[instrument(skip(self))]
    pub fn add_product(&self, product: NewProduct) {
        debug!("Triggering");
        Self::drive(&self.add_product_state, self.repository.add_product(product));
    }

    pub fn clear_add_product_state(&self) {
        self.add_product_state.clear();
    }

    #[instrument(skip(self))]
    pub fn get_all_orders(&self) {
        debug!("Triggering");
        Self::drive(&self.all_orders_state, self.repository.get_all_orders());
    }

    pub fn clear_all_orders_state(&self) {
        self.all_orders_state.clear();
    }

    #[instrument(skip(self))]
    pub fn approve_order(&self, order_id: String) {
        debug!("Triggering");
        Self::drive(&self.approve_order_state, self.repository.approve_order(order_id));
    }

    pub fn clear_approve_order_state(&self) {
        self.approve_order_state.clear();
    }

    /// Marks the slot loading now, then applies the sequence's emissions on
    /// a background task until the sequence completes. Emissions from a
    /// superseded invocation are dropped by the slot's sequence guard.
    fn drive<T>(slot: &Slot<T>, mut sequence: mpsc::Receiver<Progress<T>>)
    where
        T: Clone + Send + Sync + 'static,
    {
        let writer = slot.begin();
        tokio::spawn(async move {
            while let Some(update) = sequence.recv().await {
                writer.apply(update);
            }
        });
    }
}
