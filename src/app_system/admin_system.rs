use std::sync::Arc;

use tracing::info;

use crate::api::HttpAdminApi;
use crate::config::ClientConfig;
use crate::error::TransportResult;
use crate::repository::AdminRepository;
use crate::store::AdminStore;

/// The assembled client: transport -> repository -> store.
///
/// Responsible for building the HTTP client from configuration and wiring
/// the layers together. The store's slots carry all session state; the
/// repository is exposed separately for operations the store does not
/// track (user detail patches).
pub struct AdminSystem {
    pub repository: AdminRepository,
    pub store: AdminStore,
}

impl AdminSystem {
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        info!(base_url = %config.base_url, "Building admin client");

        let api = HttpAdminApi::new(config)?;
        let repository = AdminRepository::new(Arc::new(api));
        let store = AdminStore::new(repository.clone());

        Ok(Self { repository, store })
    }
}
