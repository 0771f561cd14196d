use tracing::{error, info, Instrument};

use medadmin::app_system::{setup_tracing, AdminSystem};
use medadmin::config::ClientConfig;
use medadmin::store::AdminStore;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting admin client");

    let config = ClientConfig::from_env();
    let system = AdminSystem::new(&config).map_err(|e| e.to_string())?;
    let store = &system.store;

    let span = tracing::info_span!("user_listing");
    let users = async {
        info!("Fetching all users");
        store.get_all_users();
        store.all_users_state.next_terminal().await
    }
    .instrument(span)
    .await;

    let users = match (users.data, users.error) {
        (Some(users), _) => users,
        (None, error) => {
            let message = error.unwrap_or_else(|| "no terminal value".to_string());
            error!(error = %message, "User listing failed");
            return Err(message);
        }
    };
    info!(
        count = users.len(),
        pending = users.iter().filter(|u| !u.approved()).count(),
        "Users fetched"
    );

    // Approve the first pending user, then refresh the list. The store
    // never chains operations itself, so the refresh lives here.
    if let Some(pending) = users.iter().find(|u| !u.approved() && !u.blocked()) {
        let span = tracing::info_span!("user_approval", user_id = %pending.user_id);
        async {
            info!("Approving user");
            store.approve_user(pending.user_id.clone());
            let outcome = store.approve_user_state.next_terminal().await;

            match (outcome.data, outcome.error) {
                (Some(response), _) => {
                    info!(message = %response.message, "User approved");
                    store.clear_approve_user_state();
                    refresh_users(store).await;
                }
                (None, error) => {
                    error!(error = ?error, "User approval failed");
                    store.clear_approve_user_state();
                }
            }
        }
        .instrument(span)
        .await;
    }

    let span = tracing::info_span!("order_listing");
    async {
        info!("Fetching all orders");
        store.get_all_orders();
        let orders = store.all_orders_state.next_terminal().await;

        match (orders.data, orders.error) {
            (Some(orders), _) => info!(
                count = orders.len(),
                pending = orders.iter().filter(|o| !o.approved()).count(),
                "Orders fetched"
            ),
            (None, error) => error!(error = ?error, "Order listing failed"),
        }
    }
    .instrument(span)
    .await;

    info!("Done");
    Ok(())
}

async fn refresh_users(store: &AdminStore) {
    store.get_all_users();
    let refreshed = store.all_users_state.next_terminal().await;
    match (refreshed.data, refreshed.error) {
        (Some(users), _) => info!(count = users.len(), "User list refreshed"),
        (None, error) => error!(error = ?error, "User list refresh failed"),
    }
}
