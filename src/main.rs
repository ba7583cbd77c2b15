use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use logistics_inventory::config::Config;
use logistics_inventory::local_storage::CoreLocalStorage;
use logistics_inventory::services::AuthService;
use logistics_inventory::store::{DataStore, DeliveryTab};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(path = %config.storage_path, "opening local storage");

    let storage = Arc::new(CoreLocalStorage::new(&config.storage_path)?);
    let store = DataStore::load(Arc::clone(&storage)).await?;
    let session = AuthService::load(Arc::clone(&storage)).await;

    info!(
        products = store.products().len(),
        low_stock = store.get_low_stock_products().len(),
        deliveries = store.delivery_requests().len(),
        personnel = store.delivery_persons().len(),
        ratings = store.ratings().len(),
        "inventory loaded"
    );

    match session.current_user() {
        Some(user) => {
            info!(name = %user.name, role = ?user.role, "restored session");
            let open = store.deliveries_for_user(user, DeliveryTab::InProgress);
            info!(count = open.len(), "deliveries in progress for this user");
        }
        None => info!("no active session"),
    }

    store.flush().await?;
    Ok(())
}
