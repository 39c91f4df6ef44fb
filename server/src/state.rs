use std::sync::{Arc, Mutex};

use cart::{CartStore, SyncedCart, notify::Notifier};
use catalog::{CatalogStore, remote::get_catalog_remote};
use tracing::{info, warn};

use crate::{
    config::Config,
    storage::{RedisStorage, init_redis},
    upstream::UpstreamCart,
};

pub struct State {
    pub catalog: CatalogStore,
    pub cart: tokio::sync::Mutex<SyncedCart<RedisStorage, UpstreamCart>>,
    pub notifier: Mutex<Notifier>,
    pub config: Config,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        // A catalog fetch failure degrades to an empty listing, not a crash.
        let items = match get_catalog_remote(&config.upstream_url).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Failed to fetch the catalog from upstream: {e}");
                Vec::new()
            }
        };
        info!("Loaded catalog items: {}", items.len());

        #[cfg(feature = "verbose")]
        println!("Catalog: {items:#?}");

        let mut catalog = CatalogStore::new();
        catalog.load(items);

        let redis_connection = init_redis(&config.redis_url).await;
        let store = CartStore::load(RedisStorage::new(redis_connection))
            .await
            .unwrap();
        info!("Restored cart lines: {}", store.lines().len());

        let cart = SyncedCart::new(store, UpstreamCart::new(&config.upstream_url));

        Arc::new(Self {
            catalog,
            cart: tokio::sync::Mutex::new(cart),
            notifier: Mutex::new(Notifier::new()),
            config,
        })
    }
}
