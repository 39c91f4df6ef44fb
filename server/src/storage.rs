//! # Redis
//!
//! Durable storage behind the cart.
//!
//! ## Requirements
//!
//! - Survive restarts: the cart must come back exactly as last written
//! - Tiny dataset: two string keys, rewritten after every mutation
//! - Writes are serialized upstream of here (one cart behind one lock), so
//!   no Redis-side coordination is needed
//!
//! ## Implementation
//!
//! - `cart`: the JSON line list, replaced wholesale on each write
//! - `cartCount`: the item count alone, so the badge endpoint of a future
//!   frontend can read one small string

use std::time::Duration;

use cart::storage::{CartStorage, StorageError};
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();
    let connection_manager = client
        .get_connection_manager_with_config(config)
        .await
        .unwrap();

    connection_manager
}

pub struct RedisStorage {
    connection: ConnectionManager,
}

impl RedisStorage {
    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }
}

impl CartStorage for RedisStorage {
    async fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        self.connection
            .get(key)
            .await
            .map_err(|e| StorageError(Box::new(e)))
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let _: () = self
            .connection
            .set(key, value)
            .await
            .map_err(|e| StorageError(Box::new(e)))?;

        Ok(())
    }
}
