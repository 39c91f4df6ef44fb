use std::collections::HashMap;

use thiserror::Error;

/// Key holding the JSON-serialized line list.
pub const CART_KEY: &str = "cart";

/// Key holding the stringified item count, kept separately so a badge can
/// render without deserializing the whole cart.
pub const CART_COUNT_KEY: &str = "cartCount";

#[derive(Error, Debug)]
#[error("storage error: {0}")]
pub struct StorageError(#[from] pub Box<dyn std::error::Error + Send + Sync>);

/// Durable key/value storage behind the cart.
///
/// The store owns exactly one implementation for its whole lifetime and
/// writes through it after every mutation; in-process access is serialized
/// by whoever owns the store.
#[allow(async_fn_in_trait)]
pub trait CartStorage {
    async fn get(&mut self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage; the default for tests and embedded use.
#[derive(Default, Debug)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    async fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
