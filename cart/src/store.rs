use catalog::CatalogItem;
use tracing::warn;

use crate::{
    line::{CartLine, Totals, compute_totals},
    storage::{CART_COUNT_KEY, CART_KEY, CartStorage, StorageError},
};

/// The authoritative in-session line list.
///
/// Every mutation persists before returning, so the rendered view always
/// reflects the just-written state. At most one line exists per item id;
/// adding an existing item bumps its quantity instead of duplicating.
pub struct CartStore<S> {
    lines: Vec<CartLine>,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Restores the cart from storage. Missing or corrupt data yields an
    /// empty cart, not an error.
    pub async fn load(mut storage: S) -> Result<Self, StorageError> {
        let lines = match storage.get(CART_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Stored cart is corrupt, starting empty: {e}");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(Self { lines, storage })
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Bumps the quantity of an existing line, or appends a quantity-1 line
    /// snapshotting the item. Returns the updated line.
    pub async fn add_item(&mut self, item: &CatalogItem) -> Result<CartLine, StorageError> {
        let line = match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity += 1;
                line.clone()
            }
            None => {
                let line = CartLine::snapshot(item);
                self.lines.push(line.clone());
                line
            }
        };

        self.persist().await?;
        Ok(line)
    }

    /// Quantity > 1 decrements; quantity 1 drops the line; an absent id is a
    /// no-op, not an error.
    pub async fn decrement_or_remove(&mut self, id: u32) -> Result<(), StorageError> {
        let Some(index) = self.lines.iter().position(|line| line.id == id) else {
            return Ok(());
        };

        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }

        self.persist().await
    }

    /// Drops the line whatever its quantity. Idempotent.
    pub async fn remove_completely(&mut self, id: u32) -> Result<(), StorageError> {
        self.lines.retain(|line| line.id != id);
        self.persist().await
    }

    /// Explicit user action (or a completed checkout) only.
    pub async fn clear(&mut self) -> Result<(), StorageError> {
        self.lines.clear();
        self.persist().await
    }

    pub fn compute_totals(&self) -> Totals {
        compute_totals(&self.lines)
    }

    /// Writes the full line list under `cart` and the item count under
    /// `cartCount`, in that order.
    pub async fn persist(&mut self) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&self.lines)
            .map_err(|e| StorageError(Box::new(e)))?;
        let count = self.compute_totals().item_count.to_string();

        self.storage.set(CART_KEY, &serialized).await?;
        self.storage.set(CART_COUNT_KEY, &count).await
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use catalog::CatalogItem;

    use super::CartStore;
    use crate::storage::{CART_COUNT_KEY, CART_KEY, CartStorage, MemoryStorage};

    fn item(id: u32, price: &str) -> CatalogItem {
        CatalogItem {
            id,
            name: format!("item-{id}"),
            category: "dogs".to_string(),
            kind: "food".to_string(),
            brand: String::new(),
            flavor: String::new(),
            life_stage: String::new(),
            breed_size: String::new(),
            price: price.to_string(),
            discount: None,
            image: String::new(),
            stock: 3,
        }
    }

    async fn empty_cart() -> CartStore<MemoryStorage> {
        CartStore::load(MemoryStorage::new()).await.unwrap()
    }

    #[tokio::test]
    async fn test_repeated_add_bumps_quantity() {
        let mut cart = empty_cart().await;
        let item = item(1, "500");

        for _ in 0..4 {
            cart.add_item(&item).await.unwrap();
        }

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 4);
    }

    #[tokio::test]
    async fn test_add_returns_updated_line() {
        let mut cart = empty_cart().await;

        let first = cart.add_item(&item(2, "750")).await.unwrap();
        assert_eq!(first.quantity, 1);
        assert_eq!(first.name, "item-2");

        let second = cart.add_item(&item(2, "750")).await.unwrap();
        assert_eq!(second.quantity, 2);
    }

    #[tokio::test]
    async fn test_decrement_boundary() {
        let mut cart = empty_cart().await;
        let item = item(3, "100");
        cart.add_item(&item).await.unwrap();
        cart.add_item(&item).await.unwrap();

        cart.decrement_or_remove(3).await.unwrap();
        assert_eq!(cart.get(3).unwrap().quantity, 1);

        cart.decrement_or_remove(3).await.unwrap();
        assert!(cart.get(3).is_none());
        assert!(cart.lines().is_empty());
    }

    #[tokio::test]
    async fn test_decrement_absent_id_is_noop() {
        let mut cart = empty_cart().await;
        cart.add_item(&item(1, "100")).await.unwrap();

        cart.decrement_or_remove(42).await.unwrap();
        assert_eq!(cart.lines().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_completely_is_idempotent() {
        let mut cart = empty_cart().await;
        let item = item(5, "900");
        cart.add_item(&item).await.unwrap();
        cart.add_item(&item).await.unwrap();

        cart.remove_completely(5).await.unwrap();
        let after_once = cart.lines().to_vec();

        cart.remove_completely(5).await.unwrap();
        assert_eq!(cart.lines(), after_once.as_slice());
        assert!(cart.lines().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_remove_persists_count() {
        let mut cart = empty_cart().await;

        cart.add_item(&item(7, "1,200")).await.unwrap();
        assert_eq!(cart.get(7).unwrap().quantity, 1);
        assert_eq!(
            cart.storage_mut().get(CART_COUNT_KEY).await.unwrap(),
            Some("1".to_string())
        );

        cart.remove_completely(7).await.unwrap();
        assert!(cart.lines().is_empty());
        assert_eq!(
            cart.storage_mut().get(CART_COUNT_KEY).await.unwrap(),
            Some("0".to_string())
        );
    }

    #[tokio::test]
    async fn test_reload_round_trip() {
        let mut cart = empty_cart().await;
        cart.add_item(&item(1, "1,000")).await.unwrap();
        cart.add_item(&item(1, "1,000")).await.unwrap();
        cart.add_item(&item(2, "2,500")).await.unwrap();

        let mut storage = MemoryStorage::new();
        let raw = cart.storage_mut().get(CART_KEY).await.unwrap().unwrap();
        storage.set(CART_KEY, &raw).await.unwrap();

        let reloaded = CartStore::load(storage).await.unwrap();
        assert_eq!(reloaded.lines(), cart.lines());

        let totals = reloaded.compute_totals();
        assert_eq!(totals.subtotal, 4500);
        assert_eq!(totals.item_count, 3);
    }

    #[tokio::test]
    async fn test_corrupt_storage_starts_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(CART_KEY, "not json").await.unwrap();

        let cart = CartStore::load(storage).await.unwrap();
        assert!(cart.lines().is_empty());
    }
}
