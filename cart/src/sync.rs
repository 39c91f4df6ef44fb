//! Best-effort mirroring of cart mutations to the upstream cart API.
//!
//! The local mutation always runs and persists first; the upstream call comes
//! after and its failure is logged and reported, never propagated. Both
//! layers stay independently observable through [`MutationOutcome`].

use std::time::Duration;

use anyhow::Error;
use catalog::CatalogItem;
use serde::Serialize;
use tokio::time::timeout;
use tracing::warn;

use crate::{
    line::{CartLine, Totals},
    storage::{CartStorage, StorageError},
    store::CartStore,
};

/// Upper bound on one upstream mirror call. The cart is mutated under a
/// lock, so a mirror that never responds must not hold it open; past the
/// bound the mutation reports `Failed` and moves on.
pub const MIRROR_TIMEOUT: Duration = Duration::from_secs(5);

/// The upstream cart endpoints. Adds and full removals are mirrored;
/// decrements are local-only.
#[allow(async_fn_in_trait)]
pub trait RemoteCart {
    async fn add(&self, product_id: u32, quantity: u32) -> Result<(), Error>;
    async fn remove(&self, product_id: u32) -> Result<(), Error>;
}

/// A remote that never attempts anything; local-only carts.
pub struct NoRemote;

impl RemoteCart for NoRemote {
    async fn add(&self, _product_id: u32, _quantity: u32) -> Result<(), Error> {
        Ok(())
    }

    async fn remove(&self, _product_id: u32) -> Result<(), Error> {
        Ok(())
    }
}

/// What happened on the upstream side of one mutation.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RemoteOutcome {
    Completed,
    NotAttempted,
    Failed(String),
}

/// One mutation, both layers: the local result (already persisted) and the
/// upstream result (informational).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub line: Option<CartLine>,
    pub totals: Totals,
    pub remote: RemoteOutcome,
}

/// A [`CartStore`] paired with the upstream mirror.
pub struct SyncedCart<S, R> {
    cart: CartStore<S>,
    remote: R,
}

impl<S: CartStorage, R: RemoteCart> SyncedCart<S, R> {
    pub fn new(cart: CartStore<S>, remote: R) -> Self {
        Self { cart, remote }
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub async fn add_item(&mut self, item: &CatalogItem) -> Result<MutationOutcome, StorageError> {
        let line = self.cart.add_item(item).await?;

        let remote = match timeout(MIRROR_TIMEOUT, self.remote.add(item.id, 1)).await {
            Ok(Ok(())) => RemoteOutcome::Completed,
            Ok(Err(e)) => {
                warn!("Cart add for {} did not reach the upstream API: {e}", item.id);
                RemoteOutcome::Failed(e.to_string())
            }
            Err(_) => {
                warn!("Cart add for {} timed out against the upstream API", item.id);
                RemoteOutcome::Failed("upstream call timed out".to_string())
            }
        };

        Ok(MutationOutcome {
            line: Some(line),
            totals: self.cart.compute_totals(),
            remote,
        })
    }

    pub async fn decrement_or_remove(&mut self, id: u32) -> Result<MutationOutcome, StorageError> {
        self.cart.decrement_or_remove(id).await?;

        Ok(MutationOutcome {
            line: self.cart.get(id).cloned(),
            totals: self.cart.compute_totals(),
            remote: RemoteOutcome::NotAttempted,
        })
    }

    /// Explicit "clear cart" action. Local-only: checkout settles the
    /// upstream cart through its own flow.
    pub async fn clear(&mut self) -> Result<MutationOutcome, StorageError> {
        self.cart.clear().await?;

        Ok(MutationOutcome {
            line: None,
            totals: self.cart.compute_totals(),
            remote: RemoteOutcome::NotAttempted,
        })
    }

    pub async fn remove_completely(&mut self, id: u32) -> Result<MutationOutcome, StorageError> {
        self.cart.remove_completely(id).await?;

        let remote = match timeout(MIRROR_TIMEOUT, self.remote.remove(id)).await {
            Ok(Ok(())) => RemoteOutcome::Completed,
            Ok(Err(e)) => {
                warn!("Cart removal for {id} did not reach the upstream API: {e}");
                RemoteOutcome::Failed(e.to_string())
            }
            Err(_) => {
                warn!("Cart removal for {id} timed out against the upstream API");
                RemoteOutcome::Failed("upstream call timed out".to_string())
            }
        };

        Ok(MutationOutcome {
            line: None,
            totals: self.cart.compute_totals(),
            remote,
        })
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Error, anyhow};
    use catalog::CatalogItem;

    use super::{MutationOutcome, NoRemote, RemoteCart, RemoteOutcome, SyncedCart};
    use crate::{storage::MemoryStorage, store::CartStore};

    struct DownRemote;

    impl RemoteCart for DownRemote {
        async fn add(&self, _product_id: u32, _quantity: u32) -> Result<(), Error> {
            Err(anyhow!("connection refused"))
        }

        async fn remove(&self, _product_id: u32) -> Result<(), Error> {
            Err(anyhow!("connection refused"))
        }
    }

    // Accepts the call but never answers.
    struct HangingRemote;

    impl RemoteCart for HangingRemote {
        async fn add(&self, _product_id: u32, _quantity: u32) -> Result<(), Error> {
            std::future::pending().await
        }

        async fn remove(&self, _product_id: u32) -> Result<(), Error> {
            std::future::pending().await
        }
    }

    fn item(id: u32) -> CatalogItem {
        CatalogItem {
            id,
            name: format!("item-{id}"),
            category: "dogs".to_string(),
            kind: "toy".to_string(),
            brand: String::new(),
            flavor: String::new(),
            life_stage: String::new(),
            breed_size: String::new(),
            price: "1,500".to_string(),
            discount: None,
            image: String::new(),
            stock: 2,
        }
    }

    async fn synced<R: RemoteCart>(remote: R) -> SyncedCart<MemoryStorage, R> {
        let cart = CartStore::load(MemoryStorage::new()).await.unwrap();
        SyncedCart::new(cart, remote)
    }

    #[tokio::test]
    async fn test_add_reports_both_layers() {
        let mut synced = synced(NoRemote).await;

        let MutationOutcome { line, totals, remote } =
            synced.add_item(&item(1)).await.unwrap();

        assert_eq!(line.unwrap().quantity, 1);
        assert_eq!(totals.item_count, 1);
        assert_eq!(remote, RemoteOutcome::Completed);
    }

    #[tokio::test]
    async fn test_remote_failure_keeps_local_mutation() {
        let mut synced = synced(DownRemote).await;

        let outcome = synced.add_item(&item(1)).await.unwrap();

        assert!(matches!(outcome.remote, RemoteOutcome::Failed(_)));
        assert_eq!(synced.cart().lines().len(), 1);
        assert_eq!(outcome.totals.item_count, 1);
    }

    #[tokio::test]
    async fn test_decrement_never_attempts_remote() {
        let mut synced = synced(DownRemote).await;
        synced.add_item(&item(1)).await.unwrap();
        synced.add_item(&item(1)).await.unwrap();

        let outcome = synced.decrement_or_remove(1).await.unwrap();

        assert_eq!(outcome.remote, RemoteOutcome::NotAttempted);
        assert_eq!(outcome.line.unwrap().quantity, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unresponsive_remote_does_not_block_mutations() {
        let mut synced = synced(HangingRemote).await;

        let outcome = synced.add_item(&item(1)).await.unwrap();
        assert!(matches!(outcome.remote, RemoteOutcome::Failed(_)));
        assert_eq!(synced.cart().lines().len(), 1);

        let outcome = synced.remove_completely(1).await.unwrap();
        assert!(matches!(outcome.remote, RemoteOutcome::Failed(_)));
        assert!(synced.cart().lines().is_empty());
    }

    #[tokio::test]
    async fn test_clear_is_local_only() {
        let mut synced = synced(DownRemote).await;
        synced.add_item(&item(1)).await.unwrap();
        synced.add_item(&item(2)).await.unwrap();

        let outcome = synced.clear().await.unwrap();

        assert_eq!(outcome.remote, RemoteOutcome::NotAttempted);
        assert!(synced.cart().lines().is_empty());
        assert_eq!(outcome.totals.item_count, 0);
    }

    #[tokio::test]
    async fn test_remove_with_remote_down_is_local_only() {
        let mut synced = synced(DownRemote).await;
        synced.add_item(&item(4)).await.unwrap();

        let outcome = synced.remove_completely(4).await.unwrap();

        assert!(matches!(outcome.remote, RemoteOutcome::Failed(_)));
        assert!(synced.cart().lines().is_empty());
        assert_eq!(outcome.totals.item_count, 0);
    }
}
