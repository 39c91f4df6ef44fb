use catalog::{CatalogItem, item::parse_price};
use serde::{Deserialize, Serialize};

/// One cart row: a catalog id, a quantity, and the display fields copied at
/// add-time so the cart renders even if the catalog set is gone.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub image: String,
    pub stock: u32,
    pub category: String,
    pub quantity: u32,
}

impl CartLine {
    /// A fresh quantity-1 line snapshotting the item's display fields.
    pub fn snapshot(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price.clone(),
            image: item.image.clone(),
            stock: item.stock,
            category: item.category.clone(),
            quantity: 1,
        }
    }

    pub fn price_units(&self) -> u64 {
        parse_price(&self.price).unwrap_or(0)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub subtotal: u64,
    pub item_count: u64,
}

pub fn compute_totals(lines: &[CartLine]) -> Totals {
    Totals {
        subtotal: lines
            .iter()
            .map(|line| line.price_units() * line.quantity as u64)
            .sum(),
        item_count: lines.iter().map(|line| line.quantity as u64).sum(),
    }
}
