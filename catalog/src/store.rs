//! # Catalog Store
//!
//! In-memory item set, fetched once and read-only afterwards.
//!
//! Search stays in-process: the set is small enough (a few thousand items at
//! most) that a linear pass beats shipping queries to an external engine, and
//! it keeps the matching semantics ours: trimmed, lower-cased substring match
//! over name, kind, and category.

use crate::item::CatalogItem;

#[derive(Default)]
pub struct CatalogStore {
    items: Vec<CatalogItem>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored set in one assignment; no partial state is ever
    /// observable.
    pub fn load(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Case-insensitive substring search over name, kind, and category.
    ///
    /// A blank or whitespace-only query means "no search" and returns the
    /// whole set.
    pub fn search(&self, query: &str) -> Vec<&CatalogItem> {
        search_in(self.items.iter(), query)
    }
}

/// Search over an already-narrowed set, so a facet-filtered slice can be
/// queried without copying it back into a store.
pub fn search_in<'a, I>(items: I, query: &str) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let needle = query.trim().to_lowercase();

    items
        .into_iter()
        .filter(|item| needle.is_empty() || matches_query(item, &needle))
        .collect()
}

fn matches_query(item: &CatalogItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item.kind.to_lowercase().contains(needle)
        || item.category.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::CatalogStore;
    use crate::item::CatalogItem;

    fn item(id: u32, name: &str, kind: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            kind: kind.to_string(),
            brand: String::new(),
            flavor: String::new(),
            life_stage: String::new(),
            breed_size: String::new(),
            price: "100".to_string(),
            discount: None,
            image: String::new(),
            stock: 1,
        }
    }

    fn store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.load(vec![
            item(1, "Golden Retriever", "puppy", "dogs"),
            item(2, "Chew Toy", "toy", "dogs"),
            item(3, "Salmon Kibble", "food", "cats"),
        ]);
        store
    }

    #[test]
    fn test_load_replaces() {
        let mut store = store();
        store.load(vec![item(9, "Parrot", "bird", "birds")]);

        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_none());
        assert_eq!(store.get(9).unwrap().name, "Parrot");
    }

    #[test]
    fn test_search_matches_name_kind_category() {
        let store = store();

        assert_eq!(store.search("retriever").len(), 1);
        assert_eq!(store.search("TOY").len(), 1);
        assert_eq!(store.search("dogs").len(), 2);
    }

    #[test]
    fn test_search_no_match() {
        assert!(store().search("hamster").is_empty());
    }

    #[test]
    fn test_whitespace_query_same_as_empty() {
        let store = store();

        let blank: Vec<u32> = store.search("").iter().map(|i| i.id).collect();
        let spaces: Vec<u32> = store.search("   ").iter().map(|i| i.id).collect();

        assert_eq!(blank, spaces);
        assert_eq!(blank.len(), store.len());
    }
}
