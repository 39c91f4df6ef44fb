use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::item::CatalogItem;

/// One filterable dimension of the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Brand,
    Flavor,
    LifeStage,
    BreedSize,
    Kind,
    Category,
}

pub const FACETS: [Facet; 6] = [
    Facet::Brand,
    Facet::Flavor,
    Facet::LifeStage,
    Facet::BreedSize,
    Facet::Kind,
    Facet::Category,
];

impl Facet {
    fn field<'a>(&self, item: &'a CatalogItem) -> &'a str {
        match self {
            Facet::Brand => &item.brand,
            Facet::Flavor => &item.flavor,
            Facet::LifeStage => &item.life_stage,
            Facet::BreedSize => &item.breed_size,
            Facet::Kind => &item.kind,
            Facet::Category => &item.category,
        }
    }
}

/// Selected facet values plus the inclusive price ceiling.
///
/// An empty value set means "no constraint" for that facet. Filtering is
/// conjunctive: an item must pass every facet and the ceiling.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    selected: [BTreeSet<String>; 6],
    price_ceiling: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected: Default::default(),
            price_ceiling: u64::MAX,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_of(&self, facet: Facet) -> &BTreeSet<String> {
        &self.selected[facet as usize]
    }

    fn set_of_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        &mut self.selected[facet as usize]
    }

    /// Adds the value to the facet if absent, removes it if present.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let set = self.set_of_mut(facet);

        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    pub fn select(&mut self, facet: Facet, value: &str) {
        self.set_of_mut(facet).insert(value.to_string());
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        self.set_of(facet)
    }

    pub fn set_price_ceiling(&mut self, ceiling: u64) {
        self.price_ceiling = ceiling;
    }

    pub fn price_ceiling(&self) -> u64 {
        self.price_ceiling
    }

    /// Back to defaults: no facet constraints, ceiling at max.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_unconstrained(&self) -> bool {
        self.price_ceiling == u64::MAX && self.selected.iter().all(BTreeSet::is_empty)
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        if item.price_units() > self.price_ceiling {
            return false;
        }

        FACETS.iter().all(|facet| {
            let set = self.set_of(*facet);
            set.is_empty() || set.contains(facet.field(item))
        })
    }

    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
