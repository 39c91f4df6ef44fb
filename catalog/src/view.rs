use serde::Serialize;

use crate::{
    filter::{Facet, FilterState},
    item::CatalogItem,
    page::{PAGE_SIZE, PageState, PageWindow, total_pages, window},
    store::{CatalogStore, search_in},
};

/// One recomputed slice of the catalog: the visible items plus everything a
/// listing page needs to draw its pagination controls.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub total_items: usize,
    pub current_page: u32,
    pub total_pages: u32,
    pub window: PageWindow,
}

/// One browsing session's knobs: facet selections, price ceiling, search
/// text, and the page cursor.
///
/// Owned and injected rather than ambient; handlers hold a `&mut CatalogView`
/// and an immutable [`CatalogStore`]. Any knob change resets the cursor to
/// page 1; the cursor is re-clamped on every [`CatalogView::visible`] call so
/// it can never point past the filtered set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    filter: FilterState,
    page: PageState,
    query: String,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> u32 {
        self.page.current()
    }

    pub fn toggle_facet(&mut self, facet: Facet, value: &str) {
        self.filter.toggle(facet, value);
        self.page.reset();
    }

    pub fn select_facet(&mut self, facet: Facet, value: &str) {
        self.filter.select(facet, value);
        self.page.reset();
    }

    pub fn set_price_ceiling(&mut self, ceiling: u64) {
        self.filter.set_price_ceiling(ceiling);
        self.page.reset();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page.reset();
    }

    /// The explicit "clear all" action: drops every constraint and goes back
    /// to page 1.
    pub fn clear(&mut self) {
        self.filter.clear();
        self.query.clear();
        self.page.reset();
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page.go_to(page);
    }

    /// Recomputes the visible slice: facet pass, then search, then clamp the
    /// cursor against the new page count and cut the slice.
    ///
    /// `total_items == 0` is the "no matches" state the UI renders
    /// explicitly; it is not an error.
    pub fn visible(&mut self, store: &CatalogStore) -> CatalogPage {
        let filtered = search_in(self.filter.apply(store.items()), &self.query);

        let total_items = filtered.len();
        let total_pages = total_pages(total_items);
        self.page.clamp(total_pages);

        let current_page = self.page.current();
        let start = (current_page as usize - 1) * PAGE_SIZE;
        let items = filtered
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|item| (*item).clone())
            .collect();

        CatalogPage {
            items,
            total_items,
            current_page,
            total_pages,
            window: window(current_page, total_pages),
        }
    }
}
