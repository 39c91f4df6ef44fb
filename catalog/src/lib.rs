//! # Catalog
//!
//! Shared catalog model and the browsing engine behind it.
//!
//! The full item set is fetched once from the upstream API at startup and is
//! read-only for the rest of the session. Everything the storefront shows is
//! derived from it: facet filtering, free-text search, and the page cursor.
//!
//! ## Structures
//!
//! - [`item::CatalogItem`]: one purchasable pet or product. Prices arrive as
//!   localized strings with thousands separators ("1,299") and are parsed to
//!   integer units only for comparison and totals.
//! - [`store::CatalogStore`]: the immutable item set plus lookup and search.
//! - [`filter::FilterState`]: selected facet values and the price ceiling.
//! - [`page::PageState`]: the 1-indexed page cursor, 6 items per page.
//! - [`view::CatalogView`]: one browsing session's knobs, recomputed against
//!   the store. Any knob change resets the cursor to page 1.
//! - [`debounce::Debouncer`]: quiescence-window timer for search and price
//!   input so the filter pass only runs once typing stops.
//!
//! ## Notes
//!
//! - Filtering is conjunctive: an item must pass every non-empty facet and
//!   the price ceiling. An empty facet set means "no constraint".
//! - An empty result set is a normal outcome, not an error.

pub mod debounce;
pub mod filter;
pub mod item;
pub mod page;
pub mod remote;
pub mod store;
pub mod view;

pub use item::CatalogItem;
pub use store::CatalogStore;
