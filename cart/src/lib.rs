//! # Cart
//!
//! The in-session shopping cart: line items with add-time snapshots of the
//! catalog fields, totals, durable persistence, and best-effort mirroring to
//! the upstream cart API.
//!
//! ## Consistency
//!
//! The local cart is the source of truth for rendering. Every mutation runs
//! in a fixed order: update the line list, persist to durable storage, only
//! then attempt the upstream call. An upstream failure is logged and reported
//! in the mutation outcome; it never rolls back or blocks the local mutation.
//! Eventual consistency is acceptable here, as the upstream cart catches up
//! on the next successful call.
//!
//! ## Storage
//!
//! Two fixed keys, written after every mutation:
//! - `cart`: the JSON-serialized line list
//! - `cartCount`: the stringified item count, so a badge can render without
//!   deserializing the whole cart

pub mod line;
pub mod notify;
pub mod storage;
pub mod store;
pub mod sync;

pub use line::{CartLine, Totals};
pub use store::CartStore;
pub use sync::{MutationOutcome, RemoteOutcome, SyncedCart};
