//! # desk-store
//!
//! Persistence and state for the newsdesk article collection.
//!
//! - [`keyed`]: the persistent keyed store contract with in-memory and
//!   file-backed implementations, plus typed load/save helpers that fall back
//!   to a default on unreadable data.
//! - [`ArticleStore`]: owns the canonical collection, mirrors it to a keyed
//!   store after every mutation, and notifies subscribed listeners.
//! - [`ArticleOps`]: the seam consumers program against.

pub mod error;
pub mod keyed;
pub mod ops;
pub mod store;

pub use error::StoreError;
pub use keyed::{FileKeyedStore, KeyedStore, MemoryKeyedStore};
pub use ops::ArticleOps;
pub use store::{ArticleStore, Listener, Navigator, SubscriptionId};
