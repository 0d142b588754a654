//! Guest-facing shop state: the persistent cart, the set of gifts already
//! ordered, and catalog filtering for the bar and gift shop listings.

pub mod cart;
pub mod catalog;
pub mod kv_store;

pub use cart::{line_key, OrderedGifts, PersistentCart};
pub use catalog::{CatalogFilter, Listed};
pub use kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
