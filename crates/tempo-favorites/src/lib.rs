//! Favorites persistence for Tempo
//!
//! In-memory favorites collection backed by a key/value store. Memory is
//! the source of truth for the session; the store is written best-effort
//! after every mutation.

pub mod favorites;
pub mod store;

pub use favorites::{FavoritesStore, FAVORITES_STORAGE_KEY};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
