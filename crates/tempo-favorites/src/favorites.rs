//! Favorite districts, unique by id, insertion order preserved.

use tempo_districts::District;

use crate::store::KeyValueStore;

/// Storage key holding the JSON-encoded favorites array.
pub const FAVORITES_STORAGE_KEY: &str = "weather-app-favorites";

/// Favorites collection with write-through persistence.
///
/// The in-memory collection is the source of truth for the session; a
/// persistence failure is logged and does not roll anything back.
pub struct FavoritesStore<S> {
    store: S,
    favorites: Vec<District>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from the store. A missing or unparsable value yields
    /// an empty collection.
    pub fn load(store: S) -> Self {
        let favorites = match store.get(FAVORITES_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(favorites) => favorites,
                Err(e) => {
                    tracing::warn!("Stored favorites are corrupt, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load favorites, starting empty: {}", e);
                Vec::new()
            }
        };

        Self { store, favorites }
    }

    /// Favorite districts in insertion order.
    pub fn favorites(&self) -> &[District] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Membership test by district id.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|d| d.id == id)
    }

    /// Add a district; no-op when its id is already present.
    pub fn add(&mut self, district: District) {
        if self.is_favorite(&district.id) {
            return;
        }
        self.favorites.push(district);
        self.persist();
    }

    /// Remove a district by id; no-op when absent.
    pub fn remove(&mut self, id: &str) {
        let before = self.favorites.len();
        self.favorites.retain(|d| d.id != id);
        if self.favorites.len() != before {
            self.persist();
        }
    }

    /// Add when absent, remove when present.
    pub fn toggle(&mut self, district: District) {
        if self.is_favorite(&district.id) {
            self.remove(&district.id);
        } else {
            self.add(district);
        }
    }

    /// Write the whole collection back to the store, best-effort.
    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.favorites) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode favorites: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(FAVORITES_STORAGE_KEY, &encoded) {
            tracing::error!("Failed to save favorites: {}", e);
        }
    }
}
