//! Favorites
//!
//! A set of identifiers persisted in a key-value store under one fixed key.
//! The stored value is a JSON array of integers, read in full on load and
//! rewritten in full on every toggle.

#[cfg(feature = "native")]
mod file;
mod store;

#[cfg(feature = "native")]
pub use file::JsonFileStore;
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreResult};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::PokemonId;

/// Key the favorites list is stored under
pub const FAVORITES_KEY: &str = "favorites";

/// Set of favorite identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSet(BTreeSet<PokemonId>);

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PokemonId) -> bool {
        self.0.contains(&id)
    }

    /// Flip membership; returns true when `id` is now a favorite
    pub fn toggle(&mut self, id: PokemonId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PokemonId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<PokemonId> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = PokemonId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Favorites backed by a key-value store
pub struct FavoritesStore<K> {
    backend: K,
    set: FavoritesSet,
}

impl<K: KeyValueStore> FavoritesStore<K> {
    /// Load the stored set
    ///
    /// A missing, unreadable or malformed entry yields an empty set.
    pub fn load(backend: K) -> Self {
        let set = match backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<FavoritesSet>(&raw) {
                Ok(set) => set,
                Err(e) => {
                    tracing::warn!("Ignoring malformed favorites entry: {}", e);
                    FavoritesSet::new()
                }
            },
            Ok(None) => FavoritesSet::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites: {}", e);
                FavoritesSet::new()
            }
        };

        tracing::debug!("Loaded {} favorites", set.len());
        Self { backend, set }
    }

    pub fn set(&self) -> &FavoritesSet {
        &self.set
    }

    pub fn contains(&self, id: PokemonId) -> bool {
        self.set.contains(id)
    }

    /// Flip membership and persist the whole set
    ///
    /// The in-memory flip stands even when the write fails.
    pub fn toggle(&mut self, id: PokemonId) -> StoreResult<bool> {
        let now_favorite = self.set.toggle(id);
        self.persist()?;
        Ok(now_favorite)
    }

    fn persist(&mut self) -> StoreResult<()> {
        let raw = serde_json::to_string(&self.set)?;
        self.backend.set(FAVORITES_KEY, &raw).map_err(|e| {
            tracing::error!("Failed to persist favorites: {}", e);
            e
        })
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut set: FavoritesSet = [4, 7].into_iter().collect();
        let original = set.clone();

        assert!(!set.toggle(4));
        assert_eq!(set, [7].into_iter().collect());

        assert!(set.toggle(4));
        assert_eq!(set, original);
    }

    #[test]
    fn test_store_round_trip_through_backend() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        assert!(store.set().is_empty());

        assert!(store.toggle(25).unwrap());
        assert!(store.toggle(1).unwrap());
        assert_eq!(
            store.backend().get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[1,25]")
        );

        let reloaded = FavoritesStore::load(store.backend().clone());
        assert!(reloaded.contains(1));
        assert!(reloaded.contains(25));
    }

    #[test]
    fn test_reads_legacy_unsorted_list() {
        let mut backend = MemoryStore::new();
        backend.set(FAVORITES_KEY, "[7,4,7]").unwrap();

        let store = FavoritesStore::load(backend);
        assert_eq!(store.set().iter().collect::<Vec<_>>(), vec![4, 7]);
    }

    #[test]
    fn test_malformed_entry_yields_empty_set() {
        let mut backend = MemoryStore::new();
        backend.set(FAVORITES_KEY, "{not json").unwrap();

        let store = FavoritesStore::load(backend);
        assert!(store.set().is_empty());
    }

    #[test]
    fn test_null_entry_yields_empty_set() {
        let mut backend = MemoryStore::new();
        backend.set(FAVORITES_KEY, "null").unwrap();

        let store = FavoritesStore::load(backend);
        assert!(store.set().is_empty());
    }
}
