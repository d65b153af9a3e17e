//! Builder for configuring a [`MultiIndexStore`]

use crate::store::MultiIndexStore;
use multikey_core::Result;
use std::hash::Hash;

/// Builder for [`MultiIndexStore`]
///
/// Collects secondary index names in declaration order plus an optional
/// capacity hint. Name validation happens in [`build`](Self::build).
///
/// # Example
///
/// ```
/// use multikey_storage::MultiIndexStoreBuilder;
/// use multikey_storage::MultiIndexStore;
///
/// let store: MultiIndexStore<u64, String, &str, String> = MultiIndexStoreBuilder::new()
///     .index("email")
///     .index("username")
///     .capacity(1024)
///     .build()
///     .unwrap();
///
/// assert_eq!(store.secondary_index_names(), vec!["email", "username"]);
/// ```
#[derive(Debug, Clone)]
pub struct MultiIndexStoreBuilder<N> {
    index_names: Vec<N>,
    capacity: usize,
}

impl<N> MultiIndexStoreBuilder<N> {
    /// Create a builder with no indexes and no capacity hint
    pub fn new() -> Self {
        Self {
            index_names: Vec::new(),
            capacity: 0,
        }
    }

    /// Append a secondary index
    pub fn index(mut self, name: N) -> Self {
        self.index_names.push(name);
        self
    }

    /// Append several secondary indexes, in order
    pub fn indexes(mut self, names: impl IntoIterator<Item = N>) -> Self {
        self.index_names.extend(names);
        self
    }

    /// Pre-size the primary map and every index for `capacity` records
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the store
    ///
    /// Fails with `DuplicateIndexName` if an index name was given twice.
    pub fn build<PK, V, SK>(self) -> Result<MultiIndexStore<PK, V, N, SK>, PK, N, SK>
    where
        PK: Eq + Hash + Clone,
        N: Eq + Hash + Clone,
        SK: Eq + Hash + Clone,
    {
        MultiIndexStore::with_capacity(self.index_names, self.capacity)
    }
}

impl<N> Default for MultiIndexStoreBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
