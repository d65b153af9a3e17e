//! Multi-index store
//!
//! A primary map (primary key -> record) plus one unique secondary index per
//! configured name (secondary key -> primary key), maintained as one unit.
//!
//! # Design
//!
//! - One RwLock over the whole state: the consistency invariant spans the
//!   primary map and every index, so they can never be locked separately
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Indexes are addressed by schema position, names are resolved once
//!
//! # Invariants
//!
//! After every completed operation:
//! - every stored record's secondary key `i` maps back to its primary key in index `i`
//! - no index maps a secondary key to more than one primary key
//! - no index holds an entry for a primary key that is not stored
//!
//! `set` validates arity and conflicts against all indexes before touching
//! any of them, so a rejected `set` leaves the state unchanged.

use multikey_core::{IndexSchema, Record, Result, SecondaryKeys, StoreError};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::Hash;

/// State guarded by the store lock
struct StoreState<PK, V, SK> {
    /// Primary key -> record
    records: FxHashMap<PK, Record<PK, V, SK>>,
    /// One map per schema position: secondary key -> primary key
    indexes: Vec<FxHashMap<SK, PK>>,
}

impl<PK, V, SK> StoreState<PK, V, SK>
where
    PK: Eq + Hash + Clone,
    SK: Eq + Hash + Clone,
{
    fn with_capacity(index_count: usize, capacity: usize) -> Self {
        Self {
            records: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            indexes: (0..index_count)
                .map(|_| FxHashMap::with_capacity_and_hasher(capacity, Default::default()))
                .collect(),
        }
    }

    /// Remove a record and every index entry it owns
    fn remove(&mut self, pk: &PK) -> Option<Record<PK, V, SK>> {
        let record = self.records.remove(pk)?;
        for (index, sk) in self.indexes.iter_mut().zip(record.secondary_keys.iter()) {
            index.remove(sk);
        }
        Some(record)
    }
}

/// In-memory store keyed by a primary key with unique secondary indexes
///
/// Type parameters:
/// - `PK`: primary key
/// - `V`: stored value
/// - `N`: secondary index name
/// - `SK`: secondary key value
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - reads (`get`, `get_by_secondary_key`, `keys`, ...) share the lock
/// - writes (`set`, `delete`, `delete_by_secondary_key`, `clear`) hold it exclusively
/// - collection accessors return owned copies, never views into the state
///
/// # Example
///
/// ```
/// use multikey_storage::MultiIndexStore;
///
/// let store: MultiIndexStore<u64, &str, &str, &str> =
///     MultiIndexStore::new(["email", "username"]).unwrap();
///
/// store.set(1, "john", ["john@example.com", "john123"]).unwrap();
///
/// assert_eq!(store.get(&1), Some("john"));
/// assert_eq!(
///     store.get_by_secondary_key(&"email", &"john@example.com").unwrap(),
///     Some("john")
/// );
/// assert!(store.set(2, "jane", ["john@example.com", "jane123"]).is_err());
/// ```
pub struct MultiIndexStore<PK, V, N, SK> {
    schema: IndexSchema<N>,
    state: RwLock<StoreState<PK, V, SK>>,
}

impl<PK, V, N, SK> MultiIndexStore<PK, V, N, SK>
where
    PK: Eq + Hash + Clone,
    N: Eq + Hash + Clone,
    SK: Eq + Hash + Clone,
{
    /// Create an empty store with the given secondary index names
    ///
    /// Fails with `DuplicateIndexName` naming the first repeated name; no
    /// store is produced in that case.
    pub fn new(index_names: impl IntoIterator<Item = N>) -> Result<Self, PK, N, SK> {
        Self::with_capacity(index_names, 0)
    }

    /// Create an empty store with pre-allocated capacity
    ///
    /// `capacity` pre-sizes the primary map and every secondary index.
    pub fn with_capacity(
        index_names: impl IntoIterator<Item = N>,
        capacity: usize,
    ) -> Result<Self, PK, N, SK> {
        let schema = IndexSchema::new::<PK, SK>(index_names)?;
        let state = StoreState::with_capacity(schema.len(), capacity);

        tracing::debug!(
            indexes = schema.len(),
            capacity,
            "created multi-index store"
        );

        Ok(Self {
            schema,
            state: RwLock::new(state),
        })
    }

    /// Schema position of `index`, or `UnknownIndexName`
    fn index_position(&self, index: &N) -> Result<usize, PK, N, SK> {
        self.schema.require(index)
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Store `value` under `pk` with one secondary key per configured index
    ///
    /// Secondary keys are matched to index names by position. Returns the
    /// previous value if `pk` was already stored.
    ///
    /// # Errors
    ///
    /// - `ArityMismatch` if the number of secondary keys differs from the
    ///   number of indexes
    /// - `SecondaryKeyConflict` if any secondary key already belongs to a
    ///   different primary key
    ///
    /// On error nothing is modified.
    pub fn set(
        &self,
        pk: PK,
        value: V,
        secondary_keys: impl IntoIterator<Item = SK>,
    ) -> Result<Option<V>, PK, N, SK> {
        let secondary_keys: SecondaryKeys<SK> = secondary_keys.into_iter().collect();
        if secondary_keys.len() != self.schema.len() {
            return Err(StoreError::ArityMismatch {
                expected: self.schema.len(),
                actual: secondary_keys.len(),
            });
        }

        let mut state = self.state.write();

        for (position, sk) in secondary_keys.iter().enumerate() {
            if let Some(owner) = state.indexes[position].get(sk) {
                if *owner != pk {
                    return Err(StoreError::SecondaryKeyConflict {
                        index: self.schema.names()[position].clone(),
                        existing: owner.clone(),
                        new: pk,
                        key: sk.clone(),
                    });
                }
            }
        }

        // Validation passed; from here on every step is infallible.
        let state = &mut *state;
        let previous = state.records.remove(&pk);
        if let Some(old) = &previous {
            for (position, old_sk) in old.secondary_keys.iter().enumerate() {
                if *old_sk != secondary_keys[position] {
                    state.indexes[position].remove(old_sk);
                }
            }
        }

        for (index, sk) in state.indexes.iter_mut().zip(secondary_keys.iter()) {
            index.insert(sk.clone(), pk.clone());
        }

        state.records.insert(
            pk.clone(),
            Record {
                primary_key: pk,
                value,
                secondary_keys,
            },
        );

        tracing::trace!(
            replaced = previous.is_some(),
            records = state.records.len(),
            "set record"
        );

        Ok(previous.map(Record::into_value))
    }

    /// Delete the record stored under `pk`
    ///
    /// Removes exactly the index entries the record owns. Returns the removed
    /// value, or `None` if `pk` was not stored.
    pub fn delete(&self, pk: &PK) -> Option<V> {
        let removed = self.state.write().remove(pk);
        tracing::trace!(removed = removed.is_some(), "delete record");
        removed.map(Record::into_value)
    }

    /// Delete the record owning `key` in the index named `index`
    ///
    /// Returns the removed value, or `None` if no record owns `key`.
    ///
    /// # Errors
    ///
    /// `UnknownIndexName` if `index` is not configured.
    pub fn delete_by_secondary_key(&self, index: &N, key: &SK) -> Result<Option<V>, PK, N, SK> {
        let position = self.index_position(index)?;
        let mut state = self.state.write();

        let pk = match state.indexes[position].get(key) {
            Some(pk) => pk.clone(),
            None => return Ok(None),
        };

        let removed = state.remove(&pk);
        tracing::trace!(
            index = position,
            removed = removed.is_some(),
            "delete record by secondary key"
        );
        Ok(removed.map(Record::into_value))
    }

    /// Remove every record and empty every index
    ///
    /// The configured index names are preserved.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let dropped = state.records.len();
        state.records.clear();
        for index in state.indexes.iter_mut() {
            index.clear();
        }
        tracing::debug!(dropped, "cleared multi-index store");
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    /// Check if a record is stored under `pk`
    pub fn contains(&self, pk: &PK) -> bool {
        self.state.read().records.contains_key(pk)
    }

    /// Resolve `key` in the index named `index` to its primary key
    ///
    /// # Errors
    ///
    /// `UnknownIndexName` if `index` is not configured.
    pub fn primary_key_by_secondary_key(&self, index: &N, key: &SK) -> Result<Option<PK>, PK, N, SK> {
        let position = self.index_position(index)?;
        Ok(self.state.read().indexes[position].get(key).cloned())
    }

    /// Check if some record owns `key` in the index named `index`
    ///
    /// # Errors
    ///
    /// `UnknownIndexName` if `index` is not configured.
    pub fn contains_secondary_key(&self, index: &N, key: &SK) -> Result<bool, PK, N, SK> {
        let position = self.index_position(index)?;
        Ok(self.state.read().indexes[position].contains_key(key))
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    /// Check if no records are stored
    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }

    /// All stored primary keys, unordered
    pub fn keys(&self) -> Vec<PK> {
        self.state.read().records.keys().cloned().collect()
    }

    /// Configured index names in construction order
    pub fn secondary_index_names(&self) -> Vec<N> {
        self.schema.names().to_vec()
    }

    /// Number of secondary keys every `set` must supply
    pub fn secondary_key_count(&self) -> usize {
        self.schema.len()
    }

    /// All secondary keys currently present in the index named `index`, unordered
    ///
    /// # Errors
    ///
    /// `UnknownIndexName` if `index` is not configured.
    pub fn secondary_key_values(&self, index: &N) -> Result<Vec<SK>, PK, N, SK> {
        let position = self.index_position(index)?;
        Ok(self.state.read().indexes[position].keys().cloned().collect())
    }

    /// Point-in-time copy of the index named `index` (secondary key -> primary key)
    ///
    /// # Errors
    ///
    /// `UnknownIndexName` if `index` is not configured.
    pub fn index_snapshot(&self, index: &N) -> Result<HashMap<SK, PK>, PK, N, SK> {
        let position = self.index_position(index)?;
        Ok(self.state.read().indexes[position]
            .iter()
            .map(|(sk, pk)| (sk.clone(), pk.clone()))
            .collect())
    }
}

impl<PK, V, N, SK> MultiIndexStore<PK, V, N, SK>
where
    PK: Eq + Hash + Clone,
    V: Clone,
    N: Eq + Hash + Clone,
    SK: Eq + Hash + Clone,
{
    /// Get the value stored under `pk`
    #[inline]
    pub fn get(&self, pk: &PK) -> Option<V> {
        self.state
            .read()
            .records
            .get(pk)
            .map(|record| record.value.clone())
    }

    /// Get the record stored under `pk`, including its secondary keys
    pub fn get_record(&self, pk: &PK) -> Option<Record<PK, V, SK>> {
        self.state.read().records.get(pk).cloned()
    }

    /// Get the value of the record owning `key` in the index named `index`
    ///
    /// # Errors
    ///
    /// `UnknownIndexName` if `index` is not configured.
    pub fn get_by_secondary_key(&self, index: &N, key: &SK) -> Result<Option<V>, PK, N, SK> {
        let position = self.index_position(index)?;
        let state = self.state.read();
        Ok(state.indexes[position]
            .get(key)
            .and_then(|pk| state.records.get(pk))
            .map(|record| record.value.clone()))
    }

    /// Point-in-time copy of every stored value keyed by primary key
    pub fn get_all(&self) -> HashMap<PK, V> {
        self.state
            .read()
            .records
            .iter()
            .map(|(pk, record)| (pk.clone(), record.value.clone()))
            .collect()
    }
}

impl<PK, V, N, SK> std::fmt::Debug for MultiIndexStore<PK, V, N, SK>
where
    N: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiIndexStore")
            .field("indexes", &self.schema.names())
            .field("records", &self.state.read().records.len())
            .finish()
    }
}
