//! Secondary index schema
//!
//! The ordered, immutable list of secondary index names a store is built
//! with. Position `i` in the schema is the position of the secondary key
//! value every `set` must supply for that index.

use crate::error::{Result, StoreError};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Ordered set of secondary index names with O(1) name lookup
#[derive(Debug, Clone)]
pub struct IndexSchema<N> {
    names: Vec<N>,
    positions: FxHashMap<N, usize>,
}

impl<N> IndexSchema<N>
where
    N: Eq + Hash + Clone,
{
    /// Build a schema from index names, rejecting the first repeated name.
    ///
    /// Validation completes before the schema is returned, so a failed
    /// construction leaves nothing behind.
    pub fn new<PK, SK>(names: impl IntoIterator<Item = N>) -> Result<Self, PK, N, SK> {
        let names: Vec<N> = names.into_iter().collect();
        let mut positions =
            FxHashMap::with_capacity_and_hasher(names.len(), Default::default());

        for (position, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), position).is_some() {
                return Err(StoreError::DuplicateIndexName { name: name.clone() });
            }
        }

        Ok(Self { names, positions })
    }

    /// Position of `name`, or `None` if it is not configured
    #[inline]
    pub fn position(&self, name: &N) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of `name`, or `UnknownIndexName`
    pub fn require<PK, SK>(&self, name: &N) -> Result<usize, PK, N, SK> {
        self.position(name)
            .ok_or_else(|| StoreError::UnknownIndexName { name: name.clone() })
    }

    /// Check if `name` is configured
    pub fn contains(&self, name: &N) -> bool {
        self.positions.contains_key(name)
    }
}

impl<N> IndexSchema<N> {
    /// Configured names in construction order
    pub fn names(&self) -> &[N] {
        &self.names
    }

    /// Name at `position`
    pub fn name(&self, position: usize) -> Option<&N> {
        self.names.get(position)
    }

    /// Number of secondary indexes (the arity of every `set`)
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no secondary indexes are configured
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
