//! Stored record type
//!
//! A record is the value stored under a primary key together with the
//! secondary key values it currently owns, one per configured index and in
//! schema order.

use smallvec::SmallVec;

/// Inline capacity for secondary key values; most stores carry few indexes
pub const INLINE_SECONDARY_KEYS: usize = 4;

/// Secondary key values of a record, positionally aligned with the schema
pub type SecondaryKeys<SK> = SmallVec<[SK; INLINE_SECONDARY_KEYS]>;

/// A stored value plus the secondary keys that index it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<PK, V, SK> {
    /// Primary key the record is stored under
    pub primary_key: PK,
    /// Stored value
    pub value: V,
    /// Secondary key values, position `i` belongs to index `i`
    pub secondary_keys: SecondaryKeys<SK>,
}

impl<PK, V, SK> Record<PK, V, SK> {
    /// Create a record
    pub fn new(primary_key: PK, value: V, secondary_keys: impl IntoIterator<Item = SK>) -> Self {
        Self {
            primary_key,
            value,
            secondary_keys: secondary_keys.into_iter().collect(),
        }
    }

    /// Secondary key value for the index at `position`
    #[inline]
    pub fn secondary_key(&self, position: usize) -> Option<&SK> {
        self.secondary_keys.get(position)
    }

    /// Consume the record, returning its value
    pub fn into_value(self) -> V {
        self.value
    }
}
