//! # multikey
//!
//! In-memory store keyed by a primary key with a fixed set of unique
//! secondary indexes, kept consistent with the primary map as one atomic unit.
//!
//! ## Quick Start
//!
//! ```
//! use multikey::prelude::*;
//!
//! let users: MultiIndexStore<u64, &str, &str, &str> =
//!     MultiIndexStore::new(["email", "username"])?;
//!
//! users.set(1, "john", ["john@example.com", "john123"])?;
//!
//! assert_eq!(users.get(&1), Some("john"));
//! assert_eq!(users.get_by_secondary_key(&"username", &"john123")?, Some("john"));
//!
//! let err = users
//!     .set(2, "jane", ["john@example.com", "jane123"])
//!     .unwrap_err();
//! assert!(err.is_conflict());
//! # Ok::<(), StoreError<u64, &str, &str>>(())
//! ```
//!
//! ## Guarantees
//!
//! - Every secondary key value maps to at most one primary key per index
//! - A `set` either updates the record and every index, or nothing
//! - Reads never observe a partially applied write
//! - Absence is `None`, never an error

#![warn(missing_docs)]

pub mod prelude;

pub use multikey_core::{IndexSchema, Record, Result, SecondaryKeys, StoreError};
pub use multikey_storage::{MultiIndexStore, MultiIndexStoreBuilder};
