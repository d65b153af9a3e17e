//! Core types for multikey
//!
//! This crate defines the types shared by the store implementation:
//! - StoreError: the closed error taxonomy for every store operation
//! - IndexSchema: ordered, validated secondary index names
//! - Record: a stored value plus its secondary key values

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod schema;

pub use error::{Result, StoreError};
pub use record::{Record, SecondaryKeys, INLINE_SECONDARY_KEYS};
pub use schema::IndexSchema;
