//! Storage layer for multikey
//!
//! This crate implements the multi-index store:
//! - MultiIndexStore: primary map plus unique secondary indexes behind one RwLock
//! - MultiIndexStoreBuilder: index names and capacity configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod store;

pub use builder::MultiIndexStoreBuilder;
pub use store::MultiIndexStore;
