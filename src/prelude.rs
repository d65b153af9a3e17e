//! Convenient imports for multikey.
//!
//! ```
//! use multikey::prelude::*;
//!
//! let store: MultiIndexStore<u64, String, &str, String> =
//!     MultiIndexStoreBuilder::new().index("email").build()?;
//! # Ok::<(), StoreError<u64, &str, String>>(())
//! ```

// Store and configuration
pub use crate::{MultiIndexStore, MultiIndexStoreBuilder};

// Error handling
pub use crate::StoreError;

// Records
pub use crate::Record;
