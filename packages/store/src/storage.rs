//! # Record storage
//!
//! [`RecordStorage`] is the durable-storage seam under [`crate::PortfolioStore`]:
//! a flat string key/value interface shaped like the browser's `localStorage`.
//! The store keeps the whole document in one record, so backends never need
//! more than whole-value reads and writes.
//!
//! The interface is synchronous. `write` returning `Ok` means the value has been
//! handed to the durable mechanism; a store operation that returns has already
//! persisted its change.
//!
//! Implementations live in sibling modules: [`crate::MemoryStorage`],
//! `FileStorage` on native targets and `LocalStorage` on the web.

use crate::error::Result;

pub trait RecordStorage {
    /// Read a record. `Ok(None)` when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Create or replace a record.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a record. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
