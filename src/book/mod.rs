//! In-memory address book.
//!
//! The address book is the single store for contact records. It is an
//! explicitly constructed value handed to the interpreter (no
//! process-wide state), so the command layer and the store are testable
//! in isolation.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::ContactRecord;
use std::collections::BTreeMap;

/// A mapping from contact name to record.
///
/// Each name maps to at most one record. Records iterate in name order,
/// so listings are deterministic.
///
/// Lookup contract: [`AddressBook::find`] reports absence as `None`, not
/// as an error; [`AddressBook::delete`] on an absent name fails with
/// [`DirectoryError::ContactNotFound`].
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: BTreeMap<String, ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, overwriting any existing record
    /// with the same name (last-write-wins). Always succeeds.
    pub fn add_record(&mut self, record: ContactRecord) {
        self.records.insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Case-insensitive substring search over contact names, in name order.
    pub fn search(&self, query: &str) -> Vec<&ContactRecord> {
        let query_lower = query.to_lowercase();
        self.records
            .values()
            .filter(|record| record.name().as_str().to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Remove the record for `name`.
    ///
    /// # Errors
    ///
    /// `DirectoryError::ContactNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<()> {
        match self.records.remove(name) {
            Some(_) => Ok(()),
            None => Err(DirectoryError::ContactNotFound(name.to_string())),
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }
}
