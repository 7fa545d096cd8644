//! Generic in-memory record list

use std::sync::RwLock;

use crate::errors::PlatformError;

/// A record addressable by id
pub trait Record {
    /// Kind name used in error messages
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Ordered, lock-guarded list of records.
///
/// Newest records are usually inserted at the front, matching the order the
/// dashboard lists them in.
pub struct Records<T> {
    entries: RwLock<Vec<T>>,
}

impl<T: Record> Records<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    /// Create a list holding `entries` in order
    pub fn with_entries(entries: Vec<T>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Run `f` against the current entries
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        f(&entries)
    }

    /// Insert a record at the front
    pub fn insert_front(&self, record: T) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(0, record);
    }

    /// Append a record at the back
    pub fn push(&self, record: T) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.push(record);
    }

    /// Mutate the record with `id` in place
    pub fn update<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut T) -> Result<R, PlatformError>,
    ) -> Result<R, PlatformError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let entry = entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| PlatformError::not_found(T::KIND, id))?;
        f(entry)
    }

    /// Remove the record with `id`
    pub fn remove(&self, id: &str) -> Result<T, PlatformError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let index = entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| PlatformError::not_found(T::KIND, id))?;
        Ok(entries.remove(index))
    }

    /// Check whether a record with `id` exists
    pub fn contains(&self, id: &str) -> bool {
        self.read(|entries| entries.iter().any(|e| e.id() == id))
    }

    /// Get list size
    pub fn len(&self) -> usize {
        self.read(|entries| entries.len())
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Record> Default for Records<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + Clone> Records<T> {
    /// Get a copy of the record with `id`
    pub fn get(&self, id: &str) -> Result<T, PlatformError> {
        self.read(|entries| entries.iter().find(|e| e.id() == id).cloned())
            .ok_or_else(|| PlatformError::not_found(T::KIND, id))
    }

    /// Copy all records
    pub fn list(&self) -> Vec<T> {
        self.read(|entries| entries.to_vec())
    }

    /// Copy the records matching `predicate`
    pub fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read(|entries| entries.iter().filter(|e| predicate(e)).cloned().collect())
    }
}
