//! The in-memory accommodation store.
//!
//! Owns every accommodation record for the lifetime of the process. The store itself is
//! plain synchronous data; callers share it behind a lock (see `AppState`) so that all
//! mutations are serialized.

use crate::domain::model::{Accommodation, AccommodationFields};
use serde_json::Number;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Accommodation {0} not found")]
    NotFound(u64),
}

/// Ordered collection of accommodations addressed by a monotonically assigned id.
#[derive(Debug)]
pub struct AccommodationStore {
    records: Vec<Accommodation>,
    next_id: u64,
}

impl AccommodationStore {
    /// Creates an empty store; the first created record gets id 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store pre-populated with the sample accommodations.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        for (name, location, price) in [
            ("Hotel Sunshine", "New York", 120),
            ("Ocean View Resort", "California", 200),
            ("Mountain Retreat", "Colorado", 150),
        ] {
            store.create(AccommodationFields {
                name: Some(name.to_string()),
                location: Some(location.to_string()),
                price: Some(Number::from(price)),
                description: None,
            });
        }
        store
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Accommodation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u64) -> Result<&Accommodation, StoreError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Appends a new record built from `fields` and returns a copy of it.
    ///
    /// Ids come from a counter rather than the collection size, so an id freed by
    /// `delete` is never handed out again.
    pub fn create(&mut self, fields: AccommodationFields) -> Accommodation {
        let id = self.next_id;
        self.next_id += 1;

        let record = Accommodation::from_fields(id, fields);
        self.records.push(record.clone());
        record
    }

    /// Applies the supplied fields to the record with `id` and returns the updated copy.
    pub fn update(
        &mut self,
        id: u64,
        fields: AccommodationFields,
    ) -> Result<Accommodation, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply(fields);
        Ok(record.clone())
    }

    /// Removes the record with `id` and returns it. Remaining ids are left untouched.
    pub fn delete(&mut self, id: u64) -> Result<Accommodation, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.records.remove(index))
    }
}

impl Default for AccommodationStore {
    fn default() -> Self {
        Self::new()
    }
}
