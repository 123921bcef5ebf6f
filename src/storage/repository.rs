//! Generic JSON-backed table
//!
//! Each entity lives in its own `data/<entity>.json` file holding a list of
//! rows. Rows are kept in memory in a `BTreeMap` keyed by surrogate id, so
//! iteration order is always ascending id.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::RecordId;

use super::file_io::{read_json, write_json_atomic};
use super::records::StoredRecord;

/// Serializable file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableFile<Row> {
    rows: Vec<Row>,
}

impl<Row> Default for TableFile<Row> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

/// Repository for one entity type
pub struct Repository<R: StoredRecord> {
    path: PathBuf,
    data: RwLock<BTreeMap<R::Id, R>>,
}

impl<R: StoredRecord> Repository<R> {
    /// Create a new, empty repository bound to a file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> LedgerResult<RwLockReadGuard<'_, BTreeMap<R::Id, R>>> {
        self.data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, BTreeMap<R::Id, R>>> {
        self.data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load rows from disk, replacing whatever is in memory
    pub fn load(&self) -> LedgerResult<()> {
        let file_data: TableFile<R::Row> = read_json(&self.path)?;

        let mut data = self.write()?;
        data.clear();
        for row in file_data.rows {
            let record = R::from_row(row)?;
            data.insert(record.id(), record);
        }

        debug!(entity = R::ENTITY, rows = data.len(), "loaded table");
        Ok(())
    }

    /// Save rows to disk
    pub fn save(&self) -> LedgerResult<()> {
        let data = self.read()?;
        let file_data = TableFile {
            rows: data.values().map(R::to_row).collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a record by id
    pub fn get(&self, id: R::Id) -> LedgerResult<Option<R>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// Get all records in ascending id order
    pub fn get_all(&self) -> LedgerResult<Vec<R>> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Get all records matching a predicate, in ascending id order
    pub fn find<F>(&self, predicate: F) -> LedgerResult<Vec<R>>
    where
        F: Fn(&R) -> bool,
    {
        Ok(self.read()?.values().filter(|r| predicate(r)).cloned().collect())
    }

    /// Whether any record matches a predicate
    pub fn any<F>(&self, predicate: F) -> LedgerResult<bool>
    where
        F: Fn(&R) -> bool,
    {
        Ok(self.read()?.values().any(predicate))
    }

    /// Insert a new record, assigning the next surrogate id
    pub fn insert(&self, mut record: R) -> LedgerResult<R> {
        let mut data = self.write()?;
        let next = data.keys().next_back().map_or(1, |id| id.raw() + 1);
        record.assign_id(R::Id::from_raw(next));
        data.insert(record.id(), record.clone());
        Ok(record)
    }

    /// Replace an existing record
    pub fn update(&self, record: R) -> LedgerResult<()> {
        let mut data = self.write()?;
        match data.get_mut(&record.id()) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(LedgerError::NotFound {
                entity_type: R::ENTITY,
                identifier: record.id().to_string(),
            }),
        }
    }

    /// Delete a record
    pub fn delete(&self, id: R::Id) -> LedgerResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    /// Delete every record matching a predicate, returning the removed ids
    pub fn delete_where<F>(&self, predicate: F) -> LedgerResult<Vec<R::Id>>
    where
        F: Fn(&R) -> bool,
    {
        let mut data = self.write()?;
        let doomed: Vec<R::Id> = data
            .values()
            .filter(|r| predicate(r))
            .map(|r| r.id())
            .collect();
        for id in &doomed {
            data.remove(id);
        }
        Ok(doomed)
    }

    /// Check if a record exists
    pub fn exists(&self, id: R::Id) -> LedgerResult<bool> {
        Ok(self.read()?.contains_key(&id))
    }

    /// Count records
    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.read()?.len())
    }
}
