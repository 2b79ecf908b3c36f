//! In-memory record store / 内存记录存储
//!
//! Process-wide mapping from content hash to record, guarded by a single
//! read-write lock. Inserts and deletes take the write lock; lookups and
//! listings take the read lock, so readers never observe a half-applied
//! mutation. Nothing is persisted across restarts.

use chrono::{SecondsFormat, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::analysis;
use crate::error::ServiceError;
use crate::filter;
use crate::models::{FilterConditions, StringRecord};

#[derive(Default)]
pub struct StringStore {
    records: RwLock<HashMap<String, StringRecord>>,
}

impl StringStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a new string / 插入新字符串
    ///
    /// The content hash is the primary key, so inserting an already-stored
    /// value fails with Duplicate and leaves the store unchanged.
    pub fn insert(&self, value: &str) -> Result<StringRecord, ServiceError> {
        let hash = analysis::compute_hash(value);

        let mut records = self.records.write();
        if records.contains_key(&hash) {
            return Err(ServiceError::Duplicate);
        }

        let record = StringRecord {
            id: hash.clone(),
            value: value.to_string(),
            properties: analysis::analyze(value),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        };
        records.insert(hash, record.clone());
        Ok(record)
    }

    /// Look up a record by its raw value / 按原始值查找记录
    pub fn get_by_value(&self, value: &str) -> Result<StringRecord, ServiceError> {
        let records = self.records.read();
        records
            .values()
            .find(|record| record.value == value)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound("String does not exist in database".to_string()))
    }

    /// Delete a record by its raw value / 按原始值删除记录
    pub fn delete_by_value(&self, value: &str) -> Result<(), ServiceError> {
        let mut records = self.records.write();
        let key = records
            .values()
            .find(|record| record.value == value)
            .map(|record| record.id.clone());

        match key {
            Some(key) => {
                records.remove(&key);
                Ok(())
            }
            None => Err(ServiceError::NotFound(format!(
                "String {} not found!",
                value
            ))),
        }
    }

    /// List records matching the conditions / 列出满足条件的记录
    ///
    /// Empty conditions return everything. Iteration order of the underlying
    /// map is not a contract.
    pub fn list(&self, conditions: &FilterConditions) -> Vec<StringRecord> {
        let records: Vec<StringRecord> = self.records.read().values().cloned().collect();
        filter::apply_filters(records, conditions)
    }

    /// Number of stored records / 已存储记录数
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
