use thiserror::Error;
use tracing::info;

use super::data::demo_needs;
use super::models::NeedRecord;
use crate::common::NeedId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("need {0} is already registered")]
    DuplicateId(NeedId),
}

/// In-memory store of registered needs, in insertion order.
///
/// Owned by whoever drives the board; there is no global instance. Records are
/// append-only: no update or removal exists.
#[derive(Debug, Clone, Default)]
pub struct NeedRegistry {
    records: Vec<NeedRecord>,
}

impl NeedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the demo needs shown on a fresh page.
    pub fn seeded() -> Self {
        Self {
            records: demo_needs(),
        }
    }

    pub fn add(&mut self, record: NeedRecord) -> Result<NeedId, RegistryError> {
        if self.get(record.id).is_some() {
            return Err(RegistryError::DuplicateId(record.id));
        }

        let id = record.id;
        info!(
            need_id = %id,
            institution = %record.institution,
            category = %record.category,
            "Need registered"
        );
        self.records.push(record);
        Ok(id)
    }

    pub fn all(&self) -> &[NeedRecord] {
        &self.records
    }

    pub fn get(&self, id: NeedId) -> Option<&NeedRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
