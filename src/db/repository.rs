//! Repository contract shared by both tables, plus an in-memory implementation.
//!
//! Absence is a value: `find_by_id` answers `Ok(None)` for an unknown id and
//! only `save` on an id with no row reports `AppError::NotFound`.

use crate::db::models::Entity;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[async_trait]
pub trait CrudRepository<E: Entity>: Send + Sync {
    /// Insert when `id` is unset, otherwise overwrite every non-identity field
    /// of the existing row. Returns the entity as persisted.
    async fn save(&self, entity: E) -> Result<E, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, AppError>;

    /// Every row, ascending by id.
    async fn find_all(&self) -> Result<Vec<E>, AppError>;

    /// Remove the row matching the entity's id; no-op when there is none.
    async fn delete(&self, entity: &E) -> Result<(), AppError>;
}

struct MemoryTable<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
}

/// Map-backed repository with the same semantics as the SQLite ones.
pub struct MemoryRepository<E> {
    table: Mutex<MemoryTable<E>>,
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self {
            table: Mutex::new(MemoryTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<E> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryTable<E>> {
        // Each mutation is a single map operation, so a poisoned table is still consistent.
        self.table.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[async_trait]
impl<E: Entity> CrudRepository<E> for MemoryRepository<E> {
    async fn save(&self, entity: E) -> Result<E, AppError> {
        let mut table = self.lock();
        let saved = match entity.id() {
            None => {
                let id = table.next_id;
                table.next_id += 1;
                entity.with_id(id)
            }
            Some(id) if table.rows.contains_key(&id) => entity,
            Some(id) => return Err(AppError::not_found(E::NAME, id)),
        };
        if let Some(id) = saved.id() {
            table.rows.insert(id, saved.clone());
        }
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<E>, AppError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn delete(&self, entity: &E) -> Result<(), AppError> {
        if let Some(id) = entity.id() {
            self.lock().rows.remove(&id);
        }
        Ok(())
    }
}
