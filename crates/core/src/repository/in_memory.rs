use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

use super::r#trait::CrudRepository;

/// Extracts the natural key of a stored entity.
pub type KeyFn<T, ID> = fn(&T) -> ID;

fn entity_key<T: Entity>(entity: &T) -> T::Id {
    entity.id().clone()
}

/// In-memory keyed store.
///
/// `list_all` yields entities in insertion order. An update keeps the entity's
/// position; a delete followed by a re-create moves it to the end.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T, ID> {
    entity: &'static str,
    key_of: KeyFn<T, ID>,
    entries: HashMap<ID, T>,
    order: Vec<ID>,
}

impl<T, ID> InMemoryRepository<T, ID>
where
    ID: Clone + Eq + Hash + core::fmt::Display,
{
    /// Create an empty repository.
    ///
    /// `entity` names the family in errors and logs (e.g. `"doctor"`).
    pub fn new(entity: &'static str, key_of: KeyFn<T, ID>) -> Self {
        Self {
            entity,
            key_of,
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn contains(&self, id: &ID) -> bool {
        self.entries.contains_key(id)
    }
}

impl<T> InMemoryRepository<T, T::Id>
where
    T: Entity,
{
    /// Create an empty repository keyed by `Entity::id`.
    pub fn keyed_by_id(entity: &'static str) -> Self {
        Self::new(entity, entity_key::<T>)
    }
}

impl<T, ID> CrudRepository<T, ID> for InMemoryRepository<T, ID>
where
    T: Clone,
    ID: Clone + Eq + Hash + core::fmt::Display,
{
    fn create(&mut self, entity: T) -> DomainResult<T> {
        let key = (self.key_of)(&entity);
        if self.entries.contains_key(&key) {
            return Err(DomainError::duplicate_key(self.entity, &key));
        }

        debug!(entity = self.entity, key = %key, "create");
        self.order.push(key.clone());
        self.entries.insert(key, entity.clone());
        Ok(entity)
    }

    fn read_by_id(&self, id: &ID) -> Option<T> {
        self.entries.get(id).cloned()
    }

    fn update(&mut self, entity: T) -> DomainResult<T> {
        let key = (self.key_of)(&entity);
        let Some(slot) = self.entries.get_mut(&key) else {
            return Err(DomainError::not_found(self.entity, &key));
        };

        debug!(entity = self.entity, key = %key, "update");
        *slot = entity.clone();
        Ok(entity)
    }

    fn delete_by_id(&mut self, id: &ID) {
        if self.entries.remove(id).is_some() {
            debug!(entity = self.entity, key = %id, "delete");
            self.order.retain(|k| k != id);
        }
    }

    fn list_all(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k).cloned())
            .collect()
    }

    fn count(&self) -> usize {
        self.entries.len()
    }
}
