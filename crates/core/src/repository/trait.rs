use crate::error::DomainResult;

/// Generic keyed repository for one entity family.
///
/// Reads hand out owned copies; callers never hold references into storage.
/// Mutations either fully succeed or leave the stored state unchanged.
pub trait CrudRepository<T, ID> {
    /// Store a new entity.
    ///
    /// Fails with `DomainError::DuplicateKey` if the key is already present; the
    /// previously stored entity is left untouched.
    fn create(&mut self, entity: T) -> DomainResult<T>;

    /// Look up an entity by key. A miss is `None`, not an error.
    fn read_by_id(&self, id: &ID) -> Option<T>;

    /// Replace a stored entity wholesale.
    ///
    /// Fails with `DomainError::NotFound` if the key is not present.
    fn update(&mut self, entity: T) -> DomainResult<T>;

    /// Remove an entity. Removing an absent key is a no-op.
    fn delete_by_id(&mut self, id: &ID);

    /// Snapshot of every stored entity.
    fn list_all(&self) -> Vec<T>;

    /// Number of stored entities.
    fn count(&self) -> usize {
        self.list_all().len()
    }
}
