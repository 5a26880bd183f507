//! Thread-shareable handle to a hospital.

use std::sync::{Arc, RwLock};

use medrec_core::{DomainError, DomainResult};

use crate::hospital::Hospital;

/// Cloneable handle that serializes access to one hospital.
///
/// Each `write` closure runs under a single write lock, so a check and the
/// mutation it guards (e.g. minimum staff count, then delete) cannot interleave
/// with another writer.
#[derive(Debug, Clone)]
pub struct SharedHospital {
    inner: Arc<RwLock<Hospital>>,
}

impl SharedHospital {
    pub fn new(hospital: Hospital) -> Self {
        Self {
            inner: Arc::new(RwLock::new(hospital)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&Hospital) -> R) -> DomainResult<R> {
        let guard = self
            .inner
            .read()
            .map_err(|_| DomainError::conflict("hospital lock poisoned"))?;
        Ok(f(&guard))
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Hospital) -> DomainResult<R>) -> DomainResult<R> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("hospital lock poisoned"))?;
        f(&mut guard)
    }
}
