//! Keyed entity storage boundary.
//!
//! `CrudRepository` is the capability set (create/read/update/delete/list) an
//! aggregate uses to persist one entity family. `InMemoryRepository` is the
//! only implementation; its key extraction is a constructor parameter so the
//! same store serves every family.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::{InMemoryRepository, KeyFn};
pub use r#trait::CrudRepository;
