//! `medrec-core` — domain foundation building blocks.
//!
//! Errors, natural keys, entity/aggregate traits and the generic keyed
//! repository. No IO happens here.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{IdentificationNumber, LicenseNumber, TaxId};
pub use repository::{CrudRepository, InMemoryRepository};
pub use value_object::ValueObject;
