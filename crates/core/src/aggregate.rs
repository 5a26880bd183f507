//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the single entry point for mutations of the entities it
/// owns, and is responsible for the invariants spanning them.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successful mutation; rejected operations leave it
    /// unchanged.
    fn version(&self) -> u64;
}
