//! Store configuration: the three initial capacities a `GraphStore` is
//! built with.
//!
//! The core's semantics never depend on these values — they only affect
//! how many times the associative maps resize before settling. Defaults
//! reproduce the original C tool's compile-time constants.

/// Initial capacities for a [`crate::store::GraphStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Initial capacity of the entity name -> id map.
    pub entity_capacity: usize,
    /// Initial capacity of the relation name -> holder map.
    pub relation_capacity: usize,
    /// Initial capacity of each relation's inner origin-set maps.
    pub inner_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            entity_capacity: 1 << 21,
            relation_capacity: 512,
            inner_capacity: 256,
        }
    }
}
