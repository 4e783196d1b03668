//! Core state machine for graphmon: the associative map, the dynamic id
//! vector, the entity registry, the relation store, the mutation API, and
//! the report engine.
//!
//! See the crate-level documentation of `graphmon` (the root package) for
//! a usage example; this crate has no I/O of its own.

pub mod assoc_map;
pub mod command;
pub mod config;
pub mod entity;
pub mod error;
pub mod hashing;
pub mod id_vec;
pub mod relation;
pub mod report;
pub mod store;

pub use command::{Command, Output};
pub use config::StoreConfig;
pub use entity::EntityId;
pub use error::{GraphError, GraphResult};
pub use store::GraphStore;
