//! # graphmon
//!
//! An in-memory monitor over a dynamic set of named entities and typed
//! directed relationships between them.
//!
//! `graphmon` consumes a stream of imperative commands (`addent`, `delent`,
//! `addrel`, `delrel`, `report`), mutates an entity registry and a
//! per-relation adjacency store, and on `report` emits a deterministic
//! textual summary of which destination(s) have the highest in-degree
//! under each relation currently alive.
//!
//! # Quick Start
//!
//! ```
//! use graphmon::{GraphStore, StoreConfig};
//!
//! let mut store = GraphStore::new(StoreConfig::default());
//! store.add_ent("alice")?;
//! store.add_ent("bob")?;
//! store.add_rel("alice", "bob", "knows")?;
//! assert_eq!(store.report(), "\"knows\" \"bob\" 1;\n");
//! # Ok::<(), graphmon::GraphError>(())
//! ```
//!
//! # Architecture
//!
//! The hard engineering lives in `graphmon-core`: a hand-rolled
//! open-addressed associative map (`assoc_map`), a dense id-indexed vector
//! (`id_vec`), the entity registry and relation store built on top of
//! them, and the report engine. This crate re-exports that public surface;
//! the command-line shell around it lives in the separate `graphmon-cli`
//! binary crate.

pub use graphmon_core::*;
