//! Mutation API: the five verbs (`addent`, `delent`, `addrel`, `delrel`,
//! `report`) and the invariants they must uphold.

use crate::command::{Command, Output};
use crate::config::StoreConfig;
use crate::entity::{EntityId, EntityRegistry};
use crate::error::GraphResult;
use crate::relation::RelationStore;
use crate::report;

/// The full process-wide state: the entity registry and the relation
/// store. There is exactly one writer and no concurrent reader during
/// writes, so no interior mutability or locking is needed.
pub struct GraphStore {
    registry: EntityRegistry,
    relations: RelationStore,
}

impl GraphStore {
    pub fn new(config: StoreConfig) -> Self {
        GraphStore {
            registry: EntityRegistry::new(config.entity_capacity, config.entity_capacity),
            relations: RelationStore::new(config.relation_capacity, config.inner_capacity),
        }
    }

    /// Register `name` if not already known. Idempotent.
    pub fn add_ent(&mut self, name: &str) -> GraphResult<()> {
        self.registry.register(name)?;
        Ok(())
    }

    /// Deregister `name`, cascading the purge of every arrow that
    /// touches it across all relations. No-op if `name` is unknown.
    pub fn del_ent(&mut self, name: &str) -> GraphResult<()> {
        if self.registry.deregister(name).is_some() {
            self.relations.purge_entity(name);
        }
        Ok(())
    }

    /// Add the arrow `(origin, dest)` under `relation`, iff both
    /// endpoints are registered. Idempotent.
    pub fn add_rel(&mut self, origin: &str, dest: &str, relation: &str) -> GraphResult<()> {
        if self.registry.is_registered(origin) && self.registry.is_registered(dest) {
            self.relations.add_arrow(origin, dest, relation)?;
        }
        Ok(())
    }

    /// Remove the arrow `(origin, dest)` under `relation`. No-op if
    /// absent.
    pub fn del_rel(&mut self, origin: &str, dest: &str, relation: &str) -> GraphResult<()> {
        self.relations.remove_arrow(origin, dest, relation);
        Ok(())
    }

    /// The deterministic report line for the current state.
    pub fn report(&self) -> String {
        report::build_report(&self.relations)
    }

    /// Dispatch a parsed [`Command`], returning its [`Output`].
    /// `Command::End` is not handled here — the caller's read loop owns
    /// termination.
    pub fn dispatch(&mut self, command: Command) -> GraphResult<Output> {
        match command {
            Command::AddEnt { name } => {
                self.add_ent(&name)?;
                Ok(Output::Noop)
            }
            Command::DelEnt { name } => {
                self.del_ent(&name)?;
                Ok(Output::Noop)
            }
            Command::AddRel { origin, dest, relation } => {
                self.add_rel(&origin, &dest, &relation)?;
                Ok(Output::Noop)
            }
            Command::DelRel { origin, dest, relation } => {
                self.del_rel(&origin, &dest, &relation)?;
                Ok(Output::Noop)
            }
            Command::Report => Ok(Output::Report(self.report())),
            Command::End => Ok(Output::Noop),
        }
    }

    /// Number of currently registered entities.
    pub fn entity_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of relations currently alive (non-empty arrow-set).
    pub fn relation_count(&self) -> usize {
        self.relations.relation_count()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.is_registered(name)
    }

    /// Current in-degree of `dest` under `relation` (0 if either is
    /// unknown or the arrow-set is empty).
    pub fn degree(&self, relation: &str, dest: &str) -> usize {
        self.relations.degree(relation, dest)
    }

    /// All registered entity names, sorted ascending. A diagnostic
    /// accessor independent of `report()`'s relation-scoped view, used by
    /// the CLI driver to log the final entity set on exit.
    pub fn entity_names_sorted(&self) -> Vec<&str> {
        self.registry.names_sorted()
    }

    /// (id, name) pairs for every currently registered entity.
    pub fn entity_entries(&self) -> impl Iterator<Item = (EntityId, &str)> {
        self.registry.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> GraphStore {
        GraphStore::new(StoreConfig {
            entity_capacity: 8,
            relation_capacity: 8,
            inner_capacity: 8,
        })
    }

    #[test]
    fn scenario_basic() {
        let mut s = store();
        s.add_ent("alice").unwrap();
        s.add_ent("bob").unwrap();
        s.add_rel("alice", "bob", "knows").unwrap();
        assert_eq!(s.report(), "\"knows\" \"bob\" 1;\n");
    }

    #[test]
    fn scenario_cascade_delete() {
        let mut s = store();
        s.add_ent("a").unwrap();
        s.add_ent("b").unwrap();
        s.add_ent("c").unwrap();
        s.add_rel("a", "c", "r").unwrap();
        s.add_rel("b", "c", "r").unwrap();
        s.del_ent("c").unwrap();
        assert_eq!(s.report(), "none\n");
    }

    #[test]
    fn scenario_relation_vanishes_then_returns() {
        let mut s = store();
        s.add_ent("a").unwrap();
        s.add_ent("b").unwrap();
        s.add_rel("a", "b", "r").unwrap();
        s.del_rel("a", "b", "r").unwrap();
        assert_eq!(s.report(), "none\n");
        s.add_rel("a", "b", "r").unwrap();
        assert_eq!(s.report(), "\"r\" \"b\" 1;\n");
    }

    #[test]
    fn scenario_unknown_endpoint_is_noop() {
        let mut s = store();
        s.add_ent("a").unwrap();
        s.add_rel("a", "ghost", "r").unwrap();
        assert_eq!(s.report(), "none\n");
    }

    #[test]
    fn entity_and_relation_namespaces_are_independent() {
        let mut s = store();
        s.add_ent("r").unwrap(); // entity named the same as a relation below
        s.add_ent("x").unwrap();
        s.add_rel("x", "r", "r").unwrap();
        assert!(s.is_registered("r"));
        assert_eq!(s.degree("r", "r"), 1);
    }

    #[test]
    fn entity_names_sorted_reflects_live_registrations_only() {
        let mut s = store();
        s.add_ent("zeta").unwrap();
        s.add_ent("alpha").unwrap();
        s.add_ent("gone").unwrap();
        s.del_ent("gone").unwrap();
        assert_eq!(s.entity_names_sorted(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn entity_entries_excludes_retired_ids() {
        let mut s = store();
        s.add_ent("alice").unwrap();
        s.add_ent("bob").unwrap();
        s.del_ent("alice").unwrap();
        let entries: Vec<_> = s.entity_entries().collect();
        assert_eq!(entries, vec![(2, "bob")]);
    }

    #[test]
    fn dispatch_report_returns_output_report() {
        let mut s = store();
        s.add_ent("a").unwrap();
        s.add_ent("b").unwrap();
        s.dispatch(Command::AddRel {
            origin: "a".into(),
            dest: "b".into(),
            relation: "r".into(),
        })
        .unwrap();
        let out = s.dispatch(Command::Report).unwrap();
        assert_eq!(out, Output::Report("\"r\" \"b\" 1;\n".to_string()));
    }
}
