//! Per-relation adjacency: for each relation name, a map from destination
//! name to the set of origin names currently pointing at it.

use crate::assoc_map::AssocMap;
use crate::error::GraphResult;

/// Adjacency for a single relation: destination name -> set of origin
/// names with an arrow into that destination.
struct Holder {
    dest_origins: AssocMap<AssocMap<()>>,
    inner_capacity: usize,
}

impl Holder {
    fn new(inner_capacity: usize) -> Self {
        Holder {
            dest_origins: AssocMap::new(inner_capacity),
            inner_capacity,
        }
    }

    fn is_empty(&self) -> bool {
        self.dest_origins.is_empty()
    }

    fn add_arrow(&mut self, origin: &str, dest: &str) -> GraphResult<()> {
        if let Some(origins) = self.dest_origins.get_mut(dest) {
            origins.insert(origin, ())?;
            return Ok(());
        }
        let mut origins = AssocMap::new(self.inner_capacity);
        origins.insert(origin, ())?;
        self.dest_origins.insert(dest, origins)?;
        Ok(())
    }

    fn remove_arrow(&mut self, origin: &str, dest: &str) {
        let mut drop_dest = false;
        if let Some(origins) = self.dest_origins.get_mut(dest) {
            origins.remove(origin);
            drop_dest = origins.is_empty();
        }
        if drop_dest {
            self.dest_origins.remove(dest);
        }
    }

    fn degree(&self, dest: &str) -> usize {
        self.dest_origins.get(dest).map(|s| s.len()).unwrap_or(0)
    }

    fn dest_degrees(&self) -> impl Iterator<Item = (&str, usize)> {
        self.dest_origins.iter().map(|(dest, origins)| (dest, origins.len()))
    }

    /// Atomically withdraw every incoming and outgoing arrow touching
    /// `name`: drop it as a destination, then strike it from every
    /// remaining origin-set. Empty dest-sets left behind by the second
    /// step are cleaned up immediately.
    fn purge_entity(&mut self, name: &str) {
        self.dest_origins.remove(name);
        self.dest_origins.retain(|_, origins| {
            origins.remove(name);
            !origins.is_empty()
        });
    }
}

/// Store of all relations currently alive, keyed by relation name.
///
/// A relation exists in the store iff its arrow-set is non-empty; it is
/// created lazily on the first successful `add_arrow` and removed when its
/// last arrow is withdrawn.
pub struct RelationStore {
    relations: AssocMap<Holder>,
    inner_capacity: usize,
}

impl RelationStore {
    pub fn new(relation_capacity: usize, inner_capacity: usize) -> Self {
        RelationStore {
            relations: AssocMap::new(relation_capacity),
            inner_capacity,
        }
    }

    /// Add the arrow `(origin, dest)` under `relation`. Idempotent.
    pub fn add_arrow(&mut self, origin: &str, dest: &str, relation: &str) -> GraphResult<()> {
        if self.relations.get(relation).is_none() {
            self.relations.insert(relation, Holder::new(self.inner_capacity))?;
            tracing::trace!(%relation, "relation created");
        }
        self.relations
            .get_mut(relation)
            .expect("just inserted")
            .add_arrow(origin, dest)
    }

    /// Remove the arrow `(origin, dest)` under `relation`. No-op if the
    /// relation or the arrow is absent.
    pub fn remove_arrow(&mut self, origin: &str, dest: &str, relation: &str) {
        let mut drop_relation = false;
        if let Some(holder) = self.relations.get_mut(relation) {
            holder.remove_arrow(origin, dest);
            drop_relation = holder.is_empty();
        }
        if drop_relation {
            self.relations.remove(relation);
            tracing::trace!(%relation, "relation removed (last arrow withdrawn)");
        }
    }

    /// Cascade-purge every arrow touching `name`, incoming or outgoing,
    /// across all relations. Relations left empty by the purge are
    /// dropped entirely.
    pub fn purge_entity(&mut self, name: &str) {
        let mut emptied = Vec::new();
        for (relation, holder) in self.relations.iter_mut() {
            holder.purge_entity(name);
            if holder.is_empty() {
                emptied.push(relation.to_string());
            }
        }
        for relation in emptied {
            self.relations.remove(&relation);
            tracing::trace!(%relation, "relation removed (emptied by cascade)");
        }
    }

    /// Names of all relations currently alive (unsorted).
    pub fn relation_names(&self) -> Vec<String> {
        self.relations.keys().map(|s| s.to_string()).collect()
    }

    /// In-degree of `dest` under `relation` (0 if either is unknown).
    pub fn degree(&self, relation: &str, dest: &str) -> usize {
        self.relations.get(relation).map(|h| h.degree(dest)).unwrap_or(0)
    }

    /// (dest, in-degree) pairs for every destination with at least one
    /// incoming arrow under `relation`.
    pub fn dest_degrees(&self, relation: &str) -> Vec<(String, usize)> {
        self.relations
            .get(relation)
            .map(|h| h.dest_degrees().map(|(d, n)| (d.to_string(), n)).collect())
            .unwrap_or_default()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}
