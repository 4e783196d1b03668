//! Bijection between entity names and small dense integer ids.
//!
//! Ids are assigned from a monotone, process-wide counter starting at 1
//! (0 is reserved for "absent"). An id is never recycled after its entity
//! is deregistered — the name<->id mapping is simply dropped, leaving the
//! id permanently retired.

use crate::assoc_map::AssocMap;
use crate::error::GraphResult;
use crate::id_vec::IdVec;

/// Stable integer id assigned to a registered entity. Never reused.
pub type EntityId = u64;

/// Name <-> id bijection for the currently (and formerly) registered
/// entities.
pub struct EntityRegistry {
    name_to_id: AssocMap<EntityId>,
    id_to_name: IdVec<String>,
    next_id: EntityId,
}

impl EntityRegistry {
    pub fn new(name_capacity: usize, id_capacity: usize) -> Self {
        // Ids start at 1 (0 is reserved for "absent"); index 0 of
        // `id_to_name` is simply never assigned.
        EntityRegistry {
            name_to_id: AssocMap::new(name_capacity),
            id_to_name: IdVec::new(id_capacity),
            next_id: 1,
        }
    }

    /// Register `name`, assigning it a fresh id. No-op if already
    /// registered (idempotent).
    pub fn register(&mut self, name: &str) -> GraphResult<EntityId> {
        if let Some(&id) = self.name_to_id.get(name) {
            return Ok(id);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.name_to_id.insert(name, id)?;
        self.id_to_name.insert_at(id as usize, Some(name.to_string()));
        tracing::trace!(name, id, "entity registered");
        Ok(id)
    }

    /// Deregister `name`. Returns true iff it was registered. The id is
    /// retired, not reused.
    pub fn deregister(&mut self, name: &str) -> Option<EntityId> {
        let id = self.name_to_id.remove(name)?;
        self.id_to_name.insert_at(id as usize, None);
        tracing::trace!(name, id, "entity retired");
        Some(id)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.name_to_id.get(name).copied()
    }

    pub fn name_of(&self, id: EntityId) -> Option<&str> {
        self.id_to_name.get(id as usize).map(|s| s.as_str())
    }

    /// Number of currently registered entities.
    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }

    /// All registered names, sorted ascending. A diagnostic accessor —
    /// `report()` never consults the registry directly, it only walks the
    /// relation store, so this is the registry's own view of live state.
    pub fn names_sorted(&self) -> Vec<&str> {
        self.id_to_name.sorted_values().into_iter().map(|s| s.as_str()).collect()
    }

    /// (id, name) pairs for every currently registered entity, in
    /// id-assignment order.
    pub fn entries(&self) -> impl Iterator<Item = (EntityId, &str)> {
        self.id_to_name.iter().map(|(id, name)| (id as EntityId, name.as_str()))
    }
}
