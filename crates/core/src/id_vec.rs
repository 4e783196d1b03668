//! Index-addressable, sparse, growable vector of owned values.
//!
//! Backs the entity registry's id -> name lookup (`entity.rs`), where
//! retired ids leave a `None` hole at their slot. Grows by doubling;
//! distinguishes `non_null_count` (live entries) from `next_free` (the
//! monotone high-water mark of indices ever touched).
//!
//! `iter` and `sorted_values` round out the `append`/`insert_at`/`sort`/
//! `iter` operation set spec'd for this primitive. The relation store
//! (`relation.rs`) took the Holder-of-maps encoding instead, so neither
//! method drives `report()`; `entity.rs` wires them into
//! `EntityRegistry::entries`/`names_sorted`, diagnostic accessors the CLI
//! driver logs on exit, independent of the report path.

pub struct IdVec<T> {
    slots: Vec<Option<T>>,
    next_free: usize,
    non_null_count: usize,
}

impl<T> IdVec<T> {
    pub fn new(initial_capacity: usize) -> Self {
        IdVec {
            slots: Vec::with_capacity(initial_capacity),
            next_free: 0,
            non_null_count: 0,
        }
    }

    /// Number of live (non-null) entries.
    pub fn non_null_count(&self) -> usize {
        self.non_null_count
    }

    /// High-water mark: one past the highest index ever written.
    pub fn next_free(&self) -> usize {
        self.next_free
    }

    fn ensure_len(&mut self, len: usize) {
        if self.slots.len() < len {
            let new_capacity = (self.slots.capacity().max(1) * 2).max(len);
            self.slots.reserve(new_capacity - self.slots.len());
            self.slots.resize_with(len, || None);
        }
    }

    /// Append a value, returning the index it was assigned.
    pub fn append(&mut self, value: T) -> usize {
        let index = self.next_free;
        self.insert_at(index, Some(value));
        index
    }

    /// Set (or clear, with `None`) the slot at `index`, growing as needed.
    pub fn insert_at(&mut self, index: usize, value: Option<T>) {
        self.ensure_len(index + 1);
        match (&self.slots[index], &value) {
            (None, Some(_)) => self.non_null_count += 1,
            (Some(_), None) => self.non_null_count -= 1,
            _ => {}
        }
        self.slots[index] = value;
        if index >= self.next_free {
            self.next_free = index + 1;
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (i, v)))
    }
}

impl<T: Ord> IdVec<T> {
    /// Sort the live entries in place by their natural order, discarding
    /// positional/sparse semantics (used for dense append-only usage —
    /// relation-name lists and per-report winner lists).
    pub fn sorted_values(&self) -> Vec<&T> {
        let mut values: Vec<&T> = self.slots.iter().filter_map(|v| v.as_ref()).collect();
        values.sort();
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_assigns_sequential_indices() {
        let mut v: IdVec<String> = IdVec::new(4);
        let i0 = v.append("a".to_string());
        let i1 = v.append("b".to_string());
        assert_eq!(i0, 0);
        assert_eq!(i1, 1);
        assert_eq!(v.get(0), Some(&"a".to_string()));
        assert_eq!(v.get(1), Some(&"b".to_string()));
    }

    #[test]
    fn insert_at_retires_a_slot() {
        let mut v: IdVec<String> = IdVec::new(4);
        v.insert_at(3, Some("x".to_string()));
        assert_eq!(v.non_null_count(), 1);
        assert_eq!(v.next_free(), 4);
        v.insert_at(3, None);
        assert_eq!(v.non_null_count(), 0);
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut v: IdVec<u64> = IdVec::new(2);
        for i in 0..100u64 {
            v.append(i);
        }
        assert_eq!(v.non_null_count(), 100);
        for i in 0..100u64 {
            assert_eq!(v.get(i as usize), Some(&i));
        }
    }

    #[test]
    fn sorted_values_ignores_holes() {
        let mut v: IdVec<String> = IdVec::new(4);
        v.append("zeta".to_string());
        v.append("alpha".to_string());
        v.insert_at(1, None);
        assert_eq!(v.sorted_values(), vec![&"zeta".to_string()]);
    }
}
