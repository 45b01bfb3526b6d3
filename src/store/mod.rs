//! In-memory design storage.
//!
//! The store is a cheap-to-clone handle over shared state. Writes replace
//! whole designs; concurrent writers to the same id race and the last one
//! wins. Nothing survives a process restart.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

use crate::models::Design;

#[derive(Clone, Default)]
pub struct DesignStore {
    designs: Arc<RwLock<IndexMap<String, Design>>>,
}

impl DesignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the design, or overwrites the one stored under the same id.
    pub fn save(&self, design: Design) {
        let mut designs = self.designs.write().expect("design store lock poisoned");
        designs.insert(design.id.clone(), design);
    }

    pub fn get(&self, id: &str) -> Option<Design> {
        let designs = self.designs.read().expect("design store lock poisoned");
        designs.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        let designs = self.designs.read().expect("design store lock poisoned");
        designs.contains_key(id)
    }

    /// Removes the design if present. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut designs = self.designs.write().expect("design store lock poisoned");
        designs.shift_remove(id).is_some()
    }

    /// All designs in store order. Callers should not rely on that order.
    pub fn list_all(&self) -> Vec<Design> {
        let designs = self.designs.read().expect("design store lock poisoned");
        designs.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        let designs = self.designs.read().expect("design store lock poisoned");
        designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let store = DesignStore::new();
        let handle = store.clone();

        handle.save(Design::new("d1", "Shared"));

        assert!(store.contains("d1"));
        assert_eq!(store.len(), 1);
    }
}
