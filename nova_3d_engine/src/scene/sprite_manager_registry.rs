/// SpriteManagerRegistry - tracks the live sprite managers of a scene
///
/// Managers register on construction and receive a stable key; disposal
/// removes exactly that slot, so two managers with the same name never
/// shadow each other. The registry is a cheap clonable handle around a
/// shared slot table.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a registered sprite manager
    pub struct SpriteManagerKey;
}

/// What the registry knows about a live manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteManagerInfo {
    pub name: String,
    pub capacity: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SpriteManagerRegistry {
    entries: Arc<Mutex<SlotMap<SpriteManagerKey, SpriteManagerInfo>>>,
}

impl SpriteManagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, SlotMap<SpriteManagerKey, SpriteManagerInfo>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, info: SpriteManagerInfo) -> SpriteManagerKey {
        self.entries().insert(info)
    }

    /// Remove a manager. Returns false if the key was already removed.
    pub fn unregister(&self, key: SpriteManagerKey) -> bool {
        self.entries().remove(key).is_some()
    }

    pub fn contains(&self, key: SpriteManagerKey) -> bool {
        self.entries().contains_key(key)
    }

    pub fn info(&self, key: SpriteManagerKey) -> Option<SpriteManagerInfo> {
        self.entries().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Names of the live managers, in slot order
    pub fn names(&self) -> Vec<String> {
        self.entries().values().map(|info| info.name.clone()).collect()
    }
}

#[cfg(test)]
#[path = "sprite_manager_registry_tests.rs"]
mod tests;
