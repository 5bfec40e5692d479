// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Module records and the process-wide cache.

use crate::module_system::resolver::ModuleId;
use callisto_script::Value;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Load state of a module record.
///
/// `Created → Loading → Loaded` on success; `Created → Loading → Failed` on
/// a read, compile, or runtime failure, after which the record is removed
/// from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// Record exists but its source has not been read yet.
    Created,
    /// The module body is executing.
    Loading,
    /// The body ran to completion.
    Loaded,
    /// The load failed; the record is about to be discarded.
    Failed,
}

/// Per-identity module state.
///
/// The exports object is created with the record and keeps its identity for
/// the record's lifetime; a body that replaces its exports wholesale swaps
/// the `exports` field, which does not affect handles captured earlier.
/// Parent and children are held as identities, not owning references.
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    /// Canonical identity (resolved filename).
    pub id: ModuleId,
    /// The module's current exports.
    pub exports: Value,
    /// Identity of the module that first required this one.
    pub parent: Option<ModuleId>,
    /// Modules this one directly required, in first-require order.
    pub children: Vec<ModuleId>,
    /// Where the record is in its load lifecycle.
    pub state: ModuleState,
    /// Whether this is the process's main module.
    pub is_main: bool,
}

impl ModuleRecord {
    /// Create a fresh record with empty exports.
    pub fn new(id: ModuleId, parent: Option<ModuleId>, is_main: bool) -> Self {
        Self {
            id,
            exports: Value::object(),
            parent,
            children: Vec::new(),
            state: ModuleState::Created,
            is_main,
        }
    }

    /// Whether the module body has run to completion.
    pub fn loaded(&self) -> bool {
        self.state == ModuleState::Loaded
    }
}

/// Thread-safe store of in-progress and completed module records.
///
/// Holds at most one record per identity. Entries are removed only to roll
/// back a failed load; loaded records are never evicted and live for the
/// process lifetime.
pub struct ModuleCache {
    entries: DashMap<ModuleId, ModuleRecord>,
}

impl ModuleCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get a snapshot of the record for `id`.
    pub fn lookup(&self, id: &ModuleId) -> Option<ModuleRecord> {
        self.entries.get(id).map(|entry| entry.clone())
    }

    /// Insert a pending record, atomically checking for an existing one.
    ///
    /// Returns the existing record when the identity is already present
    /// (loaded, or still loading in a circular require), in which case the
    /// new record is dropped. This single check-and-insert is what keeps
    /// the per-identity singleton invariant under concurrent loads.
    pub fn insert_pending(&self, record: ModuleRecord) -> Option<ModuleRecord> {
        match self.entries.entry(record.id.clone()) {
            Entry::Occupied(existing) => Some(existing.get().clone()),
            Entry::Vacant(slot) => {
                slot.insert(record);
                None
            }
        }
    }

    /// Remove the record for `id`. Used only to roll back a failed load.
    pub fn remove(&self, id: &ModuleId) -> Option<ModuleRecord> {
        self.entries.remove(id).map(|(_, record)| record)
    }

    /// Mutate the record for `id` in place, if present.
    pub(crate) fn update(&self, id: &ModuleId, apply: impl FnOnce(&mut ModuleRecord)) {
        if let Some(mut entry) = self.entries.get_mut(id) {
            apply(&mut entry);
        }
    }

    /// Whether a record exists for `id`.
    pub fn contains(&self, id: &ModuleId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ModuleCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callisto_script::Object;
    use std::path::PathBuf;

    fn id(name: &str) -> ModuleId {
        ModuleId::new(PathBuf::from(name))
    }

    #[test]
    fn test_fresh_record_starts_created_with_empty_exports() {
        let record = ModuleRecord::new(id("a.js"), None, false);
        assert_eq!(record.state, ModuleState::Created);
        assert!(!record.loaded());
        let exports = record.exports.as_object().unwrap();
        assert!(exports.is_empty());
    }

    #[test]
    fn test_insert_pending_is_once_per_identity() {
        let cache = ModuleCache::new();
        let first = ModuleRecord::new(id("a.js"), None, false);
        let first_exports = first.exports.clone();

        assert!(cache.insert_pending(first).is_none());

        // Second insert for the same identity yields the original record.
        let existing = cache
            .insert_pending(ModuleRecord::new(id("a.js"), None, false))
            .expect("existing record");
        assert!(Object::ptr_eq(
            existing.exports.as_object().unwrap(),
            first_exports.as_object().unwrap()
        ));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_remove_rolls_back_an_entry() {
        let cache = ModuleCache::new();
        cache.insert_pending(ModuleRecord::new(id("a.js"), None, false));

        assert!(cache.remove(&id("a.js")).is_some());
        assert!(!cache.contains(&id("a.js")));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_update_mutates_in_place() {
        let cache = ModuleCache::new();
        cache.insert_pending(ModuleRecord::new(id("a.js"), None, false));

        cache.update(&id("a.js"), |record| {
            record.state = ModuleState::Loaded;
            record.children.push(id("b.js"));
        });

        let record = cache.lookup(&id("a.js")).unwrap();
        assert!(record.loaded());
        assert_eq!(record.children, vec![id("b.js")]);
    }
}
