// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Module loader - reads, wraps, and executes modules.

use crate::engine::ScriptEngine;
use crate::error::{Result, RuntimeError};
use crate::module_system::cache::{ModuleCache, ModuleRecord, ModuleState};
use crate::module_system::resolver::{ModuleId, Resolver};
use crate::module_system::scope::ModuleScope;
use crate::source::SourceReader;
use callisto_script::Value;
use parking_lot::RwLock;
use std::sync::Arc;

/// Prologue and epilogue wrapped around every module's source.
///
/// The wrapper gives each module a private lexical scope parameterized by
/// the five injected bindings, so top-level declarations never leak into a
/// shared global scope.
pub const MODULE_WRAPPER: [&str; 2] = [
    "(function(exports, require, module, __filename, __dirname) { ",
    "\n});",
];

/// Loads modules and owns the process-wide cache.
///
/// The loader is the only writer of the cache, at exactly two points: the
/// insert of a pending record before a body runs, and the removal that
/// rolls a failed load back. A module body that requires further modules
/// re-enters the loader synchronously through its [`RequireFunction`];
/// the native call stack mirrors the require chain.
///
/// [`RequireFunction`]: crate::module_system::RequireFunction
pub struct ModuleLoader {
    /// Query-to-identity resolution.
    resolver: Resolver,
    /// Process-wide record store.
    cache: ModuleCache,
    /// Script source access.
    sources: Arc<dyn SourceReader>,
    /// The embedding execution engine.
    engine: Arc<dyn ScriptEngine>,
    /// Identity of the module started via `run_main`, once known.
    main: RwLock<Option<ModuleId>>,
}

impl ModuleLoader {
    /// Create a loader with an empty cache.
    pub fn new(engine: Arc<dyn ScriptEngine>, sources: Arc<dyn SourceReader>) -> Arc<Self> {
        Arc::new(Self {
            resolver: Resolver::new(Arc::clone(&sources)),
            cache: ModuleCache::new(),
            sources,
            engine,
            main: RwLock::new(None),
        })
    }

    /// Load the process entry module.
    ///
    /// Resolves `entry` with no requester, loads it with the main flag set,
    /// and records it as the process's main module. Returns only when the
    /// full synchronous require chain has unwound.
    pub fn run_main(self: &Arc<Self>, entry: &str) -> Result<Value> {
        let id = self.resolver.resolve(entry, None)?;
        tracing::debug!("loading main module {}", id);
        self.load(id, None, true)
    }

    /// Resolve and load a module on behalf of `requester`.
    pub fn require(self: &Arc<Self>, query: &str, requester: Option<&ModuleId>) -> Result<Value> {
        let id = self.resolver.resolve(query, requester)?;
        self.load(id, requester.cloned(), false)
    }

    /// Resolve a query without loading anything.
    pub fn resolve(&self, query: &str, requester: Option<&ModuleId>) -> Result<ModuleId> {
        self.resolver.resolve(query, requester)
    }

    /// The module cache.
    pub fn cache(&self) -> &ModuleCache {
        &self.cache
    }

    /// Identity of the main module, once `run_main` has resolved it.
    pub fn main_module(&self) -> Option<ModuleId> {
        self.main.read().clone()
    }

    /// Load a resolved identity, returning its exports.
    fn load(self: &Arc<Self>, id: ModuleId, parent: Option<ModuleId>, is_main: bool) -> Result<Value> {
        // The record enters the cache before its body runs. A re-entrant
        // require of the same identity (a cycle) finds the pending record
        // and gets its current, possibly partial, exports instead of
        // starting a second load.
        let record = ModuleRecord::new(id.clone(), parent.clone(), is_main);
        if let Some(existing) = self.cache.insert_pending(record) {
            tracing::trace!("cache hit for {}", id);
            return Ok(existing.exports);
        }

        if let Some(parent_id) = &parent {
            self.cache
                .update(parent_id, |record| record.children.push(id.clone()));
        }
        if is_main {
            *self.main.write() = Some(id.clone());
        }

        match self.run_body(&id) {
            Ok(()) => {
                self.cache
                    .update(&id, |record| record.state = ModuleState::Loaded);
                tracing::debug!("loaded {}", id);
                // The body may have replaced its exports wholesale; return
                // whatever the record holds now.
                Ok(self
                    .cache
                    .lookup(&id)
                    .map(|record| record.exports)
                    .unwrap_or_default())
            }
            Err(err) => {
                // Roll the entry back so a later require of this identity
                // gets a fresh attempt instead of a poisoned cache slot.
                self.cache
                    .update(&id, |record| record.state = ModuleState::Failed);
                self.cache.remove(&id);
                tracing::warn!("rolled back failed load of {}: {}", id, err);
                Err(err)
            }
        }
    }

    /// Read, wrap, and hand the module body to the engine.
    fn run_body(self: &Arc<Self>, id: &ModuleId) -> Result<()> {
        let source = self
            .sources
            .read(id.as_path())
            .map_err(|source| RuntimeError::ModuleRead {
                module: id.to_string(),
                source,
            })?;

        self.cache
            .update(id, |record| record.state = ModuleState::Loading);

        let wrapped = wrap(&source);
        let scope = ModuleScope::new(self, id);
        self.engine.compile_and_run(&wrapped, id.as_path(), scope)?;
        Ok(())
    }
}

/// Enclose raw source in the module wrapper.
fn wrap(source: &str) -> String {
    let mut wrapped =
        String::with_capacity(MODULE_WRAPPER[0].len() + source.len() + MODULE_WRAPPER[1].len());
    wrapped.push_str(MODULE_WRAPPER[0]);
    wrapped.push_str(source);
    wrapped.push_str(MODULE_WRAPPER[1]);
    wrapped
}
