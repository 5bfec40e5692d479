// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Per-module bindings injected into every loaded script.

use crate::module_system::loader::ModuleLoader;
use crate::module_system::require::RequireFunction;
use crate::module_system::resolver::ModuleId;
use callisto_script::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The five bindings a module body receives, in wrapper parameter order:
/// `exports`, `require`, `module`, `__filename`, `__dirname`.
///
/// `exports` is the record's exports object captured at scope creation;
/// it keeps pointing at the original container even if the body later
/// replaces the record's exports through [`ModuleHandle::set_exports`].
pub struct ModuleScope {
    /// The module's exports container.
    pub exports: Value,
    /// `require`, bound to this module as the caller.
    pub require: RequireFunction,
    /// The module descriptor.
    pub module: ModuleHandle,
    /// The resolved filename.
    pub filename: PathBuf,
    /// The filename's containing directory.
    pub dirname: PathBuf,
}

impl ModuleScope {
    pub(crate) fn new(loader: &Arc<ModuleLoader>, id: &ModuleId) -> Self {
        let exports = loader
            .cache()
            .lookup(id)
            .map(|record| record.exports)
            .unwrap_or_default();

        Self {
            exports,
            require: RequireFunction::new(Arc::clone(loader), id.clone()),
            module: ModuleHandle::new(Arc::clone(loader), id.clone()),
            filename: id.as_path().to_path_buf(),
            dirname: id.dirname(),
        }
    }
}

/// Descriptor of one module, reading through to its cached record.
///
/// This is the `module` binding: it exposes the record's identity,
/// relationships, and load state, and lets the body replace its exports
/// wholesale (`module.exports = ...` in script terms).
#[derive(Clone)]
pub struct ModuleHandle {
    loader: Arc<ModuleLoader>,
    id: ModuleId,
}

impl ModuleHandle {
    pub(crate) fn new(loader: Arc<ModuleLoader>, id: ModuleId) -> Self {
        Self { loader, id }
    }

    /// The module's identity.
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    /// The resolved filename.
    pub fn filename(&self) -> &Path {
        self.id.as_path()
    }

    /// Whether the body has run to completion. False while loading.
    pub fn loaded(&self) -> bool {
        self.record(|record| record.loaded()).unwrap_or(false)
    }

    /// Whether this is the process's main module.
    pub fn is_main(&self) -> bool {
        self.record(|record| record.is_main).unwrap_or(false)
    }

    /// Identity of the module that first required this one.
    pub fn parent(&self) -> Option<ModuleId> {
        self.record(|record| record.parent.clone()).flatten()
    }

    /// Modules this one directly required, in first-require order.
    pub fn children(&self) -> Vec<ModuleId> {
        self.record(|record| record.children.clone())
            .unwrap_or_default()
    }

    /// The module's current exports.
    pub fn exports(&self) -> Value {
        self.record(|record| record.exports.clone())
            .unwrap_or_default()
    }

    /// Replace the module's exports wholesale.
    ///
    /// Requesters that captured the previous exports object keep seeing
    /// that object; only the record's notion of "current exports" changes.
    pub fn set_exports(&self, value: Value) {
        self.loader
            .cache()
            .update(&self.id, |record| record.exports = value);
    }

    fn record<T>(&self, read: impl FnOnce(&crate::module_system::ModuleRecord) -> T) -> Option<T> {
        self.loader.cache().lookup(&self.id).map(|record| read(&record))
    }
}
