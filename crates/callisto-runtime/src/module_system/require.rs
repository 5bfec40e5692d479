// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Per-module require() closures.

use crate::error::Result;
use crate::module_system::loader::ModuleLoader;
use crate::module_system::resolver::ModuleId;
use callisto_script::Value;
use std::sync::Arc;

/// A `require` function bound to one caller identity.
///
/// Every loaded module gets its own instance so that each `require(query)`
/// records the correct requester. A call that closes a cycle returns the
/// pending module's current exports rather than re-running its body.
#[derive(Clone)]
pub struct RequireFunction {
    loader: Arc<ModuleLoader>,
    caller: ModuleId,
}

impl RequireFunction {
    pub(crate) fn new(loader: Arc<ModuleLoader>, caller: ModuleId) -> Self {
        Self { loader, caller }
    }

    /// Resolve and load `query`, returning the module's current exports.
    pub fn call(&self, query: &str) -> Result<Value> {
        self.loader.require(query, Some(&self.caller))
    }

    /// `require.resolve` - resolve `query` without loading it.
    pub fn resolve(&self, query: &str) -> Result<ModuleId> {
        self.loader.resolve(query, Some(&self.caller))
    }

    /// `require.main` - the process's main module, if one was started.
    pub fn main(&self) -> Option<ModuleId> {
        self.loader.main_module()
    }

    /// The identity this require function is bound to.
    pub fn caller(&self) -> &ModuleId {
        &self.caller
    }
}
