// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Contract of the embedding script-execution engine.

use crate::module_system::ModuleScope;
use callisto_script::{EngineError, Value};
use std::path::Path;

/// The script-execution engine the runtime drives.
///
/// The runtime never interprets script text itself. For every load it hands
/// the engine the wrapped source, the resolved filename (for diagnostics
/// only), and the five scope bindings, and expects the engine to run the
/// body to completion synchronously. The engine is invoked exactly once per
/// load, including the entry load; a body that requires further modules
/// re-enters the runtime through [`ModuleScope::require`].
///
/// [`ModuleScope::require`]: crate::module_system::ModuleScope
pub trait ScriptEngine: Send + Sync {
    /// Compile the wrapped source and run the module body.
    ///
    /// Returns the body's completion value (implementation-defined and
    /// ignored by the loader), or [`EngineError::Compile`] for malformed
    /// source and [`EngineError::Runtime`] when the body throws.
    fn compile_and_run(
        &self,
        wrapped: &str,
        filename: &Path,
        scope: ModuleScope,
    ) -> std::result::Result<Value, EngineError>;
}
