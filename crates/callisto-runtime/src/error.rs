// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Error types for the module runtime.

use callisto_script::EngineError;
use thiserror::Error;

/// Result type for module runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors that can occur while resolving or loading modules.
///
/// Resolution failures are surfaced to the caller without touching the
/// cache; load failures (read, compile, run) roll the pending cache entry
/// back before propagating, so a later require of the same identity gets a
/// fresh attempt.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No script matches the query.
    #[error("Cannot find module '{0}'")]
    ModuleNotFound(String),

    /// The resolved script could not be read.
    #[error("Error reading module '{module}': {source}")]
    ModuleRead {
        /// Identity of the module whose source was unreadable.
        module: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The execution engine rejected or aborted the module body.
    #[error("{0}")]
    Engine(#[from] EngineError),
}

impl RuntimeError {
    /// Create a module-not-found error.
    pub fn module_not_found(module: impl Into<String>) -> Self {
        Self::ModuleNotFound(module.into())
    }
}
