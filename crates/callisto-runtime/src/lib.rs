// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! # callisto-runtime
//!
//! Synchronous module loading and resolution for Callisto scripts.
//!
//! The runtime resolves a module query to a canonical identity, loads and
//! compiles the script exactly once, caches the resulting record, and
//! handles circular require graphs by exposing partially populated exports
//! instead of recursing. Script execution itself is delegated to an
//! embedding engine through the [`ScriptEngine`] trait; source access goes
//! through [`SourceReader`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use callisto_runtime::{FsSource, ModuleLoader};
//! use std::sync::Arc;
//!
//! let loader = ModuleLoader::new(engine, Arc::new(FsSource));
//! let exports = loader.run_main("scripts/main")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod module_system;
pub mod source;

// Re-exports
pub use engine::ScriptEngine;
pub use error::{Result, RuntimeError};
pub use module_system::{
    ModuleCache, ModuleHandle, ModuleId, ModuleLoader, ModuleRecord, ModuleScope, ModuleState,
    RequireFunction, Resolver, MODULE_WRAPPER, SCRIPT_EXTENSION,
};
pub use source::{FsSource, SourceReader};
