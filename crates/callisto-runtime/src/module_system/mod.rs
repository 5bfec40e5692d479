// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Module loading subsystem.
//!
//! A query resolves to a canonical [`ModuleId`]; each identity is loaded at
//! most once per process and cached as a [`ModuleRecord`]. Records enter
//! the cache *before* their body runs, which is what lets a circular
//! require observe the in-progress exports of the module that is still
//! loading instead of re-running it.
//!
//! - [`Resolver`] — pure query-to-identity mapping
//! - [`ModuleCache`] — process-wide record store
//! - [`ModuleLoader`] — read, wrap, execute, and state transitions
//! - [`RequireFunction`] — per-module `require` bound to a caller identity

mod cache;
mod loader;
mod require;
mod resolver;
mod scope;

pub use cache::{ModuleCache, ModuleRecord, ModuleState};
pub use loader::{ModuleLoader, MODULE_WRAPPER};
pub use require::RequireFunction;
pub use resolver::{ModuleId, Resolver, SCRIPT_EXTENSION};
pub use scope::{ModuleHandle, ModuleScope};
