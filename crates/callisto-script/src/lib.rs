// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! # callisto-script
//!
//! The script value model shared between the Callisto runtime and the
//! embedded script-execution engine.
//!
//! The runtime never parses or evaluates script text itself; it hands
//! wrapped source to an engine and exchanges [`Value`]s with it. The one
//! structural requirement is that [`Object`] containers have *reference*
//! identity: every clone of an object value points at the same underlying
//! slot table, so a module's exports can be observed (and mutated) through
//! any handle that was ever given out.
//!
//! ## Quick Start
//!
//! ```rust
//! use callisto_script::{Object, Value};
//!
//! let exports = Object::new();
//! let alias = exports.clone();
//! exports.set("value", Value::Number(1.0));
//! assert_eq!(alias.get("value"), Value::Number(1.0));
//! assert!(Object::ptr_eq(&exports, &alias));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod value;

pub use error::EngineError;
pub use value::{Object, Value};
