// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Errors reported by the script-execution engine.

use thiserror::Error;

/// Failure modes of a single compile-and-run invocation.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The wrapped source text failed to parse or compile.
    #[error("SyntaxError: {0}")]
    Compile(String),

    /// The module body itself threw while executing.
    #[error("{0}")]
    Runtime(String),
}

impl EngineError {
    /// Create a compile error with the given message.
    pub fn compile(msg: impl Into<String>) -> Self {
        Self::Compile(msg.into())
    }

    /// Create a runtime error with the given message.
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
