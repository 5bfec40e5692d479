// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Query-to-identity resolution.

use crate::error::{Result, RuntimeError};
use crate::source::SourceReader;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extension appended to every module query.
pub const SCRIPT_EXTENSION: &str = ".js";

/// Canonical identity of a loadable module: the resolved filename.
///
/// Identities compare by value and key the module cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId(PathBuf);

impl ModuleId {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    /// The resolved filename.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The containing directory, `.` for bare filenames.
    pub fn dirname(&self) -> PathBuf {
        match self.0.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Maps a module query to a [`ModuleId`].
///
/// The algorithm is deliberately minimal: the fixed [`SCRIPT_EXTENSION`] is
/// appended to the raw query, with no directory search and no relative
/// interpretation. Resolution is deterministic, never touches the module
/// cache, and fails when no script exists at the candidate path.
pub struct Resolver {
    sources: Arc<dyn SourceReader>,
}

impl Resolver {
    /// Create a resolver that checks candidates against `sources`.
    pub fn new(sources: Arc<dyn SourceReader>) -> Self {
        Self { sources }
    }

    /// Resolve `query` to a module identity.
    ///
    /// `requester` is accepted for forward compatibility with richer
    /// resolution schemes; the current algorithm does not consult it.
    pub fn resolve(&self, query: &str, _requester: Option<&ModuleId>) -> Result<ModuleId> {
        let mut filename = String::with_capacity(query.len() + SCRIPT_EXTENSION.len());
        filename.push_str(query);
        filename.push_str(SCRIPT_EXTENSION);

        let candidate = PathBuf::from(filename);
        if !self.sources.exists(&candidate) {
            return Err(RuntimeError::module_not_found(query));
        }

        Ok(ModuleId::new(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;

    struct FixedSources(HashSet<PathBuf>);

    impl FixedSources {
        fn with(paths: &[&str]) -> Arc<Self> {
            Arc::new(Self(paths.iter().map(PathBuf::from).collect()))
        }
    }

    impl SourceReader for FixedSources {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }

        fn read(&self, path: &Path) -> io::Result<String> {
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("no source for {}", path.display()),
            ))
        }
    }

    #[test]
    fn test_resolve_appends_fixed_extension() {
        let resolver = Resolver::new(FixedSources::with(&["a.js", "scripts/util.js"]));

        let id = resolver.resolve("a", None).unwrap();
        assert_eq!(id.as_path(), Path::new("a.js"));
        assert_eq!(id.dirname(), Path::new("."));

        let id = resolver.resolve("scripts/util", None).unwrap();
        assert_eq!(id.as_path(), Path::new("scripts/util.js"));
        assert_eq!(id.dirname(), Path::new("scripts"));
    }

    #[test]
    fn test_resolve_fails_when_no_script_matches() {
        let resolver = Resolver::new(FixedSources::with(&["a.js"]));

        let err = resolver.resolve("zzz", None).unwrap_err();
        assert!(matches!(err, RuntimeError::ModuleNotFound(query) if query == "zzz"));
    }

    #[test]
    fn test_resolve_is_deterministic_and_ignores_requester() {
        let resolver = Resolver::new(FixedSources::with(&["a.js", "b.js"]));
        let requester = resolver.resolve("b", None).unwrap();

        let first = resolver.resolve("a", None).unwrap();
        let second = resolver.resolve("a", Some(&requester)).unwrap();
        assert_eq!(first, second);
    }
}
