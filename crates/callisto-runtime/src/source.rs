// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Callisto Contributors

//! Source access collaborator.

use std::io;
use std::path::Path;

/// Where script source comes from.
///
/// `exists` backs resolution (no script, no identity); `read` backs the
/// load itself. Keeping this behind a trait lets hosts serve modules from
/// archives or memory without changing the loader.
pub trait SourceReader: Send + Sync {
    /// Whether a script exists at this path.
    fn exists(&self, path: &Path) -> bool;

    /// Read the script's UTF-8 source text.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads scripts straight from the filesystem.
#[derive(Debug, Default)]
pub struct FsSource;

impl SourceReader for FsSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_source_reads_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.js");
        std::fs::write(&path, "exports.ok = true;").unwrap();

        let source = FsSource;
        assert!(source.exists(&path));
        assert_eq!(source.read(&path).unwrap(), "exports.ok = true;");
    }

    #[test]
    fn test_fs_source_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.js");

        let source = FsSource;
        assert!(!source.exists(&path));
        assert_eq!(
            source.read(&path).unwrap_err().kind(),
            std::io::ErrorKind::NotFound
        );
    }
}
