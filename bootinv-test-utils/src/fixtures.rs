//! Temporary image tree fixtures
//!
//! [`ImageTreeBuilder`] lays out a directory of files under a
//! [`tempfile::TempDir`] so discovery and inventory tests can run
//! against a real filesystem without touching the host.

use std::fs;
use std::path::{Path, PathBuf};

use bootinv_core::Config;
use tempfile::TempDir;

/// Builder for a temporary directory tree of image files.
///
/// Relative paths may contain subdirectories; parents are created as
/// needed when the tree is built.
#[derive(Debug, Default)]
pub struct ImageTreeBuilder {
    files: Vec<(PathBuf, Vec<u8>)>,
    dirs: Vec<PathBuf>,
}

impl ImageTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file at `path` (relative to the tree root) with the given
    /// contents.
    pub fn file(mut self, path: impl AsRef<Path>, contents: &[u8]) -> Self {
        self.files
            .push((path.as_ref().to_path_buf(), contents.to_vec()));
        self
    }

    /// Adds an empty directory at `path` (relative to the tree root).
    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        self.dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Materializes the tree on disk.
    ///
    /// Panics on I/O failure; fixtures have no meaningful recovery path
    /// in a test run.
    pub fn build(self) -> ImageTree {
        let root = TempDir::new().expect("failed to create fixture root");

        for dir in &self.dirs {
            fs::create_dir_all(root.path().join(dir)).expect("failed to create fixture directory");
        }

        for (path, contents) in &self.files {
            let absolute = root.path().join(path);
            if let Some(parent) = absolute.parent() {
                fs::create_dir_all(parent).expect("failed to create fixture parent");
            }
            fs::write(&absolute, contents).expect("failed to write fixture file");
        }

        ImageTree { root }
    }
}

/// A materialized fixture tree. The backing directory is removed when
/// the value is dropped.
#[derive(Debug)]
pub struct ImageTree {
    root: TempDir,
}

impl ImageTree {
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of a file or directory inside the tree.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.path().join(relative)
    }

    /// A [`Config`] whose only image location is this tree's root.
    pub fn config(&self, pattern: &str) -> Config {
        Config::for_images(vec![self.root().to_path_buf()], pattern)
    }
}
