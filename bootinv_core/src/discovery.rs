//! File discovery engine
//!
//! Scans search locations for files matching a name/extension pattern
//! and returns one metadata record per match, in a defined, stable
//! order. Pattern matching is glob-based; a leading-dot pattern such as
//! `".img"` is treated as a case-insensitive extension suffix, any other
//! non-empty pattern as a glob matched against the full path, and an
//! empty pattern falls back to the built-in boot image extension set
//! unless that fallback is disabled in the options.
//!
//! Filesystem trouble never fails a scan: locations that do not exist
//! and files that cannot be read are logged at warn level and skipped,
//! so partial results are an ordinary outcome. The only error surfaced
//! here is a pattern that fails to compile.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::checksum::{Checksum, ChecksumAlgorithm};
use crate::error::Result;

mod filter;
mod patterns;
mod walker;

pub use filter::ImageFilter;
pub use patterns::{
    DEFAULT_IMAGE_EXTENSIONS, DISK_IMAGE_EXTENSIONS, KERNEL_IMAGE_EXTENSIONS, extension_patterns,
};
pub use walker::Walker;

/// One discovered file
///
/// Created fresh on each discovery pass and immutable once returned;
/// ownership passes entirely to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    /// Final path component
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Modification time, when the platform reports one
    pub modified: Option<SystemTime>,
    /// Content digest, populated only when requested
    pub checksum: Option<Checksum>,
}

/// Options for a discovery pass
///
/// The engine's capabilities as named fields rather than a flag word;
/// every field has a safe default.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Compute a content digest for every matched file
    pub checksum: Option<ChecksumAlgorithm>,
    /// Glob patterns that override includes
    pub exclude_patterns: Vec<String>,
    /// Fall back to the built-in image extensions when the pattern is empty
    pub use_default_extensions: bool,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Follow symbolic links
    pub follow_links: bool,
    /// Maximum traversal depth (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            checksum: None,
            exclude_patterns: Vec::new(),
            use_default_extensions: true,
            recursive: true,
            follow_links: false,
            max_depth: None,
        }
    }
}

impl DiscoveryOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a content digest for every matched file
    pub fn with_checksum(mut self, algorithm: ChecksumAlgorithm) -> Self {
        self.checksum = Some(algorithm);
        self
    }

    /// Set exclude patterns (globs, override includes)
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Set whether an empty pattern falls back to the built-in extensions
    pub fn with_default_extensions(mut self, use_defaults: bool) -> Self {
        self.use_default_extensions = use_defaults;
        self
    }

    /// Set recursive traversal
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set the maximum traversal depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Scan `locations` for files matching `pattern`
///
/// Locations are visited in the order supplied; within each location the
/// traversal is depth-first with directory entries sorted by file name,
/// so the returned order is stable for an unchanged tree and the record
/// sequence is reproducible across passes.
///
/// A location that does not exist or cannot be opened contributes zero
/// records and is logged at warn level. Returns an error only when the
/// pattern does not compile.
pub fn discover(
    locations: &[PathBuf],
    pattern: &str,
    options: &DiscoveryOptions,
) -> Result<Vec<FileMeta>> {
    let filter = ImageFilter::for_pattern(pattern, options)?;

    log::debug!(
        "discovering files in {} location(s), pattern {pattern:?}",
        locations.len()
    );

    let mut records = Vec::new();
    for location in locations {
        // Walker construction only fails with an I/O error, and any
        // location-level I/O failure means zero records, not an error.
        let walker = match Walker::new(location, filter.clone(), options) {
            Ok(walker) => walker,
            Err(err) => {
                log::warn!("skipping location: {err}");
                continue;
            }
        };

        records.extend(walker);
    }

    log::debug!("discovered {} file(s)", records.len());

    Ok(records)
}
