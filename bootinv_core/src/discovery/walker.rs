//! Streaming traversal of a single search location
//!
//! Wraps walkdir with the engine's skip policy: anything that cannot be
//! read is logged at warn level and dropped, so the iterator itself
//! never yields an error. Directory entries are visited in sorted order
//! to keep the record sequence stable across passes.

use std::path::Path;
use walkdir::WalkDir;

use super::{DiscoveryOptions, FileMeta, ImageFilter};
use crate::checksum::{ChecksumAlgorithm, checksum_file};
use crate::error::IoError;

/// Streaming iterator over the matching files of one location
pub struct Walker {
    entries: walkdir::IntoIter,
    filter: ImageFilter,
    checksum: Option<ChecksumAlgorithm>,
}

impl Walker {
    /// Start a traversal rooted at `root`
    ///
    /// Construction can only fail with an I/O error; today that is a
    /// missing root. [`discover`](super::discover) turns every
    /// construction failure into a skipped location.
    pub fn new(
        root: &Path,
        filter: ImageFilter,
        options: &DiscoveryOptions,
    ) -> Result<Self, IoError> {
        if !root.exists() {
            return Err(IoError::not_found(root));
        }

        let mut walkdir = WalkDir::new(root)
            .follow_links(options.follow_links)
            .sort_by_file_name();

        if !options.recursive {
            walkdir = walkdir.max_depth(1);
        } else if let Some(depth) = options.max_depth {
            walkdir = walkdir.max_depth(depth);
        }

        Ok(Self {
            entries: walkdir.into_iter(),
            filter,
            checksum: options.checksum,
        })
    }
}

impl Iterator for Walker {
    type Item = FileMeta;

    fn next(&mut self) -> Option<FileMeta> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if !self.filter.matches(entry.path()) {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    log::warn!(
                        "skipping {}: metadata unavailable: {err}",
                        entry.path().display()
                    );
                    continue;
                }
            };

            // A file whose content cannot be read when a digest was
            // requested is dropped whole rather than reported half-filled.
            let checksum = match self.checksum {
                None => None,
                Some(algorithm) => match checksum_file(algorithm, entry.path()) {
                    Ok(checksum) => Some(checksum),
                    Err(err) => {
                        log::warn!("skipping {}: {err}", entry.path().display());
                        continue;
                    }
                },
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let size = metadata.len();
            let modified = metadata.modified().ok();

            return Some(FileMeta {
                name,
                path: entry.into_path(),
                size,
                modified,
                checksum,
            });
        }
    }
}
