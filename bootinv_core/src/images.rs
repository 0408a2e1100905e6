//! Boot image inventory
//!
//! Projects discovery records into the boot image domain: one
//! [`BootImage`] per record, in the order the engine returned them. The
//! loaders are pure functions returning a fresh collection; callers that
//! accumulate across loads pick their own append or replace semantics.
//! Nothing here deduplicates, so extending a collection with a second
//! load of the same configuration doubles its entries.

use std::path::Path;

use crate::checksum::{Checksum, ChecksumAlgorithm};
use crate::config::Config;
use crate::discovery::{self, DiscoveryOptions, FileMeta};
use crate::error::Result;

/// Digest recorded for images loaded through [`load_images`]
pub const DEFAULT_IMAGE_CHECKSUM: ChecksumAlgorithm = ChecksumAlgorithm::Sha256;

/// A boot image known to the inventory
///
/// Thin wrapper around exactly one discovery record; it never aggregates
/// records and never synthesizes fields of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootImage {
    meta: FileMeta,
}

impl BootImage {
    /// The discovery record backing this image
    pub fn meta(&self) -> &FileMeta {
        &self.meta
    }

    /// File name of the image
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Full path of the image
    pub fn path(&self) -> &Path {
        &self.meta.path
    }

    /// Size of the image in bytes
    pub fn size(&self) -> u64 {
        self.meta.size
    }

    /// Content digest, when one was computed
    pub fn checksum(&self) -> Option<&Checksum> {
        self.meta.checksum.as_ref()
    }

    /// Unwrap the backing record
    pub fn into_meta(self) -> FileMeta {
        self.meta
    }
}

impl From<FileMeta> for BootImage {
    fn from(meta: FileMeta) -> Self {
        Self { meta }
    }
}

/// Load the boot image inventory described by `config`
///
/// Invokes the discovery engine exactly once over the configured image
/// locations and pattern, requesting a SHA-256 digest for every matched
/// file, and wraps each record 1:1 into a [`BootImage`]. An empty result
/// means nothing matched; missing locations do not fail the load.
pub fn load_images(config: &Config) -> Result<Vec<BootImage>> {
    load_images_with(
        config,
        &DiscoveryOptions::new().with_checksum(DEFAULT_IMAGE_CHECKSUM),
    )
}

/// Load the boot image inventory with caller-supplied discovery options
///
/// Options are forwarded to the engine unchanged, so a load without a
/// checksum capability yields records whose checksum field is `None`.
pub fn load_images_with(config: &Config, options: &DiscoveryOptions) -> Result<Vec<BootImage>> {
    let records = discovery::discover(
        &config.locations.images,
        &config.patterns.image_ext,
        options,
    )?;

    Ok(records.into_iter().map(BootImage::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn record(name: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            path: PathBuf::from("/srv/images").join(name),
            size: 512,
            modified: Some(SystemTime::UNIX_EPOCH),
            checksum: None,
        }
    }

    #[test]
    fn test_boot_image_wraps_one_record() {
        let meta = record("boot.img");
        let image = BootImage::from(meta.clone());

        assert_eq!(image.meta(), &meta);
        assert_eq!(image.name(), "boot.img");
        assert_eq!(image.path(), Path::new("/srv/images/boot.img"));
        assert_eq!(image.size(), 512);
        assert!(image.checksum().is_none());
        assert_eq!(image.into_meta(), meta);
    }

    #[test]
    fn test_projection_preserves_record_identity() {
        let records = vec![record("a.img"), record("b.img"), record("c.img")];
        let images: Vec<BootImage> = records.clone().into_iter().map(BootImage::from).collect();

        for (image, meta) in images.iter().zip(&records) {
            assert_eq!(image.meta(), meta);
        }
    }

    #[test]
    fn test_loading_nonexistent_locations_yields_empty_inventory() {
        let config =
            Config::for_images(vec![PathBuf::from("/nonexistent/bootinv/images")], ".img");

        let images = load_images(&config).unwrap();
        assert!(images.is_empty());
    }
}
