//! Boot image discovery and inventory
//!
//! Scans configured search locations for boot image files, matches them
//! against name/extension patterns, optionally computes a content
//! checksum per file, and projects the results into a typed inventory of
//! [`BootImage`] records.
//!
//! The crate splits into a generic layer and a domain layer: the
//! [`discovery`] engine walks locations and produces [`FileMeta`]
//! records for any file domain, while [`images`] wraps those records
//! into the boot image domain that network boot services load from
//! their image drop directories. [`checksum`] backs the engine's digest
//! capability, [`config`] carries the typed location/pattern
//! configuration, and [`error`] holds the taxonomy everything reports
//! through.

pub mod checksum;
pub mod config;
pub mod discovery;
pub mod error;
pub mod images;

// Re-export main types
pub use checksum::{Checksum, ChecksumAlgorithm, checksum_bytes, checksum_file};
pub use config::{Config, Locations, Patterns};
pub use discovery::{DiscoveryOptions, FileMeta, ImageFilter, Walker, discover};
pub use error::{Error, Result};
pub use images::{BootImage, DEFAULT_IMAGE_CHECKSUM, load_images, load_images_with};
