//! Typed configuration for inventory loading
//!
//! Explicit structs passed by reference; how they are produced (files,
//! flags, hardcoded defaults) is the caller's business. The shape keeps
//! the location/pattern split of the boot service configuration this
//! library serves: search roots per domain, one name pattern per domain.

use std::path::PathBuf;

use crate::discovery::{DiscoveryOptions, ImageFilter};
use crate::error::{Error, Result, ValidationError};

/// Search roots per artifact domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations {
    /// Directories scanned for boot images
    pub images: Vec<PathBuf>,
}

/// Name patterns per artifact domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patterns {
    /// Pattern for boot image files, e.g. `".img"`
    ///
    /// Empty means the built-in image extension set.
    pub image_ext: String,
}

/// Configuration consumed by the inventory loaders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Where to search
    pub locations: Locations,
    /// What to match
    pub patterns: Patterns,
}

impl Config {
    /// Create a configuration from its parts
    pub fn new(locations: Locations, patterns: Patterns) -> Self {
        Self {
            locations,
            patterns,
        }
    }

    /// A configuration for one set of image locations and a pattern
    pub fn for_images(images: Vec<PathBuf>, image_ext: &str) -> Self {
        Self {
            locations: Locations { images },
            patterns: Patterns {
                image_ext: image_ext.to_string(),
            },
        }
    }

    /// Reject configurations that can never produce a record
    ///
    /// Checks that at least one image location is configured and that
    /// the image pattern compiles. Never touches the filesystem, and the
    /// loaders do not call it on their own: missing directories at load
    /// time are an ordinary empty result, not a configuration error.
    pub fn validate(&self) -> Result<()> {
        if self.locations.images.is_empty() {
            return Err(Error::Validation(ValidationError::missing_locations(
                "images",
            )));
        }

        ImageFilter::for_pattern(&self.patterns.image_ext, &DiscoveryOptions::default())?;

        Ok(())
    }
}
