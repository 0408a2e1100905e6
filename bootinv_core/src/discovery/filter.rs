//! Pattern matching over discovered paths
//!
//! Compiles the configured pattern into a globset matcher with optional
//! excludes. Exclude patterns always win over includes.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

use super::DiscoveryOptions;
use super::patterns::{DEFAULT_IMAGE_EXTENSIONS, extension_patterns};
use crate::error::{Error, Result, ValidationError};

/// A compiled set of glob patterns
#[derive(Debug, Clone)]
pub(crate) struct PatternSet {
    globs: GlobSet,
}

impl PatternSet {
    /// Compile glob patterns, failing on the first invalid one
    pub(crate) fn compile(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                Error::Validation(ValidationError::invalid_pattern(pattern, &e.to_string()))
            })?;
            builder.add(glob);
        }

        let globs = builder.build().map_err(|e| {
            Error::Validation(ValidationError::invalid_pattern(
                &patterns.join(", "),
                &e.to_string(),
            ))
        })?;

        Ok(Self { globs })
    }

    /// Whether any pattern matches the path
    pub(crate) fn matches(&self, path: &Path) -> bool {
        self.globs.is_match(path)
    }
}

/// Include/exclude filter applied to every candidate file
///
/// Matching semantics, which callers of the engine rely on:
/// 1. a path matching an exclude pattern is rejected, always;
/// 2. with no include patterns, everything else is accepted;
/// 3. otherwise the path must match an include pattern.
///
/// Globs are matched against the full path with globset defaults, so
/// `*.img` matches at any depth.
#[derive(Debug, Clone)]
pub struct ImageFilter {
    include: Option<PatternSet>,
    exclude: Option<PatternSet>,
}

impl ImageFilter {
    /// Build a filter from explicit include and exclude glob lists
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let include = if include_patterns.is_empty() {
            None
        } else {
            Some(PatternSet::compile(include_patterns)?)
        };

        let exclude = if exclude_patterns.is_empty() {
            None
        } else {
            Some(PatternSet::compile(exclude_patterns)?)
        };

        Ok(Self { include, exclude })
    }

    /// Build the filter for a discovery pattern
    ///
    /// A pattern starting with `.` is an extension suffix and expands to
    /// a lower/upper-case glob pair; an empty pattern expands to the
    /// built-in image extensions when the options allow it, or matches
    /// everything when they do not; anything else is used as a glob
    /// verbatim. Excludes come from the options.
    pub fn for_pattern(pattern: &str, options: &DiscoveryOptions) -> Result<Self> {
        let include = if pattern.is_empty() {
            if options.use_default_extensions {
                extension_patterns(DEFAULT_IMAGE_EXTENSIONS)
            } else {
                Vec::new()
            }
        } else if let Some(extension) = pattern.strip_prefix('.') {
            extension_patterns(&[extension])
        } else {
            vec![pattern.to_string()]
        };

        Self::new(&include, &options.exclude_patterns)
    }

    /// Whether a path passes the filter
    pub fn matches(&self, path: &Path) -> bool {
        if let Some(exclude) = &self.exclude
            && exclude.matches(path)
        {
            return false;
        }

        match &self.include {
            Some(include) => include.matches(path),
            None => true,
        }
    }
}
