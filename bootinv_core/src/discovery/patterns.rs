//! Built-in boot image extensions
//!
//! Used when discovery runs with an empty pattern and the default
//! fallback enabled.

/// Disk image extensions recognized by default
pub const DISK_IMAGE_EXTENSIONS: &[&str] = &[
    "img", "iso", "raw", "qcow", "qcow2", "vdi", "vhd", "vhdx", "vmdk",
];

/// Kernel and firmware image extensions recognized by default
pub const KERNEL_IMAGE_EXTENSIONS: &[&str] = &["bzi", "efi", "uki"];

/// All default image extensions combined
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &[
    // Disk images
    "img", "iso", "raw", "qcow", "qcow2", "vdi", "vhd", "vhdx", "vmdk",
    // Kernel and firmware images
    "bzi", "efi", "uki",
];

/// Convert bare extensions to glob patterns matching either letter case
///
/// `"img"` becomes `*.img` and `*.IMG`. A mixed-case name such as
/// `boot.Img` matches neither; only all-lower and all-upper suffixes
/// are in contract.
pub fn extension_patterns(extensions: &[&str]) -> Vec<String> {
    extensions
        .iter()
        .flat_map(|ext| [format!("*.{ext}"), format!("*.{}", ext.to_uppercase())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_extensions_are_unique() {
        let mut seen = HashSet::new();
        for ext in DEFAULT_IMAGE_EXTENSIONS {
            assert!(seen.insert(ext), "duplicate extension: {ext}");
        }
    }

    #[test]
    fn test_default_extensions_cover_both_groups() {
        for ext in DISK_IMAGE_EXTENSIONS.iter().chain(KERNEL_IMAGE_EXTENSIONS) {
            assert!(
                DEFAULT_IMAGE_EXTENSIONS.contains(ext),
                "missing extension: {ext}"
            );
        }
        assert_eq!(
            DEFAULT_IMAGE_EXTENSIONS.len(),
            DISK_IMAGE_EXTENSIONS.len() + KERNEL_IMAGE_EXTENSIONS.len()
        );
    }

    #[test]
    fn test_extension_patterns_generate_case_pairs() {
        let patterns = extension_patterns(&["img", "iso"]);

        assert_eq!(patterns.len(), 4);
        assert!(patterns.contains(&"*.img".to_string()));
        assert!(patterns.contains(&"*.IMG".to_string()));
        assert!(patterns.contains(&"*.iso".to_string()));
        assert!(patterns.contains(&"*.ISO".to_string()));
    }
}
