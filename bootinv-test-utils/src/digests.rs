//! Known-answer digest vectors
//!
//! Published test vectors for the supported algorithms, used to pin the
//! hex encoding produced by the checksum module.

/// SHA-256 of the empty input.
pub const SHA256_EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// SHA-256 of `"abc"`.
pub const SHA256_ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

/// SHA-1 of the empty input.
pub const SHA1_EMPTY: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

/// SHA-1 of `"abc"`.
pub const SHA1_ABC: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

/// MD5 of the empty input.
pub const MD5_EMPTY: &str = "d41d8cd98f00b204e9800998ecf8427e";

/// MD5 of `"abc"`.
pub const MD5_ABC: &str = "900150983cd24fb0d6963f7d28e17f72";

/// CRC32 of the empty input.
pub const CRC32_EMPTY: &str = "00000000";

/// CRC32 of `"abc"`.
pub const CRC32_ABC: &str = "352441c2";
