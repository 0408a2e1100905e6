//! Integration tests for checksum computation
//!
//! Pins each algorithm to published test vectors and verifies that the
//! streaming file path produces the same digests as the in-memory path.

use std::path::Path;

use bootinv_core::error::{Error, IoErrorKind};
use bootinv_core::{ChecksumAlgorithm, checksum_bytes, checksum_file};
use bootinv_test_utils::ImageTreeBuilder;
use bootinv_test_utils::digests::{
    CRC32_ABC, CRC32_EMPTY, MD5_ABC, MD5_EMPTY, SHA1_ABC, SHA1_EMPTY, SHA256_ABC, SHA256_EMPTY,
};

const ALL_ALGORITHMS: [ChecksumAlgorithm; 4] = [
    ChecksumAlgorithm::Sha256,
    ChecksumAlgorithm::Sha1,
    ChecksumAlgorithm::Md5,
    ChecksumAlgorithm::Crc32,
];

#[test]
fn test_sha256_known_vectors() {
    assert_eq!(
        checksum_bytes(ChecksumAlgorithm::Sha256, b"").digest,
        SHA256_EMPTY
    );
    assert_eq!(
        checksum_bytes(ChecksumAlgorithm::Sha256, b"abc").digest,
        SHA256_ABC
    );
}

#[test]
fn test_sha1_known_vectors() {
    assert_eq!(
        checksum_bytes(ChecksumAlgorithm::Sha1, b"").digest,
        SHA1_EMPTY
    );
    assert_eq!(
        checksum_bytes(ChecksumAlgorithm::Sha1, b"abc").digest,
        SHA1_ABC
    );
}

#[test]
fn test_md5_known_vectors() {
    assert_eq!(checksum_bytes(ChecksumAlgorithm::Md5, b"").digest, MD5_EMPTY);
    assert_eq!(
        checksum_bytes(ChecksumAlgorithm::Md5, b"abc").digest,
        MD5_ABC
    );
}

#[test]
fn test_crc32_known_vectors() {
    assert_eq!(
        checksum_bytes(ChecksumAlgorithm::Crc32, b"").digest,
        CRC32_EMPTY
    );
    assert_eq!(
        checksum_bytes(ChecksumAlgorithm::Crc32, b"abc").digest,
        CRC32_ABC
    );
}

#[test]
fn test_file_digest_matches_bytes_digest() {
    let tree = ImageTreeBuilder::new().file("boot.img", b"abc").build();

    for algorithm in ALL_ALGORITHMS {
        let from_file = checksum_file(algorithm, &tree.path("boot.img")).unwrap();
        let from_bytes = checksum_bytes(algorithm, b"abc");

        assert_eq!(from_file, from_bytes, "algorithm {algorithm}");
    }
}

#[test]
fn test_multi_chunk_file_digest_matches_bytes_digest() {
    // Larger than one read buffer so the file path exercises chunked
    // updates.
    let data: Vec<u8> = (0..200_000).map(|i| (i % 251) as u8).collect();
    let tree = ImageTreeBuilder::new().file("large.img", &data).build();

    let from_file = checksum_file(ChecksumAlgorithm::Sha256, &tree.path("large.img")).unwrap();
    let from_bytes = checksum_bytes(ChecksumAlgorithm::Sha256, &data);

    assert_eq!(from_file.digest, from_bytes.digest);
}

#[test]
fn test_empty_file_digests_like_empty_input() {
    let tree = ImageTreeBuilder::new().file("empty.img", b"").build();

    let checksum = checksum_file(ChecksumAlgorithm::Sha256, &tree.path("empty.img")).unwrap();

    assert_eq!(checksum.digest, SHA256_EMPTY);
}

#[test]
fn test_missing_file_is_a_not_found_error() {
    let result = checksum_file(
        ChecksumAlgorithm::Sha256,
        Path::new("/nonexistent/bootinv/missing.img"),
    );

    match result {
        Err(Error::Io(io_err)) => {
            assert_eq!(io_err.kind, IoErrorKind::NotFound);
            assert_eq!(
                io_err.path.as_deref(),
                Some(Path::new("/nonexistent/bootinv/missing.img"))
            );
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_checksum_display_pairs_algorithm_and_digest() {
    let checksum = checksum_bytes(ChecksumAlgorithm::Sha256, b"abc");
    assert_eq!(checksum.to_string(), format!("sha256:{SHA256_ABC}"));
}
