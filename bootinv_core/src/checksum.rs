//! Content checksum computation for discovered files
//!
//! The discovery engine's checksum capability is backed by this module:
//! a streaming digest trait with one implementation per algorithm, plus
//! helpers for whole-buffer and whole-file digests. File digests read
//! synchronously in fixed-size chunks, so memory use stays flat no
//! matter how large an image is.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, IoError, Result, ValidationError};

mod algorithms;

/// Chunk size for file digests
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Checksum algorithms supported by the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    /// SHA-256, the default for boot image records
    Sha256,
    /// SHA-1
    Sha1,
    /// MD5
    Md5,
    /// CRC-32 (IEEE)
    Crc32,
}

impl ChecksumAlgorithm {
    /// Create a fresh streaming digester for this algorithm
    pub fn digester(&self) -> Box<dyn StreamingDigest> {
        match self {
            Self::Sha256 => Box::new(algorithms::Sha256Digester::new()),
            Self::Sha1 => Box::new(algorithms::Sha1Digester::new()),
            Self::Md5 => Box::new(algorithms::Md5Digester::new()),
            Self::Crc32 => Box::new(algorithms::Crc32Digester::new()),
        }
    }
}

impl std::fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecksumAlgorithm::Sha256 => write!(f, "sha256"),
            ChecksumAlgorithm::Sha1 => write!(f, "sha1"),
            ChecksumAlgorithm::Md5 => write!(f, "md5"),
            ChecksumAlgorithm::Crc32 => write!(f, "crc32"),
        }
    }
}

impl std::str::FromStr for ChecksumAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha256" => Ok(ChecksumAlgorithm::Sha256),
            "sha1" => Ok(ChecksumAlgorithm::Sha1),
            "md5" => Ok(ChecksumAlgorithm::Md5),
            "crc32" => Ok(ChecksumAlgorithm::Crc32),
            _ => Err(Error::Validation(ValidationError::invalid_configuration(
                &format!("unknown checksum algorithm: {s}"),
            ))),
        }
    }
}

/// A computed content digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    /// Algorithm that produced the digest
    pub algorithm: ChecksumAlgorithm,
    /// Lower-case hex digest
    pub digest: String,
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.digest)
    }
}

/// Streaming digest over chunks of input
///
/// Implementations accept input in any chunking; equal content yields
/// equal digests regardless of how it was split.
pub trait StreamingDigest: Send {
    /// Feed the next chunk of input
    fn update(&mut self, data: &[u8]);

    /// Consume the digester and return the lower-case hex digest
    fn finalize(self: Box<Self>) -> String;
}

/// Digest an in-memory buffer
pub fn checksum_bytes(algorithm: ChecksumAlgorithm, data: &[u8]) -> Checksum {
    let mut digester = algorithm.digester();
    digester.update(data);

    Checksum {
        algorithm,
        digest: digester.finalize(),
    }
}

/// Digest the full content of a file
///
/// Reads the file in 64 KiB chunks and blocks until done. Fails with a
/// typed I/O error carrying the path when the file cannot be opened or
/// read.
pub fn checksum_file(algorithm: ChecksumAlgorithm, path: &Path) -> Result<Checksum> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::Io(IoError::not_found(path)),
        std::io::ErrorKind::PermissionDenied => Error::Io(IoError::permission_denied(path, e)),
        _ => Error::Io(IoError::from_std(e).with_path(path)),
    })?;

    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    let mut digester = algorithm.digester();

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| Error::Io(IoError::from_std(e).with_path(path)))?;

        if bytes_read == 0 {
            break;
        }

        digester.update(&buffer[..bytes_read]);
    }

    Ok(Checksum {
        algorithm,
        digest: digester.finalize(),
    })
}
