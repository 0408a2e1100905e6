//! Checksum algorithm implementations
//!
//! One module per algorithm, each pairing a digester struct with the
//! [`StreamingDigest`](crate::checksum::StreamingDigest) contract.

mod crc32;
mod md5;
mod sha1;
mod sha256;

pub(crate) use crc32::Crc32Digester;
pub(crate) use md5::Md5Digester;
pub(crate) use sha1::Sha1Digester;
pub(crate) use sha256::Sha256Digester;
