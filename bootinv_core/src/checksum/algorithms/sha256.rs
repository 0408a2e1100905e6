//! SHA-256 digest implementation

use crate::checksum::StreamingDigest;
use sha2::{Digest as Sha256Digest, Sha256};

/// SHA-256 streaming digester
pub(crate) struct Sha256Digester {
    hasher: Sha256,
}

impl Sha256Digester {
    pub(crate) fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }
}

impl StreamingDigest for Sha256Digester {
    fn update(&mut self, data: &[u8]) {
        Sha256Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Sha256Digest::finalize(self.hasher))
    }
}
