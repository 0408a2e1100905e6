//! SHA-1 digest implementation

use crate::checksum::StreamingDigest;
use sha1::{Digest as Sha1Digest, Sha1};

/// SHA-1 streaming digester
pub(crate) struct Sha1Digester {
    hasher: Sha1,
}

impl Sha1Digester {
    pub(crate) fn new() -> Self {
        Self {
            hasher: Sha1::new(),
        }
    }
}

impl StreamingDigest for Sha1Digester {
    fn update(&mut self, data: &[u8]) {
        Sha1Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Sha1Digest::finalize(self.hasher))
    }
}
