//! MD5 digest implementation

use crate::checksum::StreamingDigest;
use md5::{Digest as Md5Digest, Md5};

/// MD5 streaming digester
pub(crate) struct Md5Digester {
    hasher: Md5,
}

impl Md5Digester {
    pub(crate) fn new() -> Self {
        Self { hasher: Md5::new() }
    }
}

impl StreamingDigest for Md5Digester {
    fn update(&mut self, data: &[u8]) {
        Md5Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Md5Digest::finalize(self.hasher))
    }
}
