//! CRC-32 (IEEE) digest implementation

use crate::checksum::StreamingDigest;
use crc32fast::Hasher as Crc32Hasher;

/// CRC-32 streaming digester
pub(crate) struct Crc32Digester {
    hasher: Crc32Hasher,
}

impl Crc32Digester {
    pub(crate) fn new() -> Self {
        Self {
            hasher: Crc32Hasher::new(),
        }
    }
}

impl StreamingDigest for Crc32Digester {
    fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:08x}", self.hasher.finalize())
    }
}
