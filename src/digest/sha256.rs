use sha2::{Digest, Sha256};

use crate::digest::Digester;

/// SHA-256
///
/// 输出256比特（32字节）的摘要，十六进制编码后长度为64
pub struct DigestMode;

impl DigestMode {
    pub fn new() -> Self {
        DigestMode
    }
}

impl Digester for DigestMode {
    fn digest_bytes(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }
}
