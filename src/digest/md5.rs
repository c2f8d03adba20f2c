use ::md5::{Digest, Md5};

use crate::digest::Digester;

/// MD5
///
/// 输出128比特（16字节）的摘要，十六进制编码后长度为32
///
/// 注意：MD5已不具备抗碰撞性，这里仅用于序列号的确定性变换
pub struct DigestMode;

impl DigestMode {
    pub fn new() -> Self {
        DigestMode
    }
}

impl Digester for DigestMode {
    fn digest_bytes(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = Md5::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }
}


#[cfg(test)]
mod tests {
    use crate::digest::Digester;
    use crate::digest::md5::DigestMode;

    #[test]
    fn empty() {
        let hash = DigestMode::new().digest("");
        assert_eq!(hash, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn abc() {
        let hash = DigestMode::new().digest("abc");
        assert_eq!(hash, "900150983cd24fb0d6963f7d28e17f72");
    }
}
