mod sha256;
mod md5;


/// 摘要算法
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// 256比特摘要
    Sha256,
    /// 128比特摘要
    Md5,
}

impl Algorithm {
    /// 摘要的字节长度
    pub fn output_size(&self) -> usize {
        match self {
            Algorithm::Sha256 => 32,
            Algorithm::Md5 => 16,
        }
    }

    /// 十六进制编码后的字符串长度
    pub fn hex_len(&self) -> usize {
        self.output_size() * 2
    }
}

pub trait Digester {
    fn digest_bytes(&self, data: &[u8]) -> Vec<u8>;

    /// 计算摘要，返回由小写16进制字符组成的字符串
    fn digest(&self, data: &str) -> String {
        hex::encode(self.digest_bytes(data.as_bytes()))
    }
}

pub struct DigestFactory;


impl DigestFactory {
    pub fn new(algorithm: Algorithm) -> Box<dyn Digester> {
        match algorithm {
            Algorithm::Sha256 => Box::new(sha256::DigestMode::new()),
            Algorithm::Md5 => Box::new(md5::DigestMode::new()),
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::digest::{Algorithm, DigestFactory};

    #[test]
    fn output_length() {
        for algorithm in [Algorithm::Sha256, Algorithm::Md5] {
            let d = DigestFactory::new(algorithm);
            assert_eq!(d.digest_bytes(b"abc").len(), algorithm.output_size());
            assert_eq!(d.digest("abc").len(), algorithm.hex_len());
        }
    }

    #[test]
    fn lowercase_hex() {
        let d = DigestFactory::new(Algorithm::Sha256);
        let hash = d.digest("B09876543E");
        assert!(hash.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}
