pub use self::core::Plan;

mod core;

/// 计算序列号的摘要
///
/// 序列号中大写字母'E'的个数为0或奇数时，做一次SHA-256；
/// 个数为正偶数时，对序列号迭代做该个数次MD5，每次以上一次的16进制字符串作为输入。
pub fn hash(serial: &str) -> String {
    core::Crypto::new(serial).single().iterate().output()
}

/// 计算序列号的摘要路径，不做任何哈希运算
pub fn plan(serial: &str) -> Plan {
    Plan::of(serial)
}
