use tracing::{debug, trace};

use crate::digest::{Algorithm, DigestFactory, Digester};

/// 计数字符，区分大小写
const MARKER: char = 'E';


/// 序列号的摘要路径
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    /// 'E'的个数
    pub count: usize,
    /// 是否做一次SHA-256
    pub single: bool,
    /// MD5迭代次数
    pub rounds: usize,
}

impl Plan {
    pub fn of(serial: &str) -> Self {
        let count = serial.matches(MARKER).count();
        Plan {
            count,
            single: count == 0 || count % 2 != 0,
            rounds: if count % 2 == 0 { count } else { 0 },
        }
    }
}


pub struct Crypto {
    data: String,
    plan: Plan,
    sha256: Box<dyn Digester>,
    md5: Box<dyn Digester>,
}

impl Crypto {
    pub fn new(serial: &str) -> Self {
        let plan = Plan::of(serial);
        debug!(count = plan.count, single = plan.single, rounds = plan.rounds, "serial number plan");
        Crypto {
            data: serial.to_string(),
            plan,
            sha256: DigestFactory::new(Algorithm::Sha256),
            md5: DigestFactory::new(Algorithm::Md5),
        }
    }

    /// 'E'的个数为0或奇数：做一次SHA-256
    pub fn single(&mut self) -> &mut Self {
        let count = self.plan.count;
        if count == 0 || count % 2 != 0 {
            self.data = self.sha256.digest(&self.data);
        }
        self
    }

    /// 'E'的个数为偶数：迭代做count次MD5，个数为0时不迭代。
    /// 与single相互独立判断，不是if/else关系
    pub fn iterate(&mut self) -> &mut Self {
        let count = self.plan.count;
        if count % 2 == 0 {
            for round in 0..count {
                self.data = self.md5.digest(&self.data);
                trace!(round, digest = %self.data, "md5 round");
            }
        }
        self
    }

    pub fn output(&self) -> String {
        self.data.clone()
    }
}
