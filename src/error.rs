use thiserror::Error;

/// 命令行读写错误，摘要计算本身不会失败
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read serial number: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to write digest: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
