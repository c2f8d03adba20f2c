use std::io::{self, Write};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use serialhash::{input, serial, Error};

/// 计算序列号的摘要：'E'的个数为0或奇数时SHA-256一次，为正偶数时迭代MD5
#[derive(Parser)]
#[command(name = "serialhash", version, about, long_about = None)]
struct Cli {
    /// 序列号；省略时从标准输入读取一行
    serial: Option<String>,

    /// 输出摘要路径（'E'的个数、算法、迭代次数）
    #[arg(long)]
    explain: bool,

    /// 只输出错误日志
    #[arg(short, long)]
    quiet: bool,

    /// 日志详细程度（-v 为 debug，-vv 为 trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 if cli.explain => "info",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let serial = match cli.serial {
        Some(serial) => serial,
        None => input::read_serial(&mut io::stdin().lock())?,
    };
    debug!(len = serial.len(), "serial number read");

    if cli.explain {
        let plan = serial::plan(&serial);
        info!(count = plan.count, sha256 = plan.single, md5_rounds = plan.rounds, "plan");
    }

    let digest = serial::hash(&serial);
    let mut out = io::stdout().lock();
    writeln!(out, "{}", digest).map_err(Error::Output)?;
    Ok(())
}
