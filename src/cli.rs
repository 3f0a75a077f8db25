use crate::config::MatchPaths;
use crate::error::{MatchError, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// 汇总文件未指定时的提示
pub const MISSING_REFERENCE_PROMPT: &str = "请输入汇总文件路径";
/// 明细文件未指定时的提示
pub const MISSING_TARGET_PROMPT: &str = "请输入明细文件路径";

/// 单横线长参数名（`-hz`, `-mx`）
const LEGACY_FLAGS: &[&str] = &["hz", "mx"];

#[derive(Parser, Debug)]
#[command(name = "ib-match")]
#[command(about = "按汇总表为明细表插入IB编码列", long_about = None)]
pub struct Cli {
    /// 汇总文件路径（含「汇总」工作表）
    #[arg(long = "hz", value_name = "PATH")]
    pub hz: Option<PathBuf>,

    /// 明细文件路径（输出为 <文件名>-new.xlsx）
    #[arg(long = "mx", value_name = "PATH")]
    pub mx: Option<PathBuf>,

    /// 输出DEBUG级别日志（每个单元格的写入）
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 解析进程参数，兼容 `-hz 路径` / `-hz=路径` 写法
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// 两个路径都必须指定
    pub fn paths(&self) -> Result<MatchPaths> {
        let reference = self
            .hz
            .clone()
            .ok_or(MatchError::MissingArgument(MISSING_REFERENCE_PROMPT))?;
        let target = self
            .mx
            .clone()
            .ok_or(MatchError::MissingArgument(MISSING_TARGET_PROMPT))?;

        Ok(MatchPaths { reference, target })
    }
}

/// `-hz` → `--hz`，`-mx=a.xlsx` → `--mx=a.xlsx`，其余参数原样保留
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split('=').next().unwrap_or(rest);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}
