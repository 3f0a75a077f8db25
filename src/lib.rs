//! 汇总表 → 明细表 IB编码匹配
//!
//! 1. [`reference`] 读取汇总表，建立 原编码 → IB编码 映射
//! 2. [`annotator`] 为明细表每个工作表插入J列并写入匹配结果，另存为 `-new` 文件

pub mod annotator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod reference;
