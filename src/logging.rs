//! 日志初始化
//!
//! info日志（DEBUG..WARN）与error日志（ERROR）分别写入两个按大小切割的文件，
//! 每条记录为JSON对象。

use crate::config::{LogConfig, RotationPolicy};
use crate::error::{MatchError, Result};
use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// 日志时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// 全局日志订阅者只能安装一次，重复调用返回错误
pub fn init(config: &LogConfig, verbose: bool) -> Result<()> {
    let threshold = if verbose {
        LevelFilter::DEBUG
    } else {
        parse_level(&config.level)?
    };

    let info_writer = rotating_writer(&config.info_path, &config.info_rotation)?;
    let error_writer = rotating_writer(&config.error_path, &config.error_rotation)?;

    let info_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(Mutex::new(info_writer))
        .with_filter(filter_fn(move |meta| {
            *meta.level() != Level::ERROR && threshold >= *meta.level()
        }));

    let error_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(Mutex::new(error_writer))
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(info_layer)
        .with(error_layer)
        .try_init()
        .map_err(|e| MatchError::Logging(e.to_string()))
}

/// "info" / "DEBUG" / "off" 等
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| MatchError::Config(format!("无效的日志级别: {}", level)))
}

fn rotating_writer(path: &Path, policy: &RotationPolicy) -> Result<FileRotate<AppendCount>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    prune_expired_backups(path, policy, SystemTime::now())?;

    let compression = if policy.compress {
        Compression::OnRotate(0)
    } else {
        Compression::None
    };

    Ok(FileRotate::new(
        path,
        AppendCount::new(policy.max_backups),
        ContentLimit::Bytes(policy.max_size_bytes()),
        compression,
        #[cfg(unix)]
        None,
    ))
}

/// 删除修改时间早于保留期限的备份（`<path>.N` / `<path>.N.gz`），返回删除数量。
/// file-rotate只按数量淘汰，保留天数在每次打开日志时清理。
pub fn prune_expired_backups(path: &Path, policy: &RotationPolicy, now: SystemTime) -> Result<usize> {
    let Some(cutoff) = policy.max_age().and_then(|age| now.checked_sub(age)) else {
        return Ok(0);
    };

    let mut removed = 0;
    for n in 1..=policy.max_backups {
        for backup in [backup_path(path, n, ""), backup_path(path, n, ".gz")] {
            let Ok(modified) = std::fs::metadata(&backup).and_then(|m| m.modified()) else {
                continue;
            };
            if modified < cutoff {
                std::fs::remove_file(&backup)?;
                removed += 1;
            }
        }
    }
    Ok(removed)
}

fn backup_path(path: &Path, n: usize, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{}{}", n, ext));
    PathBuf::from(name)
}
