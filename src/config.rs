use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 本次运行的输入文件（由命令行参数构造，按值传入流程）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPaths {
    /// 汇总文件
    pub reference: PathBuf,
    /// 明细文件
    pub target: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
}

/// 日志输出设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub info_path: PathBuf,
    pub error_path: PathBuf,
    /// info日志的最低级别 (trace/debug/info/warn)
    pub level: String,
    pub info_rotation: RotationPolicy,
    pub error_rotation: RotationPolicy,
}

/// 日志切割策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPolicy {
    pub max_size_mb: u64,
    pub max_backups: usize,
    pub compress: bool,
    /// 备份文件保留天数，0表示不按时间清理
    #[serde(default)]
    pub max_age_days: u64,
}

impl RotationPolicy {
    pub fn max_size_bytes(&self) -> usize {
        (self.max_size_mb as usize).saturating_mul(1024 * 1024)
    }

    pub fn max_age(&self) -> Option<Duration> {
        (self.max_age_days > 0).then(|| Duration::from_secs(self.max_age_days * 24 * 60 * 60))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            info_path: PathBuf::from("info.log"),
            error_path: PathBuf::from("err.log"),
            level: "info".into(),
            info_rotation: RotationPolicy {
                max_size_mb: 1,
                max_backups: 5,
                compress: false,
                max_age_days: 3,
            },
            error_rotation: RotationPolicy {
                max_size_mb: 10,
                max_backups: 300,
                compress: false,
                max_age_days: 60,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 配置文件不存在时返回默认配置
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatchError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("ib-match").join("config.json"))
    }
}
