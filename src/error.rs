use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("缺少参数: {0}")]
    MissingArgument(&'static str),

    #[error("打开文件失败: {path}: {message}")]
    FileOpen { path: String, message: String },

    #[error("读取工作表失败: {sheet}: {message}")]
    SheetRead { sheet: String, message: String },

    #[error("工作表不存在: {0}")]
    SheetNotFound(String),

    #[error("写入单元格失败: {sheet}!{cell}: {message}")]
    CellWrite {
        sheet: String,
        cell: String,
        message: String,
    },

    #[error("样式错误: {0}")]
    Style(String),

    #[error("保存文件失败: {path}: {message}")]
    Save { path: String, message: String },

    #[error("日志初始化失败: {0}")]
    Logging(String),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    /// 致命错误：终止本次运行。其余错误只记录日志后继续处理。
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MatchError::Config(_)
                | MatchError::MissingArgument(_)
                | MatchError::FileOpen { .. }
                | MatchError::SheetRead { .. }
                | MatchError::Logging(_)
                | MatchError::JsonParse(_)
                | MatchError::Io(_)
        )
    }

    /// 进程退出码：致命错误为1，其余为0
    pub fn exit_status(&self) -> u8 {
        if self.is_fatal() {
            1
        } else {
            0
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
