//! 错误类型测试
//!
//! 致命/可恢复两级分类与消息内容

use ib_match::error::MatchError;

/// Display实现
#[test]
fn test_error_display() {
    let errors = vec![
        MatchError::Config("测试配置错误".to_string()),
        MatchError::MissingArgument("请输入汇总文件路径"),
        MatchError::FileOpen {
            path: "汇总.xlsx".to_string(),
            message: "not found".to_string(),
        },
        MatchError::SheetRead {
            sheet: "汇总".to_string(),
            message: "missing".to_string(),
        },
        MatchError::SheetNotFound("Sheet9".to_string()),
        MatchError::CellWrite {
            sheet: "明细".to_string(),
            cell: "J2".to_string(),
            message: "locked".to_string(),
        },
        MatchError::Style("无效的颜色".to_string()),
        MatchError::Save {
            path: "明细-new.xlsx".to_string(),
            message: "permission denied".to_string(),
        },
        MatchError::Logging("already set".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "错误消息为空: {:?}", err);
    }
}

#[test]
fn test_context_in_message() {
    let err = MatchError::CellWrite {
        sheet: "明细".to_string(),
        cell: "J7".to_string(),
        message: "locked".to_string(),
    };
    let display = err.to_string();
    assert!(display.contains("明细!J7"));
    assert!(display.contains("locked"));

    let err = MatchError::MissingArgument("请输入明细文件路径");
    assert!(err.to_string().contains("请输入明细文件路径"));
}

/// 致命：参数缺失、汇总表打开/读取失败
#[test]
fn test_fatal_errors() {
    assert!(MatchError::MissingArgument("x").is_fatal());
    assert!(MatchError::FileOpen {
        path: String::new(),
        message: String::new()
    }
    .is_fatal());
    assert!(MatchError::SheetRead {
        sheet: String::new(),
        message: String::new()
    }
    .is_fatal());
}

/// 可恢复：标注过程中的单元格、样式、保存失败
#[test]
fn test_recoverable_errors() {
    assert!(!MatchError::SheetNotFound("S".into()).is_fatal());
    assert!(!MatchError::Style("S".into()).is_fatal());
    assert!(!MatchError::CellWrite {
        sheet: String::new(),
        cell: String::new(),
        message: String::new()
    }
    .is_fatal());
    assert!(!MatchError::Save {
        path: String::new(),
        message: String::new()
    }
    .is_fatal());
}

/// 退出码由致命程度决定
#[test]
fn test_exit_status_follows_severity() {
    assert_eq!(MatchError::MissingArgument("请输入汇总文件路径").exit_status(), 1);
    assert_eq!(MatchError::Logging("already set".into()).exit_status(), 1);
    assert_eq!(
        MatchError::FileOpen {
            path: "明细.xlsx".to_string(),
            message: "not found".to_string(),
        }
        .exit_status(),
        1
    );
    assert_eq!(
        MatchError::Save {
            path: "明细-new.xlsx".to_string(),
            message: "permission denied".to_string(),
        }
        .exit_status(),
        0
    );
    assert_eq!(MatchError::SheetNotFound("S".into()).exit_status(), 0);
}

/// 从IO错误转换
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MatchError = io_err.into();

    assert!(matches!(err, MatchError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

/// 从JSON错误转换
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MatchError = json_err.into();

    assert!(matches!(err, MatchError::JsonParse(_)));
}
