use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 输出文件名后缀
pub const OUTPUT_SUFFIX: &str = "-new";

/// 明细.xlsx → 明细-new.xlsx（同目录）
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_same_dir() {
        assert_eq!(output_path(Path::new("report.xlsx")), PathBuf::from("report-new.xlsx"));
        assert_eq!(
            output_path(Path::new("data/summary.xlsx")),
            PathBuf::from("data/summary-new.xlsx")
        );
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        assert_eq!(
            output_path(Path::new("/tmp/明细.2024.xlsx")),
            PathBuf::from("/tmp/明细.2024-new.xlsx")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(output_path(Path::new("dir/detail")), PathBuf::from("dir/detail-new"));
    }
}
