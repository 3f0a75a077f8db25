//! 明细表读写接口
//!
//! 标注流程只通过 [`TargetWorkbook`] 操作工作簿；
//! [`XlsxWorkbook`] 基于 umya-spreadsheet 实现。

use super::style::CellStyle;
use crate::error::{MatchError, Result};
use std::path::{Path, PathBuf};

/// 标注流程需要的工作簿操作，每一步都可能失败
pub trait TargetWorkbook {
    /// 已创建的样式句柄
    type Style;

    /// 工作表名（按工作簿内顺序）
    fn sheet_names(&self) -> Vec<String>;

    fn activate_sheet(&mut self, index: usize) -> Result<()>;

    /// 在 `column` 处插入一列，原有列右移
    fn insert_column(&mut self, sheet: &str, column: &str) -> Result<()>;

    fn set_cell_str(&mut self, sheet: &str, cell: &str, value: &str) -> Result<()>;

    fn new_style(&mut self, style: &CellStyle) -> Result<Self::Style>;

    fn set_cell_style(&mut self, sheet: &str, cell: &str, style: &Self::Style) -> Result<()>;

    /// 全部行（从第1行起），每行去掉末尾的空单元格
    fn rows(&self, sheet: &str) -> Result<Vec<Vec<String>>>;

    fn save_as(&mut self, path: &Path) -> Result<()>;

    fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// xlsx工作簿（整体载入内存，修改后另存）
pub struct XlsxWorkbook {
    path: PathBuf,
    book: umya_spreadsheet::Spreadsheet,
}

impl XlsxWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| MatchError::FileOpen {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            book,
        })
    }

    fn sheet_mut(&mut self, sheet: &str) -> Result<&mut umya_spreadsheet::Worksheet> {
        self.book
            .get_sheet_by_name_mut(sheet)
            .ok_or_else(|| MatchError::SheetNotFound(sheet.to_string()))
    }
}

impl TargetWorkbook for XlsxWorkbook {
    type Style = umya_spreadsheet::Style;

    fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|sheet| sheet.get_name().to_string())
            .collect()
    }

    fn activate_sheet(&mut self, index: usize) -> Result<()> {
        let count = self.book.get_sheet_collection().len();
        if index >= count {
            return Err(MatchError::SheetNotFound(format!("#{}", index)));
        }
        self.book.set_active_sheet(index as u32);
        Ok(())
    }

    fn insert_column(&mut self, sheet: &str, column: &str) -> Result<()> {
        // 只移动本表的列；工作簿级插入会连带移动已处理过的工作表
        self.sheet_mut(sheet)?.insert_new_column(column, &1);
        Ok(())
    }

    fn set_cell_str(&mut self, sheet: &str, cell: &str, value: &str) -> Result<()> {
        check_cell(sheet, cell)?;
        self.sheet_mut(sheet)?
            .get_cell_mut(cell)
            .set_value_string(value);
        Ok(())
    }

    fn new_style(&mut self, style: &CellStyle) -> Result<Self::Style> {
        style.to_xlsx_style()
    }

    fn set_cell_style(&mut self, sheet: &str, cell: &str, style: &Self::Style) -> Result<()> {
        check_cell(sheet, cell)?;
        self.sheet_mut(sheet)?
            .get_cell_mut(cell)
            .set_style(style.clone());
        Ok(())
    }

    fn rows(&self, sheet: &str) -> Result<Vec<Vec<String>>> {
        let worksheet = self
            .book
            .get_sheet_by_name(sheet)
            .ok_or_else(|| MatchError::SheetNotFound(sheet.to_string()))?;

        let max_row = worksheet.get_highest_row();
        let max_col = worksheet.get_highest_column();

        let rows = (1..=max_row)
            .map(|row| {
                let mut values: Vec<String> = (1..=max_col)
                    .map(|col| worksheet.get_value((col, row)))
                    .collect();
                while values.last().is_some_and(|v| v.is_empty()) {
                    values.pop();
                }
                values
            })
            .collect();

        Ok(rows)
    }

    fn save_as(&mut self, path: &Path) -> Result<()> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|e| MatchError::Save {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn close(self) -> Result<()> {
        tracing::debug!(path = %self.path.display(), "关闭明细文件");
        Ok(())
    }
}

/// 单元格地址须为 `列字母+行号`（如 `J12`）
fn check_cell(sheet: &str, cell: &str) -> Result<()> {
    let digits = cell.trim_start_matches(|c: char| c.is_ascii_uppercase());
    let letters = cell.len() - digits.len();
    let valid = (1..=3).contains(&letters)
        && !digits.is_empty()
        && !digits.starts_with('0')
        && digits.chars().all(|c| c.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(MatchError::CellWrite {
            sheet: sheet.to_string(),
            cell: cell.to_string(),
            message: "无效的单元格地址".to_string(),
        })
    }
}
