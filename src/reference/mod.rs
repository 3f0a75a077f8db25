//! 汇总表读取模块
//!
//! 读取汇总表「汇总」工作表，建立 原编码(第7列) → IB编码(第8列) 的映射。

mod mapping;

pub use mapping::ReferenceMapping;

use crate::error::{MatchError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// 汇总表中的工作表名
pub const SUMMARY_SHEET: &str = "汇总";
/// 原编码所在列（0起）
pub const SOURCE_COLUMN: u32 = 6;
/// IB编码所在列（0起）
pub const TARGET_COLUMN: u32 = 7;

/// 读取汇总表并建立映射
///
/// 第一行（表头）不跳过，会同样写入映射。
/// 列数不足8列的行无法取值，跳过并计数。
pub fn load_reference_mapping(path: &Path) -> Result<ReferenceMapping> {
    let range = {
        let mut workbook = open_workbook_auto(path).map_err(|e| MatchError::FileOpen {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        workbook
            .worksheet_range(SUMMARY_SHEET)
            .map_err(|e| MatchError::SheetRead {
                sheet: SUMMARY_SHEET.to_string(),
                message: e.to_string(),
            })?
    };

    let mapping = build_mapping(&range);
    tracing::info!(
        path = %path.display(),
        rows = mapping.rows_read(),
        entries = mapping.len(),
        skipped = mapping.skipped_rows(),
        "读取汇总文件完成"
    );
    Ok(mapping)
}

/// 按行构建映射（后出现的同名编码覆盖先出现的）
pub fn build_mapping(range: &Range<Data>) -> ReferenceMapping {
    let mut mapping = ReferenceMapping::new();
    let (Some((start_row, _)), Some((end_row, end_col))) = (range.start(), range.end()) else {
        return mapping;
    };

    for row in start_row..=end_row {
        let width = row_width(range, row, end_col);
        if width <= TARGET_COLUMN {
            if width > 0 {
                tracing::warn!(row = row + 1, width, "汇总表行列数不足，跳过");
            }
            mapping.skip_row();
            continue;
        }

        let source = cell_text(range, row, SOURCE_COLUMN);
        let target = cell_text(range, row, TARGET_COLUMN);
        mapping.insert_row(source, target);
    }

    mapping
}

/// 单元格转为字符串（空单元格为空串）
fn cell_text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::Empty) | None => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(value) => value.to_string(),
    }
}

/// 行宽：最后一个非空单元格的位置 + 1
fn row_width(range: &Range<Data>, row: u32, end_col: u32) -> u32 {
    (0..=end_col)
        .rev()
        .find(|&col| !cell_text(range, row, col).is_empty())
        .map(|col| col + 1)
        .unwrap_or(0)
}
