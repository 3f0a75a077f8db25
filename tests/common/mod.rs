//! 集成测试共用：生成测试用Excel、读取输出

#![allow(dead_code)]

use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// 按 (工作表名, 行) 生成xlsx，空串单元格不写入
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<&str>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).expect("设置工作表名失败");
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet
                        .write_string(r as u32, c as u16, *value)
                        .expect("写入失败");
                }
            }
        }
    }
    workbook.save(path).expect("保存测试文件失败");
}

/// 汇总表的一行：第7、8列为 原编码、IB编码
pub fn summary_row<'a>(source: &'a str, target: &'a str) -> Vec<&'a str> {
    vec!["序号", "名称", "规格", "单位", "数量", "备注", source, target]
}

/// 明细表的一行：第9列为编码
pub fn detail_row(key: &str) -> Vec<&str> {
    vec!["1", "名称", "规格", "单位", "数量", "单价", "金额", "备注", key]
}

pub fn read_sheet(path: &Path, sheet: &str) -> Range<Data> {
    let mut workbook = open_workbook_auto(path).expect("打开输出文件失败");
    workbook.worksheet_range(sheet).expect("读取工作表失败")
}

/// 0起的行列号
pub fn text(range: &Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// J列（0起第9列）从第1行起的值
pub fn column_j(range: &Range<Data>, rows: u32) -> Vec<String> {
    (0..rows).map(|r| text(range, r, 9)).collect()
}
