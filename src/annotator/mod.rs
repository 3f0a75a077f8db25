//! 明细表标注模块
//!
//! 对明细表的每个工作表：在J列插入「IB编码」列，按第9列编码查找汇总表映射，
//! 写入匹配到的IB编码（未匹配为空串），最后另存为 `<文件名>-new.xlsx`。
//!
//! 单元格、样式、保存等每一步失败都只记录日志，不中断处理。

mod output;
mod style;
mod workbook;

pub use output::{output_path, OUTPUT_SUFFIX};
pub use style::{argb, CellStyle, BORDER_COLOR, HEADER_FILL_COLOR};
pub use workbook::{TargetWorkbook, XlsxWorkbook};

use crate::error::Result;
use crate::reference::ReferenceMapping;
use std::path::{Path, PathBuf};

/// 插入的列
pub const IB_COLUMN: &str = "J";
/// 表头文字
pub const HEADER_LABEL: &str = "IB编码";
/// 编码所在列（0起，第9列）
pub const KEY_COLUMN: usize = 8;

/// 标注统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotateReport {
    /// 处理的工作表数
    pub sheets: usize,
    /// 写入的数据行数
    pub rows_written: usize,
    /// 匹配到IB编码的行数
    pub matched: usize,
    /// 记录到日志的失败次数
    pub failures: usize,
    /// 保存成功时的输出路径
    pub output: Option<PathBuf>,
}

impl AnnotateReport {
    /// 失败只记日志并计数，调用方拿到 `None` 后自行决定跳过哪些后续步骤
    pub fn best_effort<T>(
        &mut self,
        result: Result<T>,
        operation: &str,
        sheet: &str,
        cell: &str,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.failures += 1;
                tracing::error!(operation, sheet, cell, error = %e, "标注步骤失败");
                None
            }
        }
    }

    pub fn saved(&self) -> bool {
        self.output.is_some()
    }
}

/// 标注明细文件并另存
///
/// 仅在明细文件无法打开时返回错误；之后的失败（包括保存失败）都只记录日志。
pub fn annotate(target: &Path, mapping: &ReferenceMapping) -> Result<AnnotateReport> {
    let workbook = XlsxWorkbook::open(target)?;
    tracing::info!(path = %target.display(), "打开明细文件");
    Ok(annotate_and_save(workbook, &output_path(target), mapping))
}

/// 标注后保存到 `output` 并关闭工作簿
pub fn annotate_and_save<W: TargetWorkbook>(
    mut workbook: W,
    output: &Path,
    mapping: &ReferenceMapping,
) -> AnnotateReport {
    let mut report = annotate_workbook(&mut workbook, mapping);

    match workbook.save_as(output) {
        Ok(()) => {
            tracing::info!(path = %output.display(), "保存文件成功");
            report.output = Some(output.to_path_buf());
        }
        Err(e) => {
            report.failures += 1;
            tracing::error!(path = %output.display(), error = %e, "保存文件失败");
        }
    }

    if let Err(e) = workbook.close() {
        report.failures += 1;
        tracing::error!(error = %e, "关闭文件失败");
    }

    report
}

/// 按工作表顺序标注全部工作表
pub fn annotate_workbook<W: TargetWorkbook>(
    workbook: &mut W,
    mapping: &ReferenceMapping,
) -> AnnotateReport {
    let mut report = AnnotateReport::default();

    for (index, sheet) in workbook.sheet_names().iter().enumerate() {
        annotate_sheet(workbook, index, sheet, mapping, &mut report);
        report.sheets += 1;
    }

    report
}

fn annotate_sheet<W: TargetWorkbook>(
    workbook: &mut W,
    index: usize,
    sheet: &str,
    mapping: &ReferenceMapping,
    report: &mut AnnotateReport,
) {
    report.best_effort(workbook.activate_sheet(index), "激活工作表", sheet, "");
    report.best_effort(
        workbook.insert_column(sheet, IB_COLUMN),
        "插入J列",
        sheet,
        IB_COLUMN,
    );

    let header = cell_ref(1);
    report.best_effort(
        workbook.set_cell_str(sheet, &header, HEADER_LABEL),
        "设置表头",
        sheet,
        &header,
    );

    let header_style = report.best_effort(
        workbook.new_style(&CellStyle::header()),
        "创建表头样式",
        sheet,
        &header,
    );
    if let Some(style) = &header_style {
        report.best_effort(
            workbook.set_cell_style(sheet, &header, style),
            "设置表头样式",
            sheet,
            &header,
        );
    }

    let border = report.best_effort(
        workbook.new_style(&CellStyle::data_border()),
        "创建边框样式",
        sheet,
        IB_COLUMN,
    );

    let Some(rows) = report.best_effort(workbook.rows(sheet), "读取行", sheet, "") else {
        return;
    };

    // 第1行为表头，数据行从J2开始逐行写入
    for (offset, row) in rows.iter().skip(1).enumerate() {
        let cell = cell_ref(offset + 2);
        let code = ib_code_for_row(row, mapping);

        if report
            .best_effort(
                workbook.set_cell_str(sheet, &cell, code),
                "设置单元格值",
                sheet,
                &cell,
            )
            .is_some()
        {
            report.rows_written += 1;
            if !code.is_empty() {
                report.matched += 1;
            }
        }
        tracing::debug!(sheet, cell = %cell, code, "设置单元格值");

        if let Some(style) = &border {
            report.best_effort(
                workbook.set_cell_style(sheet, &cell, style),
                "设置单元格样式",
                sheet,
                &cell,
            );
        }
    }

    tracing::info!(sheet, rows = rows.len().saturating_sub(1), "工作表标注完成");
}

/// 行的IB编码：不足9列的行不查找，直接为空串
pub fn ib_code_for_row<'a>(row: &[String], mapping: &'a ReferenceMapping) -> &'a str {
    row.get(KEY_COLUMN)
        .map(|key| mapping.lookup(key))
        .unwrap_or("")
}

/// J列单元格地址，如 `J2`
pub fn cell_ref(row: usize) -> String {
    format!("{}{}", IB_COLUMN, row)
}
