use crate::error::{MatchError, Result};

/// 表头底色
pub const HEADER_FILL_COLOR: &str = "E0EBF5";
/// 数据单元格边框颜色
pub const BORDER_COLOR: &str = "000000";

/// 单元格样式（与具体Excel库无关）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    /// 纯色填充，RGB十六进制
    pub fill: Option<String>,
    /// 四边实线细边框，RGB十六进制
    pub border: Option<String>,
}

impl CellStyle {
    /// 表头（J1）：纯色填充
    pub fn header() -> Self {
        Self {
            fill: Some(HEADER_FILL_COLOR.to_string()),
            border: None,
        }
    }

    /// 数据单元格：上下左右黑色细边框
    pub fn data_border() -> Self {
        Self {
            fill: None,
            border: Some(BORDER_COLOR.to_string()),
        }
    }

    pub(crate) fn to_xlsx_style(&self) -> Result<umya_spreadsheet::Style> {
        let mut style = umya_spreadsheet::Style::default();

        if let Some(fill) = &self.fill {
            style.set_background_color(argb(fill)?);
        }

        if let Some(color) = &self.border {
            let color = argb(color)?;
            let borders = style.get_borders_mut();
            thin_border(borders.get_left_mut(), &color);
            thin_border(borders.get_top_mut(), &color);
            thin_border(borders.get_right_mut(), &color);
            thin_border(borders.get_bottom_mut(), &color);
        }

        Ok(style)
    }
}

fn thin_border(border: &mut umya_spreadsheet::Border, color: &str) {
    border.set_border_style(umya_spreadsheet::Border::BORDER_THIN);
    border.get_color_mut().set_argb(color);
}

/// "E0EBF5" → "FFE0EBF5"
pub fn argb(rgb: &str) -> Result<String> {
    let rgb = rgb.trim_start_matches('#');
    if rgb.len() != 6 || !rgb.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MatchError::Style(format!("无效的颜色: {}", rgb)));
    }
    Ok(format!("FF{}", rgb.to_ascii_uppercase()))
}
