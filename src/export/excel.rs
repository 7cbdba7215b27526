//! Excel出力（rust_xlsxwriter）

use crate::error::{MatcherError, Result};
use crate::loader::Table;
use rust_xlsxwriter::*;
use std::path::Path;

pub const SHEET_NAME: &str = "照合結果";

/// 表をバッファに生成
pub fn generate_excel_buffer(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| MatcherError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, header, &header_format)
            .map_err(|e| MatcherError::ExcelGeneration(format!("ヘッダ書き込みエラー: {}", e)))?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let excel_row = (i + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(excel_row, col as u16, value)
                .map_err(|e| MatcherError::ExcelGeneration(format!("セル書き込みエラー: {}", e)))?;
        }
    }

    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| MatcherError::ExcelGeneration(e.to_string()))?;

    workbook
        .save_to_buffer()
        .map_err(|e| MatcherError::ExcelGeneration(format!("保存エラー: {}", e)))
}

pub fn write_excel(table: &Table, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(table)?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}
