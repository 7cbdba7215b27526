//! Excel読み込み（calamine）

use super::Table;
use crate::error::{MatcherError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 先頭シートを読み込む（1行目がヘッダ）
pub fn load_excel(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| MatcherError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MatcherError::ExcelRead(format!("シートがありません: {}", path.display())))?
        .map_err(|e| MatcherError::ExcelRead(e.to_string()))?;

    let mut rows = range.rows().map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());

    let headers = rows
        .next()
        .ok_or_else(|| MatcherError::InvalidTable(format!("ヘッダ行がありません: {}", path.display())))?;

    // 空行も残す（出力の行番号を入力と揃える）
    let rows = rows.collect();

    Ok(Table::new(headers, rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
