//! 表形式データの読み込み
//!
//! 住所データ・観測所マスタ・降水量データはいずれも CSV か Excel で与えられる。
//! 拡張子で読み込み方法を切り替える。

pub mod csv;
pub mod excel;

use crate::error::{MatcherError, Result};
use amedas_matcher_common::ObservatoryRecord;
use std::path::Path;

/// ヘッダ付きの表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// 行の長さをヘッダに揃えて作成
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 列名から位置を引く（無ければエラー）
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| MatcherError::ColumnNotFound(name.to_string()))
    }

    /// 列の値を上から順に取り出す
    pub fn column_values(&self, index: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect()
    }

    pub fn truncate(&mut self, limit: usize) {
        self.rows.truncate(limit);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 拡張子に応じて表を読み込む
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(MatcherError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        "csv" => csv::load_csv(path)?,
        "xlsx" | "xlsm" | "xls" | "ods" => excel::load_excel(path)?,
        _ => return Err(MatcherError::UnsupportedFormat(path.display().to_string())),
    };

    log::debug!(
        "{}: {}列 {}行",
        path.display(),
        table.headers.len(),
        table.rows.len()
    );
    Ok(table)
}

/// 観測所マスタを読み込む
pub fn load_observatories(
    path: &Path,
    address_column: &str,
    name_column: &str,
) -> Result<Vec<ObservatoryRecord>> {
    let table = load_table(path)?;
    observatories_from_table(&table, address_column, name_column)
}

pub fn observatories_from_table(
    table: &Table,
    address_column: &str,
    name_column: &str,
) -> Result<Vec<ObservatoryRecord>> {
    let address_index = table.require_column(address_column)?;
    let name_index = table.require_column(name_column)?;

    let records = table
        .rows
        .iter()
        .map(|row| ObservatoryRecord::new(row[name_index].as_str(), row[address_index].as_str()))
        .collect();
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["ADDRESS_NAME".into(), "NEAREST_OBSERVATORY".into()],
            vec![
                vec!["東京都渋谷区道玄坂".into(), "東京".into()],
                vec!["大阪府大阪市北区梅田".into()],
            ],
        )
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.column_index("NEAREST_OBSERVATORY"), Some(1));
        assert_eq!(table.column_index("住所"), None);
        assert!(matches!(
            table.require_column("住所"),
            Err(MatcherError::ColumnNotFound(name)) if name == "住所"
        ));
    }

    #[test]
    fn test_column_values_and_padding() {
        let table = sample();
        assert_eq!(table.column_values(1), vec!["東京", ""]);
    }

    #[test]
    fn test_observatories_from_table() {
        let records = observatories_from_table(&sample(), "ADDRESS_NAME", "NEAREST_OBSERVATORY").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ObservatoryRecord::new("東京", "東京都渋谷区道玄坂"));
        assert_eq!(records[1].address_name, "大阪府大阪市北区梅田");
    }

    #[test]
    fn test_observatories_missing_column() {
        let result = observatories_from_table(&sample(), "ADDRESS_NAME", "OBSERVATORY");
        assert!(matches!(result, Err(MatcherError::ColumnNotFound(_))));
    }

    #[test]
    fn test_truncate() {
        let mut table = sample();
        table.truncate(1);
        assert_eq!(table.len(), 1);
        table.truncate(5);
        assert_eq!(table.len(), 1);
    }
}
