//! 降水量データの紐づけ
//!
//! 照合結果の観測所名と日次降水量データ（OBSERVATORY_NAME, DATE,
//! RAINFALL_DAILY_TOTAL）を左外部結合する。期間外の日は除外する。

use crate::error::{MatcherError, Result};
use crate::loader::Table;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

pub const OBSERVATORY_COLUMN: &str = "OBSERVATORY_NAME";
pub const DATE_COLUMN: &str = "DATE";
pub const TOTAL_COLUMN: &str = "RAINFALL_DAILY_TOTAL";

/// 1観測所1日分の降水量
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallRecord {
    pub observatory: String,
    pub date: NaiveDate,
    pub total: String,
}

/// 日付範囲（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(MatcherError::InvalidDate(format!(
                "開始日 {} が終了日 {} より後です",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// 日付文字列を解釈する
///
/// `YYYY-MM-DD` / `YYYY/MM/DD`（時刻部分は無視）と Excel のシリアル値を受け付ける。
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()
        .unwrap_or(value);

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return Some(date);
        }
    }

    // Excelのシリアル値（1899-12-30 起点）
    let serial: f64 = date_part.parse().ok()?;
    if !(1.0..2_958_466.0).contains(&serial) {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_signed(Duration::days(serial.trunc() as i64))
}

fn parse_bound(value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| MatcherError::InvalidDate(value.to_string()))
}

/// 降水量テーブルをレコードに変換（日付が読めない行は警告して読み飛ばす）
pub fn records_from_table(table: &Table) -> Result<Vec<RainfallRecord>> {
    let name_index = table.require_column(OBSERVATORY_COLUMN)?;
    let date_index = table.require_column(DATE_COLUMN)?;
    let total_index = table.require_column(TOTAL_COLUMN)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let Some(date) = parse_date(&row[date_index]) else {
            log::warn!("{}行目: 日付を解釈できません: '{}'", i + 2, row[date_index]);
            continue;
        };
        records.push(RainfallRecord {
            observatory: row[name_index].clone(),
            date,
            total: row[total_index].clone(),
        });
    }
    Ok(records)
}

/// 期間を決める
///
/// 指定が無い側はデータ中の最小日・最大日を使う。データが空で指定も無ければ `None`。
pub fn resolve_range(
    records: &[RainfallRecord],
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Option<DateRange>> {
    let start = start.map(parse_bound).transpose()?;
    let end = end.map(parse_bound).transpose()?;

    let data_min = records.iter().map(|r| r.date).min();
    let data_max = records.iter().map(|r| r.date).max();

    match (start.or(data_min), end.or(data_max)) {
        (Some(start), Some(end)) => DateRange::new(start, end).map(Some),
        _ => Ok(None),
    }
}

/// 照合結果の各行に降水量を結合する
///
/// 1行につき該当日数分の行を出力する（元の行順→日付順）。
/// 該当が無い行は DATE と RAINFALL_DAILY_TOTAL を空にして1行残す。
pub fn join(
    output: &Table,
    observatory_index: usize,
    records: &[RainfallRecord],
    range: Option<DateRange>,
) -> Table {
    let mut by_observatory: HashMap<&str, Vec<&RainfallRecord>> = HashMap::new();
    for record in records {
        if range.map_or(true, |r| r.contains(record.date)) {
            by_observatory
                .entry(record.observatory.as_str())
                .or_default()
                .push(record);
        }
    }
    for days in by_observatory.values_mut() {
        days.sort_by_key(|r| r.date);
    }

    let mut headers = output.headers.clone();
    headers.push(DATE_COLUMN.to_string());
    headers.push(TOTAL_COLUMN.to_string());

    let mut rows = Vec::new();
    for row in &output.rows {
        let name = row.get(observatory_index).map(String::as_str).unwrap_or("");
        match by_observatory.get(name) {
            Some(days) if !days.is_empty() => {
                for day in days {
                    let mut joined = row.clone();
                    joined.push(day.date.format("%Y-%m-%d").to_string());
                    joined.push(day.total.clone());
                    rows.push(joined);
                }
            }
            _ => {
                let mut joined = row.clone();
                joined.push(String::new());
                joined.push(String::new());
                rows.push(joined);
            }
        }
    }

    Table::new(headers, rows)
}
