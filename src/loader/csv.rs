//! CSV読み込み
//!
//! 1行目をヘッダとして扱う。ダブルクォート囲みと `""` エスケープに対応。
//! 改行を含むフィールドには対応しない。

use super::Table;
use crate::error::{MatcherError, Result};
use std::path::Path;

pub fn load_csv(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    parse_csv_str(&content)
}

pub fn parse_csv_str(content: &str) -> Result<Table> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| MatcherError::InvalidTable("ヘッダ行がありません".into()))?;
    let headers = parse_csv_line(header_line);

    let rows = lines.map(parse_csv_line).collect();
    Ok(Table::new(headers, rows))
}

/// 1行をフィールドに分割
///
/// クォート無しのフィールドは前後の空白を除く。クォート内の空白はそのまま残す。
pub(crate) fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    // 閉じクォート位置（クォート付きフィールドのみ）
    let mut quoted_end: Option<usize> = None;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                    quoted_end = Some(field.len());
                }
            }
            '"' if quoted_end.is_none() && field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(finish_field(&mut field, quoted_end.take()));
            }
            _ => field.push(c),
        }
    }
    fields.push(finish_field(&mut field, quoted_end));

    fields
}

fn finish_field(field: &mut String, quoted_end: Option<usize>) -> String {
    let value = match quoted_end {
        Some(end) => format!("{}{}", &field[..end], field[end..].trim()),
        None => field.trim().to_string(),
    };
    field.clear();
    value
}
