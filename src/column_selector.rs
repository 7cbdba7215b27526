//! 住所列の選択
//!
//! `--column` → 設定ファイル → 対話選択 の順に決める。

use crate::error::{MatcherError, Result};
use crate::loader::Table;
use dialoguer::Select;

/// 列名の指定から列位置を決める（指定が無ければ `None`）
pub fn resolve_named_column(
    table: &Table,
    from_arg: Option<&str>,
    from_config: Option<&str>,
) -> Result<Option<usize>> {
    if let Some(name) = from_arg {
        return table.require_column(name).map(Some);
    }

    if let Some(name) = from_config {
        return match table.column_index(name) {
            Some(index) => Ok(Some(index)),
            None => {
                log::warn!("設定の列名 '{}' が見つかりません", name);
                Ok(None)
            }
        };
    }

    Ok(None)
}

/// 住所らしい列名を既定の選択位置にする
fn default_selection(headers: &[String]) -> usize {
    headers
        .iter()
        .position(|h| h.contains("住所") || h.to_uppercase().contains("ADDRESS"))
        .unwrap_or(0)
}

/// 対話式で住所列を選択
pub fn select_column_interactive(table: &Table) -> Result<usize> {
    if table.headers.is_empty() {
        return Err(MatcherError::NoAddressColumn);
    }

    let choices: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let sample = table
                .rows
                .first()
                .and_then(|row| row.get(i))
                .map(String::as_str)
                .unwrap_or("");
            if sample.is_empty() {
                h.clone()
            } else {
                format!("{}  (例: {})", h, sample)
            }
        })
        .collect();

    let selection = Select::new()
        .with_prompt("住所データの列を選択してください")
        .items(&choices)
        .default(default_selection(&table.headers))
        .interact_opt()
        .map_err(|e| MatcherError::Config(format!("入力エラー: {}", e)))?;

    selection.ok_or(MatcherError::NoAddressColumn)
}

pub fn resolve_address_column(
    table: &Table,
    from_arg: Option<&str>,
    from_config: Option<&str>,
) -> Result<usize> {
    match resolve_named_column(table, from_arg, from_config)? {
        Some(index) => Ok(index),
        None => select_column_interactive(table),
    }
}
