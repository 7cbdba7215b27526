use crate::error::Result;
use crate::loader::Table;
use serde_json::{Map, Value};
use std::path::Path;

/// 1行を列順を保ったオブジェクトに変換
pub fn table_to_json(table: &Table) -> Value {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = table
                .headers
                .iter()
                .zip(row)
                .map(|(header, value)| (header.clone(), Value::String(value.clone())))
                .collect();
            Value::Object(object)
        })
        .collect();
    Value::Array(rows)
}

pub fn write_json(table: &Table, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&table_to_json(table))?;
    std::fs::write(output_path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_keep_column_order() {
        let table = Table::new(
            vec!["ZIP".into(), "ADDRESS".into(), "NEAREST_OBSERVATORY".into()],
            vec![vec!["150-0043".into(), "東京都渋谷区道玄坂".into(), "東京".into()]],
        );
        let json = table_to_json(&table);

        let object = json[0].as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ZIP", "ADDRESS", "NEAREST_OBSERVATORY"]);
        assert_eq!(json[0]["NEAREST_OBSERVATORY"], "東京");
    }
}
