//! 出力表の組み立て
//!
//! 入力の全列 +（分割結果）+ NEAREST_OBSERVATORY + MATCH_LEVEL。

use crate::loader::Table;
use amedas_matcher_common::RowOutcome;

pub const NEAREST_OBSERVATORY: &str = "NEAREST_OBSERVATORY";
pub const MATCH_LEVEL: &str = "MATCH_LEVEL";
pub const COMPONENT_HEADERS: [&str; 4] = ["都道府県", "市区郡", "町丁目", "番地"];

/// 照合結果を入力表に付け足す（行数・行順は入力と同じ）
pub fn build_output_table(input: &Table, outcomes: &[RowOutcome], with_components: bool) -> Table {
    let mut headers = input.headers.clone();
    if with_components {
        headers.extend(COMPONENT_HEADERS.iter().map(|h| h.to_string()));
    }
    headers.push(NEAREST_OBSERVATORY.to_string());
    headers.push(MATCH_LEVEL.to_string());

    let rows = input
        .rows
        .iter()
        .zip(outcomes)
        .map(|(row, outcome)| {
            let mut out = row.clone();
            if with_components {
                let c = &outcome.components;
                out.extend([
                    c.prefecture.clone(),
                    c.city.clone(),
                    c.street.clone(),
                    c.block.clone(),
                ]);
            }
            out.push(outcome.result.observatory_name().to_string());
            out.push(outcome.result.match_level.label().to_string());
            out
        })
        .collect();

    Table::new(headers, rows)
}

/// `build_output_table` が付け足した NEAREST_OBSERVATORY の位置
///
/// 入力に同名の列があってもそちらは使わない。
pub fn observatory_column(output: &Table) -> usize {
    output.headers.len().saturating_sub(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use amedas_matcher_common::{MatchingPipeline, ObservatoryRecord};

    #[test]
    fn test_build_output_table() {
        let observatories = vec![ObservatoryRecord::new("東京", "東京都渋谷区道玄坂")];
        let input = Table::new(
            vec!["ID".into(), "ADDRESS".into()],
            vec![
                vec!["1".into(), "東京都渋谷区道玄坂2-1-1".into()],
                vec!["2".into(), "？？？".into()],
            ],
        );
        let outcomes = MatchingPipeline::new(&observatories).run_detailed(&input.column_values(1), || {});

        let table = build_output_table(&input, &outcomes, true);
        assert_eq!(
            table.headers,
            vec!["ID", "ADDRESS", "都道府県", "市区郡", "町丁目", "番地", "NEAREST_OBSERVATORY", "MATCH_LEVEL"]
        );
        assert_eq!(table.rows[0][2..], ["東京都", "渋谷区", "道玄坂", "2-1-1", "東京", "町丁目レベル"]);
        assert_eq!(table.rows[1][6], "XXX");
        assert_eq!(table.rows[1][7], "住所形式が不適切です");

        let plain = build_output_table(&input, &outcomes, false);
        assert_eq!(plain.headers.len(), 4);
    }

    #[test]
    fn test_observatory_column_ignores_input_column() {
        let observatories = vec![ObservatoryRecord::new("東京", "東京都渋谷区道玄坂")];
        let input = Table::new(
            vec!["NEAREST_OBSERVATORY".into(), "ADDRESS".into()],
            vec![vec!["旧観測所".into(), "東京都渋谷区道玄坂1".into()]],
        );
        let outcomes = MatchingPipeline::new(&observatories).run_detailed(&input.column_values(1), || {});
        let table = build_output_table(&input, &outcomes, true);

        let index = observatory_column(&table);
        assert_eq!(index, 6);
        assert_eq!(table.headers[index], NEAREST_OBSERVATORY);
        assert_eq!(table.rows[0][index], "東京");
        assert_eq!(table.rows[0][0], "旧観測所");
    }
}
