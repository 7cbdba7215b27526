//! 読み込みから出力までの統合テスト

use amedas_matcher::export::{self, csv::write_csv, json::table_to_json};
use amedas_matcher::cli::OutputFormat;
use amedas_matcher::loader::{self, Table};
use amedas_matcher::output::build_output_table;
use amedas_matcher_common::{MatchLevel, MatchSummary, MatchingPipeline};
use std::path::Path;
use tempfile::tempdir;

const OBSERVATORY_CSV: &str = "\u{feff}NEAREST_OBSERVATORY,ADDRESS_NAME
東京,東京都渋谷区道玄坂
大阪,大阪府大阪市北区梅田
中野,東京都中野区桜丘
渋谷桜丘,東京都渋谷区桜丘
";

const ADDRESS_CSV: &str = "ID,住所,備考
1,東京都渋谷区道玄坂2-1-1,本社
2,\"大阪府大阪市北区梅田3-1\",\"支店, 2F\"
3,桜丘,
4,？？？,
";

fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("テストファイル作成失敗");
    path
}

fn run_matching(dir: &Path) -> Table {
    let input_path = write_file(dir, "addresses.csv", ADDRESS_CSV);
    let observatory_path = write_file(dir, "observatory.csv", OBSERVATORY_CSV);

    let input = loader::load_table(&input_path).expect("住所データ読み込み失敗");
    let observatories =
        loader::load_observatories(&observatory_path, "ADDRESS_NAME", "NEAREST_OBSERVATORY")
            .expect("観測所マスタ読み込み失敗");

    let index = input.require_column("住所").expect("住所列がありません");
    let outcomes = MatchingPipeline::new(&observatories).run_detailed(&input.column_values(index), || {});
    build_output_table(&input, &outcomes, false)
}

#[test]
fn test_csv_to_result_table() {
    let dir = tempdir().expect("Failed to create temp dir");
    let table = run_matching(dir.path());

    assert_eq!(
        table.headers,
        vec!["ID", "住所", "備考", "NEAREST_OBSERVATORY", "MATCH_LEVEL"]
    );
    assert_eq!(table.rows.len(), 4, "入力と同じ行数");

    assert_eq!(table.rows[0][3], "東京");
    assert_eq!(table.rows[0][4], MatchLevel::StreetLevel.label());

    assert_eq!(table.rows[1][2], "支店, 2F");
    assert_eq!(table.rows[1][3], "大阪");
    assert_eq!(table.rows[1][4], "町丁目レベル");

    assert_eq!(table.rows[2][3], "中野", "先頭の候補");
    assert_eq!(table.rows[2][4], MatchLevel::AmbiguousStreet.label());

    assert_eq!(table.rows[3][3], "XXX");
    assert_eq!(table.rows[3][4], "住所形式が不適切です");
}

#[test]
fn test_summary_of_batch() {
    let observatories = vec![amedas_matcher_common::ObservatoryRecord::new("東京", "東京都渋谷区道玄坂")];
    let results = MatchingPipeline::new(&observatories).run(&["東京都渋谷区道玄坂1", "東京都", "？？？", "？"]);
    let summary = MatchSummary::from_results(&results);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.count(MatchLevel::InvalidAddress), 2);
    assert_eq!(summary.shares[0].level, MatchLevel::InvalidAddress);
    assert_eq!(summary.shares[0].percent, 50);
}

#[test]
fn test_limit_truncates_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_file(dir.path(), "addresses.csv", ADDRESS_CSV);

    let mut table = loader::load_table(&path).unwrap();
    table.truncate(2);
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[1][0], "2");
}

#[test]
fn test_export_csv_file_reads_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let table = run_matching(dir.path());
    let output = dir.path().join("result.csv");

    export::export_table(&table, &OutputFormat::Csv, Some(&output)).expect("CSV出力失敗");

    let loaded = loader::load_table(&output).expect("CSV再読み込み失敗");
    assert_eq!(loaded, table);
}

#[test]
fn test_export_json_keeps_columns() {
    let dir = tempdir().expect("Failed to create temp dir");
    let table = run_matching(dir.path());
    let output = dir.path().join("result.json");

    export::export_table(&table, &OutputFormat::Json, Some(&output)).expect("JSON出力失敗");

    let content = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value, table_to_json(&table));
    assert_eq!(value.as_array().unwrap().len(), 4);
    assert_eq!(value[0]["NEAREST_OBSERVATORY"], "東京");
}

#[test]
fn test_export_excel_reads_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let table = run_matching(dir.path());
    let output = dir.path().join("result.xlsx");

    export::export_table(&table, &OutputFormat::Excel, Some(&output)).expect("Excel出力失敗");
    assert!(output.exists(), "Excelファイルが生成されていません");

    let loaded = loader::load_table(&output).expect("Excel再読み込み失敗");
    assert_eq!(loaded.headers, table.headers);
    assert_eq!(loaded.rows.len(), table.rows.len());
    assert_eq!(loaded.rows[0][3], "東京");
    assert_eq!(loaded.rows[3][4], "住所形式が不適切です");
}

#[test]
fn test_csv_writer_output() {
    let table = Table::new(
        vec!["住所".into(), "NEAREST_OBSERVATORY".into()],
        vec![vec!["東京都渋谷区道玄坂".into(), "東京".into()]],
    );
    let mut buf = Vec::new();
    write_csv(&table, &mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "住所,NEAREST_OBSERVATORY\n東京都渋谷区道玄坂,東京\n"
    );
}
