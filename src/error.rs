use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("指定された列名 '{0}' が存在しません")]
    ColumnNotFound(String),

    #[error("住所データの列が選択されていません")]
    NoAddressColumn,

    #[error("観測所マスタが指定されていません。`amedas-matcher config --set-observatory PATH` で設定してください")]
    MissingObservatory,

    #[error("テーブルが不正: {0}")]
    InvalidTable(String),

    #[error("対応していない形式です: {0}")]
    UnsupportedFormat(String),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("日付が不正: {0}")]
    InvalidDate(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatcherError>;
