//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 照合1件あたりの失敗
///
/// どちらも呼び出し側には `MatchLevel::InvalidAddress` として現れる。
/// 候補が複数ある場合はエラーではなく `Ambiguous*` レベルで返す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("住所を分割できません: {0}")]
    ParseFailure(String),

    #[error("一致する観測所がありません")]
    NoCandidate,
}
