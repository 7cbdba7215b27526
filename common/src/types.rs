//! 照合で使う型定義
//!
//! - CleansedAddress: 記号除去・旧字体置換・表記揺れ統一済みの住所
//! - AddressComponents: 都道府県・市区郡・町丁目への分割結果
//! - ObservatoryRecord: 観測所マスタの1行
//! - MatchResult: 1住所あたりの照合結果

use serde::{Deserialize, Serialize};

/// 値が取れなかった項目を表す番兵
pub const SENTINEL: &str = "XXX";

/// 空文字を番兵に置き換える
pub(crate) fn or_sentinel(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => SENTINEL.to_string(),
    }
}

/// クレンジング済み住所
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleansedAddress(String);

impl CleansedAddress {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CleansedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 住所の分割結果
///
/// 各項目は空でない文字列か `SENTINEL` のいずれか。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponents {
    /// 都道府県
    pub prefecture: String,
    /// 市区郡
    pub city: String,
    /// 町丁目（照合キー。番地以降は含まない）
    pub street: String,
    /// 番地（漢数字をアラビア数字にして `-` で連結）
    pub block: String,
}

impl AddressComponents {
    /// 全項目が番兵の分割結果
    pub fn empty() -> Self {
        Self {
            prefecture: SENTINEL.to_string(),
            city: SENTINEL.to_string(),
            street: SENTINEL.to_string(),
            block: SENTINEL.to_string(),
        }
    }

    pub fn prefecture(&self) -> Option<&str> {
        value_of(&self.prefecture)
    }

    pub fn city(&self) -> Option<&str> {
        value_of(&self.city)
    }

    pub fn street(&self) -> Option<&str> {
        value_of(&self.street)
    }
}

fn value_of(field: &str) -> Option<&str> {
    if field == SENTINEL || field.is_empty() {
        None
    } else {
        Some(field)
    }
}

/// 観測所マスタの1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservatoryRecord {
    /// 観測所名（照合結果として返すだけで解釈しない）
    pub name: String,
    /// 観測所の所在地
    pub address_name: String,
}

impl ObservatoryRecord {
    pub fn new(name: impl Into<String>, address_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address_name: address_name.into(),
        }
    }
}

/// 一致レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchLevel {
    StreetLevel,
    CityLevel,
    PrefectureLevel,
    AmbiguousPrefectureStreet,
    AmbiguousCity,
    AmbiguousStreet,
    InvalidAddress,
}

impl MatchLevel {
    pub const ALL: [MatchLevel; 7] = [
        MatchLevel::StreetLevel,
        MatchLevel::CityLevel,
        MatchLevel::PrefectureLevel,
        MatchLevel::AmbiguousPrefectureStreet,
        MatchLevel::AmbiguousCity,
        MatchLevel::AmbiguousStreet,
        MatchLevel::InvalidAddress,
    ];

    /// 出力用の表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            MatchLevel::StreetLevel => "町丁目レベル",
            MatchLevel::CityLevel => "市区郡レベル",
            MatchLevel::PrefectureLevel => "都道府県レベル",
            MatchLevel::AmbiguousPrefectureStreet => {
                "県と町丁目がヒットしましたが、2件以上あるので特定できていません"
            }
            MatchLevel::AmbiguousCity => {
                "市区郡のみがヒットしましたが、2件以上あるので特定できていません"
            }
            MatchLevel::AmbiguousStreet => {
                "町丁目のみがヒットしましたが、2件以上あるので特定できていません"
            }
            MatchLevel::InvalidAddress => "住所形式が不適切です",
        }
    }

    /// 候補が一意に絞れなかったレベルか
    pub fn is_ambiguous(&self) -> bool {
        matches!(
            self,
            MatchLevel::AmbiguousPrefectureStreet
                | MatchLevel::AmbiguousCity
                | MatchLevel::AmbiguousStreet
        )
    }
}

impl std::fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for MatchLevel {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchLevel::ALL
            .iter()
            .find(|level| level.label() == s)
            .copied()
            .ok_or_else(|| crate::error::Error::Parse(format!("不明な一致レベル: {}", s)))
    }
}

/// 照合結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub observatory: Option<ObservatoryRecord>,
    pub match_level: MatchLevel,
}

impl MatchResult {
    pub(crate) fn matched(record: &ObservatoryRecord, match_level: MatchLevel) -> Self {
        Self {
            observatory: Some(record.clone()),
            match_level,
        }
    }

    pub(crate) fn invalid() -> Self {
        Self {
            observatory: None,
            match_level: MatchLevel::InvalidAddress,
        }
    }

    /// 観測所名（未照合なら番兵）
    pub fn observatory_name(&self) -> &str {
        self.observatory
            .as_ref()
            .map(|o| o.name.as_str())
            .unwrap_or(SENTINEL)
    }
}
