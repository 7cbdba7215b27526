//! 文字正規化モジュール
//!
//! 住所文字列を照合可能な形に揃える。
//!
//! ## 処理フロー
//! 1. 記号・空白の除去（`strip_structural`）
//! 2. 旧字体→新字体の置換（`replace_old_kanji`）
//! 3. 表記揺れの統一（`patterns::replace_patterns`）

mod kanji_table;
pub mod patterns;

use crate::types::CleansedAddress;
use kanji_table::{NEW_KANJI, OLD_KANJI};
use regex::Regex;
use std::collections::HashMap;

pub use patterns::replace_patterns;

lazy_static::lazy_static! {
    /// 旧字体 → 新字体
    static ref KANJI_MAP: HashMap<char, char> = OLD_KANJI
        .iter()
        .flat_map(|s| s.chars())
        .zip(NEW_KANJI.iter().flat_map(|s| s.chars()))
        .collect();

    /// 住所に不要な記号・空白
    static ref STRUCTURAL_RE: Regex = Regex::new(r"[!?/:@\[\]`{}~ 　\t\r\n]").unwrap();
}

/// 記号・空白を除去する
pub fn strip_structural(raw: &str) -> String {
    STRUCTURAL_RE.replace_all(raw, "").into_owned()
}

/// 旧字体を新字体に置換する
pub fn replace_old_kanji(address: &str) -> String {
    address
        .chars()
        .map(|c| KANJI_MAP.get(&c).copied().unwrap_or(c))
        .collect()
}

/// 旧字体が含まれているか
pub fn contains_old_kanji(address: &str) -> bool {
    address.chars().any(|c| KANJI_MAP.contains_key(&c))
}

/// 旧字体置換と表記揺れ統一を行う
///
/// どんな入力でも失敗しない。結果に再度かけても変化しない。
pub fn normalize(address: &str) -> String {
    replace_patterns(&replace_old_kanji(address))
}

/// 生の住所をクレンジングする（記号除去 → 正規化）
pub fn cleanse(raw: &str) -> CleansedAddress {
    CleansedAddress::new(normalize(&strip_structural(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_table_is_consistent() {
        let old: usize = OLD_KANJI.iter().map(|s| s.chars().count()).sum();
        let new: usize = NEW_KANJI.iter().map(|s| s.chars().count()).sum();
        assert_eq!(old, new);
        assert_eq!(KANJI_MAP.len(), old);
        // 置換後の文字が再び置換対象にならない
        assert!(NEW_KANJI.iter().all(|s| !contains_old_kanji(s)));
    }

    #[test]
    fn test_replace_old_kanji() {
        assert_eq!(replace_old_kanji("舊東海道"), "旧東海道");
        assert_eq!(replace_old_kanji("澁谷驛前"), "渋谷駅前");
        assert_eq!(replace_old_kanji("大阪"), "大阪");
    }

    #[test]
    fn test_strip_structural() {
        assert_eq!(strip_structural("東京都 渋谷区　道玄坂"), "東京都渋谷区道玄坂");
        assert_eq!(strip_structural("[大阪府]/大阪市!?"), "大阪府大阪市");
        assert_eq!(strip_structural("道玄坂2-1-1"), "道玄坂2-1-1");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "東京都渋谷区道玄坂2-1-1",
            "舊字體の住所",
            "京都府京都市東山区三条通り上ル",
            "霞ケ関ニ丁目",
            "さのい町",
            "ひのえ村",
            "大字くじの川",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {}", s);
        }
    }

    #[test]
    fn test_cleanse_removes_legacy_glyphs() {
        let cleansed = cleanse("北海道舊 札幌驛前");
        assert!(!contains_old_kanji(cleansed.as_str()));
        assert_eq!(cleansed.as_str(), "北海道旧札幌駅前");
    }
}
