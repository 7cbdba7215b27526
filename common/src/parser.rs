//! 住所パーサー
//!
//! クレンジング済み住所を都道府県・市区郡・町丁目に分割し、
//! 町丁目の漢数字をアラビア数字に揃える。

use crate::error::MatchError;
use crate::numeral;
use crate::types::{or_sentinel, AddressComponents, CleansedAddress, SENTINEL};
use regex::Regex;

/// 市区町村の接尾辞で誤分割される市（`XX市` として扱う）
const KNOWN_CITIES: &[&str] = &[
    "京都", "札幌", "福岡", "田村", "東村山", "武蔵村山", "羽村", "十日町", "野々市", "大町",
    "蒲郡", "四日市", "大和郡山", "廿日市", "大村", "郡山", "郡上", "小郡", "市川", "市原",
    "町田", "村上",
];

lazy_static::lazy_static! {
    /// 住所分割パターン（都道府県・市区郡は省略可）
    static ref ADDRESS_RE: Regex = Regex::new(&format!(
        concat!(
            r"^(?P<prefecture>(?:東京都|京都府|大阪府|.+?[都道府県]))?",
            r"(?P<city>(?:(?:{})市|.+?郡(?:玉村|大町|.+?)[町村]|.+?市.+?区|.+?[市区町村]))?",
            r"(?P<street>.*)",
        ),
        KNOWN_CITIES.join("|")
    ))
    .unwrap();

    /// 町名 + 番地部分
    static ref STREET_NUMBER_RE: Regex =
        Regex::new(r"^(.+?)((?:[一二三四五六七八九十〇0-9]+[^0-9]*)+)$").unwrap();

    /// 番地部分の数字の塊
    static ref NUMBER_GROUP_RE: Regex = Regex::new(r"[一二三四五六七八九十〇]+|[0-9]+").unwrap();

    /// 最初の数字以降
    static ref DIGIT_TAIL_RE: Regex = Regex::new(r"\d.*").unwrap();
}

/// 町丁目の番地部分を正規化する
///
/// 町名に続く数字の塊をそれぞれ変換し `-` で連結する。
/// 最後の数字の後ろに続く文字（号・室番号など）は捨てる。
///
/// # Examples
/// ```
/// use amedas_matcher_common::parser::normalize_street;
///
/// assert_eq!(normalize_street("京橋二丁目"), "京橋2");
/// assert_eq!(normalize_street("梅田1-2-3"), "梅田1-2-3");
/// ```
pub fn normalize_street(street: &str) -> String {
    let Some(caps) = STREET_NUMBER_RE.captures(street) else {
        return street.to_string();
    };

    let town_name = &caps[1];
    let numbers: Vec<String> = NUMBER_GROUP_RE
        .find_iter(&caps[2])
        .map(|m| numeral::convert(m.as_str()))
        .collect();

    format!("{}{}", town_name, numbers.join("-"))
}

/// 正規化済み町丁目を照合キーと番地に分ける
fn split_block(normalized: &str) -> (&str, &str) {
    match DIGIT_TAIL_RE.find(normalized) {
        Some(m) => (&normalized[..m.start()], m.as_str()),
        None => (normalized, ""),
    }
}

/// 住所を分割する
///
/// # Returns
/// * `Ok(AddressComponents)` - 取れなかった項目は `SENTINEL`
/// * `Err(MatchError::ParseFailure)` - 分割パターンに一致しない場合
pub fn try_parse(cleansed: &CleansedAddress) -> Result<AddressComponents, MatchError> {
    let caps = ADDRESS_RE
        .captures(cleansed.as_str())
        .ok_or_else(|| MatchError::ParseFailure(cleansed.to_string()))?;

    let prefecture = caps.name("prefecture").map(|m| m.as_str());
    let mut city = caps.name("city").map(|m| m.as_str());
    let street = caps.name("street").map(|m| m.as_str()).unwrap_or_default();

    // 分割パターンが取りすぎた場合
    if city.is_some() && city == prefecture {
        city = Some(SENTINEL);
    }

    let normalized_street = normalize_street(street);
    let (street_key, block) = split_block(&normalized_street);

    Ok(AddressComponents {
        prefecture: or_sentinel(prefecture),
        city: or_sentinel(city),
        street: or_sentinel(Some(street_key)),
        block: or_sentinel(Some(block)),
    })
}

/// 住所を分割する（失敗時は全項目が番兵）
pub fn parse(cleansed: &CleansedAddress) -> AddressComponents {
    try_parse(cleansed).unwrap_or_else(|e| {
        log::debug!("{}", e);
        AddressComponents::empty()
    })
}
