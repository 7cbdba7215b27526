//! 観測所照合モジュール
//!
//! 分割済み住所を観測所マスタの所在地と部分一致で照合する。
//! 町丁目・市区郡・都道府県それぞれの候補を求め、
//! どの候補が得られたかの組み合わせで最も細かい一致を選ぶ。
//!
//! 候補が複数残った場合はマスタの並び順で先頭を返し、
//! `Ambiguous*` レベルを付けて一意でないことを示す。

use crate::error::MatchError;
use crate::types::{AddressComponents, MatchLevel, MatchResult, ObservatoryRecord};
use log::trace;

type Candidates<'a> = Vec<&'a ObservatoryRecord>;

/// 市区郡名を照合用に2分割する
///
/// - 郡を含む: (郡名, 町村名から市町村を除いたもの)
/// - 区を含む: (区より前, 区より前)
/// - それ以外: (全体, 全体)
pub fn split_city_name(city: &str) -> (&str, &str) {
    if city.contains('郡') {
        let mut parts = city.split('郡');
        let district = parts.next().unwrap_or_default();
        let town = parts
            .next()
            .unwrap_or_default()
            .split(&['市', '町', '村'][..])
            .next()
            .unwrap_or_default();
        (district, town)
    } else if let Some((prefix, _)) = city.split_once('区') {
        (prefix, prefix)
    } else {
        (city, city)
    }
}

/// 所在地に `needle` を含む候補だけを残す（順序は維持）
fn containing<'a>(candidates: &[&'a ObservatoryRecord], needle: &str) -> Candidates<'a> {
    candidates
        .iter()
        .filter(|o| o.address_name.contains(needle))
        .copied()
        .collect()
}

/// 観測所マスタに対する照合器
///
/// マスタは照合中に変更されないため、複数スレッドから共有できる。
#[derive(Debug, Clone, Copy)]
pub struct ObservatoryMatcher<'a> {
    observatories: &'a [ObservatoryRecord],
}

impl<'a> ObservatoryMatcher<'a> {
    pub fn new(observatories: &'a [ObservatoryRecord]) -> Self {
        Self { observatories }
    }

    /// 照合する（失敗は `InvalidAddress` として返す）
    pub fn match_address(&self, components: &AddressComponents) -> MatchResult {
        self.try_match(components).unwrap_or_else(|e| {
            trace!("照合失敗 {:?}: {}", components, e);
            MatchResult::invalid()
        })
    }

    /// 照合する
    ///
    /// # Returns
    /// * `Ok(MatchResult)` - 一致した観測所と一致レベル
    /// * `Err(MatchError::NoCandidate)` - どの項目でも候補がない場合
    pub fn try_match(&self, components: &AddressComponents) -> Result<MatchResult, MatchError> {
        let street_match = self.find_street_match(components);
        let city_match = self.find_city_match(components);
        let prefecture_match = self.find_prefecture_match(components);

        trace!(
            "候補数 都道府県={} 市区郡={} 町丁目={}",
            prefecture_match.len(),
            city_match.len(),
            street_match.len()
        );

        match (
            !prefecture_match.is_empty(),
            !city_match.is_empty(),
            !street_match.is_empty(),
        ) {
            (true, true, true) => {
                self.handle_all_matches(components, &street_match, &city_match, &prefecture_match)
            }
            (false, true, true) => self.handle_city_street_match(components, &street_match, &city_match),
            (true, false, true) => {
                self.handle_prefecture_street_match(components, &street_match, &prefecture_match)
            }
            (true, true, false) => {
                self.handle_prefecture_city_match(components, &city_match, &prefecture_match)
            }
            (true, false, false) => Ok(MatchResult::matched(
                prefecture_match[0],
                MatchLevel::PrefectureLevel,
            )),
            (false, true, false) => Ok(pick(&city_match, MatchLevel::CityLevel, MatchLevel::AmbiguousCity)),
            (false, false, true) => Ok(pick(
                &street_match,
                MatchLevel::StreetLevel,
                MatchLevel::AmbiguousStreet,
            )),
            (false, false, false) => Err(MatchError::NoCandidate),
        }
    }

    fn all(&self) -> Candidates<'a> {
        self.observatories.iter().collect()
    }

    fn find_street_match(&self, components: &AddressComponents) -> Candidates<'a> {
        match components.street() {
            Some(street) => containing(&self.all(), street),
            None => Vec::new(),
        }
    }

    fn find_city_match(&self, components: &AddressComponents) -> Candidates<'a> {
        let Some(city) = components.city() else {
            return Vec::new();
        };
        let (first, second) = split_city_name(city);
        let hits = |part: &str, address: &str| !part.is_empty() && address.contains(part);

        self.observatories
            .iter()
            .filter(|o| hits(first, &o.address_name) || hits(second, &o.address_name))
            .collect()
    }

    fn find_prefecture_match(&self, components: &AddressComponents) -> Candidates<'a> {
        match components.prefecture() {
            Some(prefecture) => containing(&self.all(), prefecture),
            None => Vec::new(),
        }
    }

    /// 都道府県 ⭕️ 市区郡 ⭕️ 町丁目 ⭕️
    fn handle_all_matches(
        &self,
        components: &AddressComponents,
        street_match: &[&'a ObservatoryRecord],
        city_match: &[&'a ObservatoryRecord],
        prefecture_match: &[&'a ObservatoryRecord],
    ) -> Result<MatchResult, MatchError> {
        let city = components.city.as_str();
        let prefecture = components.prefecture.as_str();

        let pcs_match = containing(&containing(street_match, city), prefecture);
        if let Some(first) = pcs_match.first() {
            return Ok(MatchResult::matched(first, MatchLevel::StreetLevel));
        }

        let pc_match = containing(city_match, prefecture);
        if let Some(first) = pc_match.first() {
            return Ok(MatchResult::matched(first, MatchLevel::CityLevel));
        }

        let ps_match = containing(street_match, prefecture);
        if !ps_match.is_empty() {
            return self.handle_prefecture_street_match(components, &ps_match, prefecture_match);
        }

        if street_match.iter().any(|o| o.address_name.contains(city)) {
            return self.handle_city_street_match(components, street_match, city_match);
        }

        fallback(street_match, city_match, prefecture_match)
    }

    /// 都道府県 ❌ 市区郡 ⭕️ 町丁目 ⭕️
    fn handle_city_street_match(
        &self,
        components: &AddressComponents,
        street_match: &[&'a ObservatoryRecord],
        city_match: &[&'a ObservatoryRecord],
    ) -> Result<MatchResult, MatchError> {
        let cs_match = containing(street_match, &components.city);
        match cs_match.first() {
            Some(first) => Ok(MatchResult::matched(first, MatchLevel::StreetLevel)),
            None => fallback(street_match, city_match, &[]),
        }
    }

    /// 都道府県 ⭕️ 市区郡 ❌ 町丁目 ⭕️
    fn handle_prefecture_street_match(
        &self,
        components: &AddressComponents,
        street_match: &[&'a ObservatoryRecord],
        prefecture_match: &[&'a ObservatoryRecord],
    ) -> Result<MatchResult, MatchError> {
        let ps_match = containing(street_match, &components.prefecture);
        if ps_match.is_empty() {
            return fallback(street_match, &[], prefecture_match);
        }
        Ok(pick(
            &ps_match,
            MatchLevel::StreetLevel,
            MatchLevel::AmbiguousPrefectureStreet,
        ))
    }

    /// 都道府県 ⭕️ 市区郡 ⭕️ 町丁目 ❌
    fn handle_prefecture_city_match(
        &self,
        components: &AddressComponents,
        city_match: &[&'a ObservatoryRecord],
        prefecture_match: &[&'a ObservatoryRecord],
    ) -> Result<MatchResult, MatchError> {
        let pc_match = containing(city_match, &components.prefecture);
        match pc_match.first() {
            Some(first) => Ok(MatchResult::matched(first, MatchLevel::CityLevel)),
            None => fallback(&[], city_match, prefecture_match),
        }
    }
}

/// 候補が1件なら `unique`、複数なら先頭を `ambiguous` で返す
fn pick(candidates: &[&ObservatoryRecord], unique: MatchLevel, ambiguous: MatchLevel) -> MatchResult {
    let level = if candidates.len() == 1 { unique } else { ambiguous };
    MatchResult::matched(candidates[0], level)
}

/// 細かい候補が尽きたときの最終判定
fn fallback(
    street_match: &[&ObservatoryRecord],
    city_match: &[&ObservatoryRecord],
    prefecture_match: &[&ObservatoryRecord],
) -> Result<MatchResult, MatchError> {
    if let [only] = street_match {
        Ok(MatchResult::matched(only, MatchLevel::StreetLevel))
    } else if let [only] = city_match {
        Ok(MatchResult::matched(only, MatchLevel::CityLevel))
    } else if let Some(first) = prefecture_match.first() {
        Ok(MatchResult::matched(first, MatchLevel::PrefectureLevel))
    } else {
        Err(MatchError::NoCandidate)
    }
}
