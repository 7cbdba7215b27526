//! 照合パイプライン
//!
//! 住所ごとに クレンジング → 分割 → 照合 を行う。
//! 各行は互いに独立しており、`parallel` フィーチャ有効時は rayon で並列処理する。
//! 出力は常に入力と同じ順序。

use crate::matcher::ObservatoryMatcher;
use crate::normalizer;
use crate::parser;
use crate::types::{AddressComponents, CleansedAddress, MatchLevel, MatchResult, ObservatoryRecord};
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 1住所分の処理結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowOutcome {
    pub cleansed: CleansedAddress,
    pub components: AddressComponents,
    pub result: MatchResult,
}

/// 1住所を処理する
pub fn process_address(raw: &str, matcher: &ObservatoryMatcher<'_>) -> RowOutcome {
    let cleansed = normalizer::cleanse(raw);
    let (components, result) = match parser::try_parse(&cleansed) {
        Ok(components) => {
            let result = matcher.match_address(&components);
            (components, result)
        }
        Err(e) => {
            log::debug!("{}", e);
            (AddressComponents::empty(), MatchResult::invalid())
        }
    };

    RowOutcome {
        cleansed,
        components,
        result,
    }
}

/// 観測所マスタを固定した照合パイプライン
pub struct MatchingPipeline<'a> {
    matcher: ObservatoryMatcher<'a>,
}

impl<'a> MatchingPipeline<'a> {
    pub fn new(observatories: &'a [ObservatoryRecord]) -> Self {
        Self {
            matcher: ObservatoryMatcher::new(observatories),
        }
    }

    /// 住所ごとの照合結果を入力順に返す
    pub fn run<S: AsRef<str> + Sync>(&self, addresses: &[S]) -> Vec<MatchResult> {
        self.run_detailed(addresses, || {})
            .into_iter()
            .map(|outcome| outcome.result)
            .collect()
    }

    /// 分割結果を含めて返す
    ///
    /// `on_row` は1行処理するごとに呼ばれる（進捗表示用）。並列実行時は呼び出し順不定。
    pub fn run_detailed<S, F>(&self, addresses: &[S], on_row: F) -> Vec<RowOutcome>
    where
        S: AsRef<str> + Sync,
        F: Fn() + Sync,
    {
        log::debug!("{}件の住所を照合", addresses.len());

        let process = |raw: &S| {
            let outcome = process_address(raw.as_ref(), &self.matcher);
            on_row();
            outcome
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<RowOutcome> = addresses.par_iter().map(process).collect();

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<RowOutcome> = addresses.iter().map(process).collect();

        outcomes
    }
}

/// 一致レベル別の件数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelShare {
    pub level: MatchLevel,
    pub count: usize,
    /// 全体に対する割合（%、四捨五入）
    pub percent: u32,
}

/// 範囲別マッチング率
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub total: usize,
    /// 件数の多い順（同数はレベル順）
    pub shares: Vec<LevelShare>,
}

impl MatchSummary {
    pub fn from_results<'r>(results: impl IntoIterator<Item = &'r MatchResult>) -> Self {
        let mut counts = vec![0usize; MatchLevel::ALL.len()];
        let mut total = 0;
        for result in results {
            if let Some(i) = MatchLevel::ALL.iter().position(|l| *l == result.match_level) {
                counts[i] += 1;
            }
            total += 1;
        }

        let mut shares: Vec<LevelShare> = MatchLevel::ALL
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(level, count)| LevelShare {
                level: *level,
                count,
                percent: ((count as f64 / total as f64) * 100.0).round() as u32,
            })
            .collect();
        shares.sort_by(|a, b| b.count.cmp(&a.count).then(a.level.cmp(&b.level)));

        Self { total, shares }
    }

    pub fn count(&self, level: MatchLevel) -> usize {
        self.shares
            .iter()
            .find(|s| s.level == level)
            .map(|s| s.count)
            .unwrap_or(0)
    }
}
