//! AMeDAS Matcher Common Library
//!
//! 住所の正規化・分割と観測所マスタとの照合を行うエンジン。
//! ファイルや端末の入出力は持たない。

pub mod types;
pub mod error;
pub mod normalizer;
pub mod numeral;
pub mod parser;
pub mod matcher;
pub mod pipeline;

pub use types::{AddressComponents, CleansedAddress, MatchLevel, MatchResult, ObservatoryRecord, SENTINEL};
pub use error::{Error, MatchError, Result};
pub use normalizer::{cleanse, normalize};
pub use parser::{parse, try_parse};
pub use matcher::ObservatoryMatcher;
pub use pipeline::{LevelShare, MatchSummary, MatchingPipeline, RowOutcome};
