//! AMeDAS Matcher
//!
//! 住所データを気象観測所マスタと照合し、最寄り観測所と一致レベルを付与する。
//! 照合エンジン本体は `amedas-matcher-common`。このクレートはファイル入出力・設定・CLI を受け持つ。

pub mod cli;
pub mod column_selector;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod output;
pub mod rainfall;
