use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "amedas-matcher")]
#[command(about = "住所データと気象観測所の照合・降水量紐づけツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 住所データを観測所マスタと照合
    Match {
        /// 住所データ（CSV/Excel）
        #[arg(required = true)]
        input: PathBuf,

        /// 住所の列名（省略時は設定値、それも無ければ対話選択）
        #[arg(short, long)]
        column: Option<String>,

        /// 観測所マスタ（省略時は設定値）
        #[arg(short = 'O', long)]
        observatory: Option<PathBuf>,

        /// 出力ファイル（省略時は標準出力にCSV）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (csv/json/excel)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// 分割結果（都道府県・市区郡・町丁目・番地）も出力
        #[arg(long)]
        with_components: bool,

        /// 日次降水量データ（省略時は設定値、それも無ければ紐づけしない）
        #[arg(long)]
        rainfall: Option<PathBuf>,

        /// 降水量の開始日 (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// 降水量の終了日 (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// 先頭N行だけ処理（お試し用）
        #[arg(long)]
        limit: Option<usize>,

        /// 並列スレッド数（省略時はCPU数）
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// 住所を分割して表示（確認用）
    Parse {
        /// 住所
        #[arg(required = true)]
        addresses: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 観測所マスタを設定
        #[arg(long)]
        set_observatory: Option<PathBuf>,

        /// 住所の列名を設定
        #[arg(long)]
        set_column: Option<String>,

        /// 降水量データを設定
        #[arg(long)]
        set_rainfall: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Excel,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "excel" | "xlsx" => Ok(OutputFormat::Excel),
            _ => Err(format!("Unknown format: {}. Use csv, json, or excel", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Excel => write!(f, "excel"),
        }
    }
}
