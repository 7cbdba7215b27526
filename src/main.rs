use amedas_matcher::{cli, column_selector, config, error, export, loader, output, rainfall};
use amedas_matcher_common::{cleanse, try_parse, MatchSummary, MatchingPipeline};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{MatcherError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_level));

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Match {
            input,
            column,
            observatory,
            output,
            format,
            with_components,
            rainfall: rainfall_path_arg,
            start,
            end,
            limit,
            jobs,
        } => {
            let started = Instant::now();
            eprintln!("🌧 amedas-matcher - 観測所照合\n");

            if let Some(jobs) = jobs {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build_global()
                    .map_err(|e| MatcherError::Config(format!("スレッド数の設定に失敗: {}", e)))?;
            }

            // 1. 読み込み
            eprintln!("[1/4] データを読み込み中...");
            let mut table = loader::load_table(&input)?;
            if let Some(limit) = limit {
                table.truncate(limit);
            }
            let address_index = column_selector::resolve_address_column(
                &table,
                column.as_deref(),
                config.address_column.as_deref(),
            )?;

            let observatory_path = config.resolve_observatory(observatory)?;
            let observatories = loader::load_observatories(
                &observatory_path,
                &config.observatory_address_column,
                &config.observatory_name_column,
            )?;
            eprintln!(
                "✔ 住所 {}件（列: {}）/ 観測所 {}件\n",
                table.len(),
                table.headers[address_index],
                observatories.len()
            );

            // 2. 照合
            eprintln!("[2/4] 照合中...");
            let addresses = table.column_values(address_index);
            let pb = ProgressBar::new(addresses.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            let pipeline = MatchingPipeline::new(&observatories);
            let outcomes = pipeline.run_detailed(&addresses, || pb.inc(1));
            pb.finish_and_clear();
            eprintln!("✔ 照合完了\n");

            let mut result_table = output::build_output_table(&table, &outcomes, with_components);

            // 3. 降水量
            match rainfall_path_arg.or_else(|| config.rainfall_path.clone()) {
                Some(rainfall_path) => {
                    eprintln!("[3/4] 降水量を紐づけ中...");
                    let rainfall_table = loader::load_table(&rainfall_path)?;
                    let records = rainfall::records_from_table(&rainfall_table)?;
                    let range = rainfall::resolve_range(&records, start.as_deref(), end.as_deref())?;
                    let observatory_index = output::observatory_column(&result_table);
                    result_table = rainfall::join(&result_table, observatory_index, &records, range);
                    match range {
                        Some(r) => eprintln!("✔ {} 〜 {} の降水量を紐づけ\n", r.start, r.end),
                        None => eprintln!("✔ 降水量データが空のため日付は空欄\n"),
                    }
                }
                None => {
                    if start.is_some() || end.is_some() {
                        log::warn!("降水量データが指定されていないため期間指定を無視します");
                    }
                    eprintln!("[3/4] 降水量データなし（スキップ）\n");
                }
            }

            // 4. 出力
            eprintln!("[4/4] 出力中...");
            let format = export::resolve_format(format, output.as_deref());
            export::export_table(&result_table, &format, output.as_deref())?;
            if let Some(path) = &output {
                eprintln!("✔ {}出力: {}", format, path.display());
            }

            let summary = MatchSummary::from_results(outcomes.iter().map(|o| &o.result));
            print_summary(&summary);
            eprintln!("\n✅ 完了（{:.1}秒）", started.elapsed().as_secs_f64());
        }

        Commands::Parse { addresses } => {
            for raw in &addresses {
                let cleansed = cleanse(raw);
                println!("{}", raw);
                println!("  正規化: {}", cleansed);
                match try_parse(&cleansed) {
                    Ok(c) => {
                        println!("  都道府県: {}", c.prefecture);
                        println!("  市区郡: {}", c.city);
                        println!("  町丁目: {}", c.street);
                        println!("  番地: {}", c.block);
                    }
                    Err(e) => println!("  {}", e),
                }
            }
        }

        Commands::Config {
            show,
            set_observatory,
            set_column,
            set_rainfall,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_observatory {
                config.observatory_path = Some(path);
                changed = true;
            }
            if let Some(name) = set_column {
                config.address_column = Some(name);
                changed = true;
            }
            if let Some(path) = set_rainfall {
                config.rainfall_path = Some(path);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let display_path = |p: &Option<std::path::PathBuf>| {
                    p.as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                };
                println!("設定:");
                println!("  住所の列名: {}", config.address_column.as_deref().unwrap_or("未設定"));
                println!("  観測所マスタ: {}", display_path(&config.observatory_path));
                println!("  観測所マスタの所在地列: {}", config.observatory_address_column);
                println!("  観測所マスタの観測所名列: {}", config.observatory_name_column);
                println!("  降水量データ: {}", display_path(&config.rainfall_path));
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &MatchSummary) {
    eprintln!("\n範囲別マッチング率（{}件）:", summary.total);
    for share in &summary.shares {
        eprintln!("  {:>3}% {:>6}件  {}", share.percent, share.count, share.level);
    }
}
