//! 照合結果の出力
//!
//! CSV / JSON / Excel。出力先が無い場合は CSV を標準出力へ書く。

pub mod csv;
pub mod excel;
pub mod json;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::loader::Table;
use std::path::Path;

/// 出力形式を決める（`--format` → 拡張子 → CSV）
pub fn resolve_format(format: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    if let Some(format) = format {
        return format;
    }
    output
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .and_then(|e| e.parse().ok())
        .unwrap_or_default()
}

/// 出力先が無い場合は CSV 以外を指定されても CSV にする
pub fn effective_format(format: &OutputFormat, output: Option<&Path>) -> OutputFormat {
    if output.is_none() && *format != OutputFormat::Csv {
        log::warn!("出力先が指定されていないため {} ではなく CSV を標準出力に書きます", format);
        return OutputFormat::Csv;
    }
    format.clone()
}

pub fn export_table(table: &Table, format: &OutputFormat, output: Option<&Path>) -> Result<()> {
    let Some(output_path) = output else {
        effective_format(format, output);
        let stdout = std::io::stdout();
        return csv::write_csv(table, &mut stdout.lock());
    };

    match format {
        OutputFormat::Csv => {
            let mut file = std::io::BufWriter::new(std::fs::File::create(output_path)?);
            csv::write_csv(table, &mut file)?;
        }
        OutputFormat::Json => json::write_json(table, output_path)?,
        OutputFormat::Excel => excel::write_excel(table, output_path)?,
    }

    log::info!("{} 行を出力: {}", table.rows.len(), output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(Some(OutputFormat::Json), None), OutputFormat::Json);
        assert_eq!(
            resolve_format(None, Some(&PathBuf::from("out.xlsx"))),
            OutputFormat::Excel
        );
        assert_eq!(
            resolve_format(None, Some(&PathBuf::from("out.JSON"))),
            OutputFormat::Json
        );
        assert_eq!(resolve_format(None, Some(&PathBuf::from("out.txt"))), OutputFormat::Csv);
        assert_eq!(resolve_format(None, None), OutputFormat::Csv);
    }

    #[test]
    fn test_stdout_is_always_csv() {
        assert_eq!(effective_format(&OutputFormat::Json, None), OutputFormat::Csv);
        assert_eq!(effective_format(&OutputFormat::Excel, None), OutputFormat::Csv);
        assert_eq!(
            effective_format(&OutputFormat::Excel, Some(&PathBuf::from("out.xlsx"))),
            OutputFormat::Excel
        );
    }
}
