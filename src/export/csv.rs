use crate::error::Result;
use crate::loader::Table;
use std::io::Write;

/// 必要な場合のみダブルクォートで囲む
pub(crate) fn quote_field(value: &str) -> String {
    let needs_quote = value.contains([',', '"', '\n', '\r'])
        || value.starts_with(' ')
        || value.ends_with(' ');
    if needs_quote {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_line<W: Write>(writer: &mut W, fields: &[String]) -> Result<()> {
    let line = fields
        .iter()
        .map(|f| quote_field(f))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", line)?;
    Ok(())
}

pub fn write_csv<W: Write>(table: &Table, writer: &mut W) -> Result<()> {
    write_line(writer, &table.headers)?;
    for row in &table.rows {
        write_line(writer, row)?;
    }
    writer.flush()?;
    Ok(())
}
