//! Writing the answer table

use crate::models::AnswerRow;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the header line then one `zipcode,rate` line per row, in order.
///
/// The header goes out byte for byte, whatever its field count; only the
/// answer rows pass through the csv writer.
pub fn write_answers<W: Write>(mut out: W, header: &str, rows: &[AnswerRow]) -> Result<()> {
    out.write_all(header.as_bytes())?;
    out.write_all(b"\n")?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create or overwrite the answer file at `path`.
pub fn write_answer_file(path: &Path, header: &str, rows: &[AnswerRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_answers(file, header, rows)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(zip_code: &str, rate: Option<&str>) -> AnswerRow {
        AnswerRow {
            zip_code: zip_code.to_string(),
            rate: rate.map(str::to_string),
        }
    }

    fn render(header: &str, rows: &[AnswerRow]) -> String {
        let mut buf = Vec::new();
        write_answers(&mut buf, header, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_rate_leaves_trailing_comma() {
        let out = render(
            "zipcode,rate",
            &[row("36049", Some("245.20")), row("99999", None)],
        );
        assert_eq!(out, "zipcode,rate\n36049,245.20\n99999,\n");
    }

    #[test]
    fn test_header_only() {
        assert_eq!(render("zipcode,rate", &[]), "zipcode,rate\n");
    }

    #[test]
    fn test_header_field_count_is_free() {
        let rows = [row("36049", Some("2.00")), row("99999", None)];
        assert_eq!(render("zipcode,rate,", &rows), "zipcode,rate,\n36049,2.00\n99999,\n");
        assert_eq!(render("zipcode", &rows), "zipcode\n36049,2.00\n99999,\n");
    }

    #[test]
    fn test_empty_header_is_an_empty_line() {
        assert_eq!(render("", &[]), "\n");
    }

    #[test]
    fn test_header_written_verbatim() {
        let out = render("ZIP Code,SLCSP Rate", &[row("64148", Some("245.20"))]);
        assert_eq!(out, "ZIP Code,SLCSP Rate\n64148,245.20\n");
    }
}
