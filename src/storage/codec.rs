//! Record log text format: comma-delimited, one record per line,
//! `timestamp,category,value[,comment]`, no header.

use crate::errors::{AppError, AppResult};
use crate::models::{Category, Record};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

/// Parse a whole log blob. Blank lines are skipped; the comment column is
/// optional because the oldest files only had three.
pub fn parse_log(text: &str) -> AppResult<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if !(3..=4).contains(&row.len()) {
            return Err(AppError::MalformedRow {
                line,
                reason: format!("expected 3 or 4 fields, found {}", row.len()),
            });
        }

        let category = Category::from_log_str(&row[1]).ok_or_else(|| AppError::MalformedRow {
            line,
            reason: format!("unknown category '{}'", &row[1]),
        })?;

        records.push(Record::new(
            &row[0],
            category,
            &row[2],
            row.get(3).unwrap_or(""),
        ));
    }

    Ok(records)
}

/// Serialize the whole log. Always four columns, minimal quoting, CRLF
/// line endings to stay byte-compatible with files written by older versions.
pub fn render_log(records: &[Record]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    for r in records {
        wtr.write_record(r.as_row())?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Storage(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Storage(e.to_string()))
}
