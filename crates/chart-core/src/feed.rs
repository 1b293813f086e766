// File: crates/chart-core/src/feed.rs
// Summary: Static `date,value` CSV feed parsing.
// Notes:
// - The month field is the 1-based calendar month: `2023-6-15` is 15 June 2023.
// - Dates land on UTC midnight.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::{ChartError, Result};
use crate::sample::Sample;

/// Parse a `YYYY-M-D` date (dash separated, padding optional).
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    let bad = || ChartError::MalformedSample(format!("unparsable date '{raw}'"));
    let mut parts = raw.trim().split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(bad());
    };
    let year: i32 = y.trim().parse().map_err(|_| bad())?;
    let month: u32 = m.trim().parse().map_err(|_| bad())?;
    let day: u32 = d.trim().parse().map_err(|_| bad())?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(bad)?;
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(bad)
}

/// Render a timestamp back to the feed's day-granularity `YYYY-M-D` form.
pub fn format_date(ts: DateTime<Utc>) -> String {
    format!("{}-{}-{}", ts.year(), ts.month(), ts.day())
}

/// Parse one feed row into a sample labelled `label`.
pub fn parse_row(label: &str, date: &str, value: &str) -> Result<Sample> {
    let ts = parse_date(date)?;
    let v: f64 = value
        .trim()
        .parse()
        .map_err(|_| ChartError::MalformedSample(format!("non-numeric value '{value}'")))?;
    Sample::try_new(label, ts, v)
}

/// Parse a whole feed. Any bad row fails the load; nothing partial is returned.
pub fn parse_csv<R: Read>(label: &str, reader: R) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ChartError::load(label, e.to_string()))?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let col = |name: &str| headers.iter().position(|h| h == name);
    let (Some(i_date), Some(i_value)) = (col("date"), col("value")) else {
        return Err(ChartError::load(label, format!("expected header 'date,value', got {headers:?}")));
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| ChartError::load(label, e.to_string()))?;
        let line = row + 2; // header is line 1
        let (Some(date), Some(value)) = (rec.get(i_date), rec.get(i_value)) else {
            return Err(ChartError::load(label, format!("line {line}: missing column")));
        };
        let sample = parse_row(label, date, value)
            .map_err(|e| ChartError::load(label, format!("line {line}: {e}")))?;
        out.push(sample);
    }

    if out.is_empty() {
        return Err(ChartError::load(label, "feed has no rows"));
    }
    tracing::debug!(feed = label, rows = out.len(), "parsed static feed");
    Ok(out)
}

/// Load a feed from disk. The label is the file stem.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| ChartError::load_path(path, e.to_string()))?;
    parse_csv(&feed_label(path), file)
}

/// Series label derived from a feed path.
pub fn feed_label(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("feed")
        .to_string()
}
