use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// MIME type used for downloaded CSV files
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// A value that can be written into a CSV cell.
///
/// Absent values (`None`, JSON `null`) become an empty cell.
pub trait CsvCell {
    fn to_cell(&self) -> String;
}

impl CsvCell for String {
    fn to_cell(&self) -> String {
        self.clone()
    }
}

impl CsvCell for &str {
    fn to_cell(&self) -> String {
        (*self).to_string()
    }
}

impl<T: CsvCell> CsvCell for Option<T> {
    fn to_cell(&self) -> String {
        self.as_ref().map(CsvCell::to_cell).unwrap_or_default()
    }
}

impl CsvCell for Value {
    fn to_cell(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            // Whole floats print without a fraction, as JavaScript does
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() => f.to_string(),
                _ => n.to_string(),
            },
            Value::Array(_) | Value::Object(_) => self.to_string(),
        }
    }
}

/// Quotes a cell if it contains a separator, a quote or a line break,
/// doubling any quotes inside.
pub fn escape_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Union of all record keys in first-seen order
pub fn collect_headers<K, V>(rows: &[IndexMap<K, V>]) -> Vec<String>
where
    K: AsRef<str>,
{
    let mut headers: IndexSet<&str> = IndexSet::new();
    for row in rows {
        for key in row.keys() {
            headers.insert(key.as_ref());
        }
    }
    headers.into_iter().map(str::to_string).collect()
}

/// Serializes records into CSV text.
///
/// Records may carry different keys; the header row is the union of all
/// keys and a record missing a column gets an empty cell. Rows are joined
/// with `\n` without a trailing line break. No records produce an empty string.
pub fn to_csv<K, V>(rows: &[IndexMap<K, V>]) -> String
where
    K: AsRef<str> + std::hash::Hash + Eq + std::borrow::Borrow<str>,
    V: CsvCell,
{
    let headers = collect_headers(rows);
    if headers.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape_cell(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| {
                let value = row.get(header.as_str()).map(CsvCell::to_cell).unwrap_or_default();
                escape_cell(&value)
            })
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Download file name in the `{stem}_{YYYY-MM-DD}.csv` form
pub fn export_filename(stem: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", stem, date.format("%Y-%m-%d"))
}
