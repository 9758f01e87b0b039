use crate::error::{Result, StudentFilesError};
use serde_json::Value;
use std::cmp::Ordering;

/// One output row of the score report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub average: f64,
}

/// Build report rows from the parsed input document, which must be a JSON
/// array. Every array element yields exactly one row; malformed elements
/// degrade to empty fields and an average of 0.0 rather than being dropped.
pub fn rows_from_value(doc: &Value, input_name: &str) -> Result<Vec<ReportRow>> {
    let records = doc.as_array().ok_or_else(|| StudentFilesError::NotAnArray {
        path: input_name.to_string(),
    })?;

    Ok(records.iter().map(row_from_record).collect())
}

fn row_from_record(record: &Value) -> ReportRow {
    ReportRow {
        id: field_text(record.get("id")),
        name: field_text(record.get("name")),
        average: score_average(record.get("scores")),
    }
}

/// `id` and `name` may be strings or numbers; anything missing or
/// unrenderable becomes the empty string.
fn field_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Arithmetic mean of the scores, rounded to two decimal places with ties
/// to even. Missing, empty, or non-array scores — and any single
/// non-numeric element — yield 0.0 for the whole record.
pub fn score_average(scores: Option<&Value>) -> f64 {
    let Some(Value::Array(values)) = scores else {
        return 0.0;
    };
    if values.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    for value in values {
        match value.as_f64() {
            Some(score) => sum += score,
            None => return 0.0,
        }
    }

    round_half_even(sum / values.len() as f64)
}

fn round_half_even(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Order rows by average descending. `sort_by` is stable, so records with
/// equal averages keep their input order.
pub fn sort_rows(rows: &mut [ReportRow]) {
    rows.sort_by(|a, b| b.average.partial_cmp(&a.average).unwrap_or(Ordering::Equal));
}
