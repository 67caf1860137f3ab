//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{ChainError, ChainResult};
use crate::types::{Chain, ChainSchema, Row};

/// Ingest a CSV file into an in-memory [`Chain`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain the schema's strike and moneyness columns (order can
///   differ); every other column becomes an extra attribute.
/// - Every cell must parse as a finite number. Empty or unparsable cells are
///   rejected with [`ChainError::MalformedRow`] rather than coerced.
pub fn ingest_csv_from_path(path: impl AsRef<Path>, schema: &ChainSchema) -> ChainResult<Chain> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &ChainSchema,
) -> ChainResult<Chain> {
    let headers = rdr.headers()?.clone();

    let strike_idx = required_column(&headers, &schema.strike_column)?;
    let moneyness_idx = required_column(&headers, &schema.moneyness_column)?;

    let mut rows: Vec<Row> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let strike = parse_cell(user_row, &schema.strike_column, record.get(strike_idx))?;
        let moneyness = parse_cell(user_row, &schema.moneyness_column, record.get(moneyness_idx))?;

        let mut row = Row::new(strike, moneyness);
        for (col_idx, header) in headers.iter().enumerate() {
            if col_idx == strike_idx || col_idx == moneyness_idx {
                continue;
            }
            let value = parse_cell(user_row, header, record.get(col_idx))?;
            row.extras.insert(header.to_string(), value);
        }
        rows.push(row);
    }

    Ok(Chain::new(schema.clone(), rows))
}

fn required_column(headers: &csv::StringRecord, name: &str) -> ChainResult<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        ChainError::SchemaMismatch {
            message: format!(
                "missing required column '{name}'. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        }
    })
}

fn parse_cell(row: usize, column: &str, raw: Option<&str>) -> ChainResult<f64> {
    let raw = raw.unwrap_or("");
    let trimmed = raw.trim();

    let malformed = |message: String| ChainError::MalformedRow {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    if trimmed.is_empty() {
        return Err(malformed("empty cell, expected number".to_string()));
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|e| malformed(e.to_string()))?;
    if !value.is_finite() {
        return Err(malformed("expected finite number".to_string()));
    }
    Ok(value)
}
