//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"strike":210.0,...}, ...]` (the shape the
//!   upstream table feed serves)
//! - Newline-delimited JSON (NDJSON): one object per line
//!
//! Every top-level field of each object must be numeric. The columns named by
//! the [`ChainSchema`] become `strike` and `moneyness`; everything else lands
//! in the row's `extras` untouched.

use std::fs;
use std::path::Path;

use crate::error::{ChainError, ChainResult};
use crate::types::{Chain, ChainSchema, Row};

/// Ingest a JSON file into an in-memory [`Chain`].
pub fn ingest_json_from_path(path: impl AsRef<Path>, schema: &ChainSchema) -> ChainResult<Chain> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text, schema)
}

/// Ingest JSON from an in-memory string into a [`Chain`].
pub fn ingest_json_from_str(input: &str, schema: &ChainSchema) -> ChainResult<Chain> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChainError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => ingest_json_values(&items, schema),
            serde_json::Value::Object(_) => ingest_json_values(std::slice::from_ref(&v), schema),
            _ => Err(ChainError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                ChainError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        ingest_json_values(&values, schema)
    }
}

fn ingest_json_values(values: &[serde_json::Value], schema: &ChainSchema) -> ChainResult<Chain> {
    let mut rows: Vec<Row> = Vec::with_capacity(values.len());

    for (idx0, v) in values.iter().enumerate() {
        let row_num = idx0 + 1;
        let obj = v.as_object().ok_or_else(|| ChainError::SchemaMismatch {
            message: format!("row {row_num} is not a json object"),
        })?;

        let strike = required_number(row_num, obj, &schema.strike_column)?;
        let moneyness = required_number(row_num, obj, &schema.moneyness_column)?;

        let mut row = Row::new(strike, moneyness);
        for (key, jv) in obj {
            if key == &schema.strike_column || key == &schema.moneyness_column {
                continue;
            }
            let n = jv.as_f64().ok_or_else(|| ChainError::MalformedRow {
                row: row_num,
                column: key.clone(),
                raw: jv.to_string(),
                message: "expected number".to_string(),
            })?;
            row.extras.insert(key.clone(), n);
        }
        rows.push(row);
    }

    Ok(Chain::new(schema.clone(), rows))
}

fn required_number(
    row: usize,
    obj: &serde_json::Map<String, serde_json::Value>,
    column: &str,
) -> ChainResult<f64> {
    let jv = obj.get(column).ok_or_else(|| ChainError::SchemaMismatch {
        message: format!("row {row} missing required field '{column}'"),
    })?;
    jv.as_f64().ok_or_else(|| ChainError::MalformedRow {
        row,
        column: column.to_string(),
        raw: jv.to_string(),
        message: "expected number".to_string(),
    })
}
