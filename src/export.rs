//! Serializing a [`Chain`] back out for downstream consumers.
//!
//! The presentation layer renders whatever the selection pipeline returns;
//! these helpers produce the two shapes it understands: the JSON
//! array-of-objects the upstream feed uses, and CSV with one column per
//! attribute. Column names come from the chain's [`crate::types::ChainSchema`]
//! plus each row's extra-attribute keys.

use std::io;
use std::path::Path;

use crate::error::{ChainError, ChainResult};
use crate::types::{Chain, Row};

/// Serialize a chain as a JSON array of objects.
///
/// Each row becomes one object holding the strike and moneyness columns
/// (named per the chain's schema) plus every extra attribute.
///
/// # Errors
///
/// [`ChainError::MalformedRow`] if a row carries a non-finite value, which
/// JSON cannot represent.
pub fn chain_to_json_string(chain: &Chain) -> ChainResult<String> {
    let mut out: Vec<serde_json::Value> = Vec::with_capacity(chain.row_count());

    for (idx, row) in chain.rows.iter().enumerate() {
        let row_num = idx + 1;
        let mut obj = serde_json::Map::new();
        obj.insert(
            chain.schema.strike_column.clone(),
            json_number(row_num, &chain.schema.strike_column, row.strike)?,
        );
        obj.insert(
            chain.schema.moneyness_column.clone(),
            json_number(row_num, &chain.schema.moneyness_column, row.moneyness)?,
        );
        for (key, &value) in &row.extras {
            obj.insert(key.clone(), json_number(row_num, key, value)?);
        }
        out.push(serde_json::Value::Object(obj));
    }

    // Serializing Vec<Value> cannot fail.
    serde_json::to_string_pretty(&out).map_err(|e| ChainError::SchemaMismatch {
        message: format!("json serialization failed: {e}"),
    })
}

/// Serialize a chain as CSV with headers, one column per attribute.
///
/// Extra columns are the union of every row's extra keys, in lexicographic
/// order after the strike and moneyness columns. Every row must carry every
/// extra column; a missing attribute is a [`ChainError::SchemaMismatch`]
/// (empty cells would be rejected on re-ingestion).
pub fn chain_to_csv_string(chain: &Chain) -> ChainResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_chain(&mut wtr, chain)?;
    let buf = wtr
        .into_inner()
        .map_err(|e| ChainError::Io(e.into_error()))?;
    String::from_utf8(buf)
        .map_err(|e| ChainError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write a chain as CSV to a file.
///
/// Same shape and rules as [`chain_to_csv_string`].
pub fn write_chain_csv(chain: &Chain, path: impl AsRef<Path>) -> ChainResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_chain(&mut wtr, chain)?;
    wtr.flush()?;
    Ok(())
}

fn write_chain<W: io::Write>(wtr: &mut csv::Writer<W>, chain: &Chain) -> ChainResult<()> {
    let extra_columns = extra_column_union(chain);

    let mut header: Vec<&str> = vec![&chain.schema.strike_column, &chain.schema.moneyness_column];
    header.extend(extra_columns.iter().map(String::as_str));
    wtr.write_record(&header)?;

    for (idx, row) in chain.rows.iter().enumerate() {
        let row_num = idx + 1;
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        record.push(row.strike.to_string());
        record.push(row.moneyness.to_string());
        for column in &extra_columns {
            let value = extra_value(row_num, row, column)?;
            record.push(value.to_string());
        }
        wtr.write_record(&record)?;
    }
    Ok(())
}

fn extra_column_union(chain: &Chain) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in &chain.rows {
        for key in row.extras.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }
    // BTreeMap keys come out sorted per row; sort the union as a whole.
    columns.sort();
    columns
}

fn extra_value(row_num: usize, row: &Row, column: &str) -> ChainResult<f64> {
    row.extras
        .get(column)
        .copied()
        .ok_or_else(|| ChainError::SchemaMismatch {
            message: format!("row {row_num} missing extra column '{column}'"),
        })
}

fn json_number(row: usize, column: &str, value: f64) -> ChainResult<serde_json::Value> {
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .ok_or_else(|| ChainError::MalformedRow {
            row,
            column: column.to_string(),
            raw: value.to_string(),
            message: "json cannot represent non-finite numbers".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{chain_to_csv_string, chain_to_json_string};
    use crate::error::ChainError;
    use crate::types::{Chain, ChainSchema, Row};
    use std::collections::BTreeMap;

    fn sample_chain() -> Chain {
        let extras = BTreeMap::from([
            ("delta".to_string(), 0.42),
            ("opt_open_int".to_string(), 1200.0),
        ]);
        Chain::new(
            ChainSchema::default(),
            vec![
                Row::with_extras(210.0, -2.0, extras.clone()),
                Row::with_extras(215.0, 0.3, extras),
            ],
        )
    }

    #[test]
    fn json_export_uses_schema_column_names() {
        let chain = sample_chain();
        let text = chain_to_json_string(&chain).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["strike"], 210.0);
        assert_eq!(rows[0]["percent_in_out_money"], -2.0);
        assert_eq!(rows[0]["delta"], 0.42);
        assert_eq!(rows[1]["opt_open_int"], 1200.0);
    }

    #[test]
    fn json_export_rejects_non_finite_values() {
        let mut chain = sample_chain();
        chain.rows[0].moneyness = f64::NAN;
        let err = chain_to_json_string(&chain).unwrap_err();
        assert!(matches!(err, ChainError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn csv_export_puts_required_columns_first() {
        let chain = sample_chain();
        let text = chain_to_csv_string(&chain).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "strike,percent_in_out_money,delta,opt_open_int"
        );
        assert_eq!(lines.next().unwrap(), "210,-2,0.42,1200");
        assert_eq!(lines.next().unwrap(), "215,0.3,0.42,1200");
    }

    #[test]
    fn csv_export_rejects_ragged_extras() {
        let mut chain = sample_chain();
        chain.rows[1].extras.remove("delta");
        let err = chain_to_csv_string(&chain).unwrap_err();
        match err {
            ChainError::SchemaMismatch { message } => {
                assert!(message.contains("row 2"));
                assert!(message.contains("delta"));
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_chain_exports_cleanly() {
        let chain = Chain::new(ChainSchema::default(), vec![]);
        assert_eq!(chain_to_json_string(&chain).unwrap(), "[]");
        let csv_text = chain_to_csv_string(&chain).unwrap();
        assert_eq!(csv_text.trim_end(), "strike,percent_in_out_money");
    }
}
