//! Core data model for the options chain.
//!
//! Ingestion produces an in-memory [`Chain`] of [`Row`]s; the selection layer
//! reads chains and produces new ones. Nothing in this crate mutates a chain
//! in place.

use std::collections::BTreeMap;

/// One option-chain record.
///
/// Only `strike` and `moneyness` are ever inspected by the selection layer.
/// Every other attribute of the source record (risk ratios, prices,
/// probabilities, open interest, ...) is carried in `extras` unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Strike price of the option.
    pub strike: f64,
    /// Signed moneyness indicator: `>= 0` is in the money, `< 0` is out.
    pub moneyness: f64,
    /// Remaining numeric attributes, keyed by source column name.
    ///
    /// `BTreeMap` keeps column order deterministic for export.
    pub extras: BTreeMap<String, f64>,
}

impl Row {
    /// Create a row with no extra attributes.
    pub fn new(strike: f64, moneyness: f64) -> Self {
        Self {
            strike,
            moneyness,
            extras: BTreeMap::new(),
        }
    }

    /// Create a row carrying extra attributes.
    pub fn with_extras(strike: f64, moneyness: f64, extras: BTreeMap<String, f64>) -> Self {
        Self {
            strike,
            moneyness,
            extras,
        }
    }
}

/// Names of the two columns the selection layer depends on.
///
/// The defaults match the upstream table feed (`strike` /
/// `percent_in_out_money`); override them when ingesting a source that names
/// these columns differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSchema {
    /// Column holding the strike price.
    pub strike_column: String,
    /// Column holding the signed moneyness value.
    pub moneyness_column: String,
}

impl ChainSchema {
    /// Create a schema with explicit column names.
    pub fn new(strike_column: impl Into<String>, moneyness_column: impl Into<String>) -> Self {
        Self {
            strike_column: strike_column.into(),
            moneyness_column: moneyness_column.into(),
        }
    }
}

impl Default for ChainSchema {
    fn default() -> Self {
        Self::new("strike", "percent_in_out_money")
    }
}

/// In-memory options-chain dataset.
///
/// Rows are stored in source order; duplicate strikes are legal and every
/// operation in this crate preserves the relative order of ties.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// Schema describing which source columns back `strike` and `moneyness`.
    pub schema: ChainSchema,
    /// Ordered row storage.
    pub rows: Vec<Row>,
}

impl Chain {
    /// Create a chain from schema and rows.
    pub fn new(schema: ChainSchema, rows: Vec<Row>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the chain.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Create a new chain containing only rows that match `predicate`.
    ///
    /// The returned chain preserves the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Row) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Maximum value of an extra column across all rows, ignoring rows that
    /// lack the column.
    ///
    /// Returns `None` when no row carries the column. The upstream table uses
    /// this to normalize its `%Return 1σ/%Max Risk` gradient against the
    /// dataset maximum.
    pub fn max_extra(&self, column: &str) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.extras.get(column).copied())
            .fold(None, |acc, v| match acc {
                Some(a) => Some(a.max(v)),
                None => Some(v),
            })
    }
}
