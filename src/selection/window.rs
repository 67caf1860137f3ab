//! Balanced strike-window selection.
//!
//! Given a chain and a reference (underlying) price, the selector takes the
//! nearest `floor(n/2)` strikes from each side of the reference and returns
//! them in ascending strike order. The halving rule and its edge behavior
//! mirror the upstream table exactly; see [`select_window`].

use crate::error::{ChainError, ChainResult};
use crate::selection::order::sort_by_strike;
use crate::types::{Chain, Row};

/// Picks a symmetric window of rows around `reference_price`.
///
/// Algorithm:
///
/// 1. Empty input or `count == 0` returns an empty chain (not an error).
/// 2. `effective = min(count, rows.len())`, `half = effective / 2` (floor).
/// 3. Rows with `strike > reference_price` are ordered ascending (nearest
///    first), rows with `strike <= reference_price` descending (nearest
///    first); each side contributes its first `half` rows.
/// 4. The two sides are concatenated and stably sorted ascending by strike.
///
/// Two quirks of the halving rule are contractual and deliberately kept:
///
/// - An odd `effective` yields `2 * half` rows, one fewer than requested,
///   whenever both sides have at least `half` candidates.
/// - A side with fewer than `half` eligible rows contributes all it has; the
///   other side is *not* back-filled to compensate, so the result can be
///   smaller than `2 * half`.
///
/// # Errors
///
/// - [`ChainError::Configuration`] if `reference_price` is not finite.
/// - [`ChainError::MalformedRow`] if any row's strike is not finite.
pub fn select_window(chain: &Chain, reference_price: f64, count: usize) -> ChainResult<Chain> {
    ensure_reference_price(reference_price)?;
    for (idx, row) in chain.rows.iter().enumerate() {
        ensure_finite(idx + 1, &chain.schema.strike_column, row.strike)?;
    }

    if chain.rows.is_empty() || count == 0 {
        return Ok(Chain::new(chain.schema.clone(), Vec::new()));
    }

    let effective = count.min(chain.rows.len());
    let half = effective / 2;

    let mut above: Vec<&Row> = chain
        .rows
        .iter()
        .filter(|row| row.strike > reference_price)
        .collect();
    above.sort_by(|a, b| a.strike.total_cmp(&b.strike));
    above.truncate(half);

    let mut below_or_equal: Vec<&Row> = chain
        .rows
        .iter()
        .filter(|row| row.strike <= reference_price)
        .collect();
    below_or_equal.sort_by(|a, b| b.strike.total_cmp(&a.strike));
    below_or_equal.truncate(half);

    let mut picked: Vec<Row> = above
        .into_iter()
        .chain(below_or_equal)
        .cloned()
        .collect();
    sort_by_strike(&mut picked);

    Ok(Chain::new(chain.schema.clone(), picked))
}

pub(crate) fn ensure_reference_price(reference_price: f64) -> ChainResult<()> {
    if reference_price.is_finite() {
        Ok(())
    } else {
        Err(ChainError::Configuration {
            message: format!("reference price must be a finite number (got {reference_price})"),
        })
    }
}

pub(crate) fn ensure_finite(row: usize, column: &str, value: f64) -> ChainResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ChainError::MalformedRow {
            row,
            column: column.to_string(),
            raw: value.to_string(),
            message: "expected finite number".to_string(),
        })
    }
}
