//! The full filter → window → order pipeline.

use crate::error::ChainResult;
use crate::selection::filter::{filter_moneyness, FilterMode};
use crate::selection::window::{ensure_finite, ensure_reference_price, select_window};
use crate::types::Chain;

/// Selects the display window for an options-chain table.
///
/// Applies the moneyness filter, then picks a balanced window of `count` rows
/// around `reference_price` ([`select_window`]), returning them sorted
/// ascending by strike. Stateless: the caller re-invokes this whenever the
/// dataset, the count, or the filter mode changes, and identical inputs always
/// produce identical output.
///
/// # Errors
///
/// - [`crate::ChainError::Configuration`] if `reference_price` is not finite.
/// - [`crate::ChainError::MalformedRow`] if any row's strike or moneyness is
///   not finite. Rows are validated before filtering, so a malformed row is
///   reported even when the filter would have dropped it.
pub fn select_rows(
    chain: &Chain,
    reference_price: f64,
    count: usize,
    mode: FilterMode,
) -> ChainResult<Chain> {
    ensure_reference_price(reference_price)?;
    for (idx, row) in chain.rows.iter().enumerate() {
        ensure_finite(idx + 1, &chain.schema.strike_column, row.strike)?;
        ensure_finite(idx + 1, &chain.schema.moneyness_column, row.moneyness)?;
    }

    let filtered = filter_moneyness(chain, mode);
    select_window(&filtered, reference_price, count)
}
