//! Moneyness filtering for [`crate::types::Chain`].

use serde::{Deserialize, Serialize};

use crate::types::Chain;

/// Moneyness restriction applied before windowing.
///
/// The serialized form matches the upstream dropdown values (`"all"`, `"in"`,
/// `"out"`), so callers can persist or transmit the UI state directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Keep every row.
    #[default]
    All,
    /// Keep rows with `moneyness >= 0` (in the money).
    In,
    /// Keep rows with `moneyness < 0` (out of the money).
    Out,
}

/// Returns a new [`Chain`] restricted to rows matching `mode`.
///
/// Pure and order-preserving; `FilterMode::All` returns an unchanged copy and
/// an empty chain stays empty.
pub fn filter_moneyness(chain: &Chain, mode: FilterMode) -> Chain {
    match mode {
        FilterMode::All => chain.clone(),
        FilterMode::In => chain.filter_rows(|row| row.moneyness >= 0.0),
        FilterMode::Out => chain.filter_rows(|row| row.moneyness < 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_moneyness, FilterMode};
    use crate::types::{Chain, ChainSchema, Row};

    fn sample_chain() -> Chain {
        let rows = vec![
            Row::new(200.0, -6.7),
            Row::new(210.0, -2.0),
            Row::new(215.0, 0.0),
            Row::new(220.0, 2.7),
        ];
        Chain::new(ChainSchema::default(), rows)
    }

    #[test]
    fn all_mode_returns_input_unchanged() {
        let chain = sample_chain();
        let out = filter_moneyness(&chain, FilterMode::All);
        assert_eq!(out, chain);
    }

    #[test]
    fn in_mode_keeps_zero_and_positive_moneyness() {
        let chain = sample_chain();
        let out = filter_moneyness(&chain, FilterMode::In);
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows[0].strike, 215.0);
        assert_eq!(out.rows[1].strike, 220.0);
    }

    #[test]
    fn out_mode_keeps_negative_moneyness() {
        let chain = sample_chain();
        let out = filter_moneyness(&chain, FilterMode::Out);
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows[0].strike, 200.0);
        assert_eq!(out.rows[1].strike, 210.0);
    }

    #[test]
    fn empty_chain_stays_empty() {
        let chain = Chain::new(ChainSchema::default(), vec![]);
        for mode in [FilterMode::All, FilterMode::In, FilterMode::Out] {
            assert!(filter_moneyness(&chain, mode).rows.is_empty());
        }
    }

    #[test]
    fn wire_form_matches_upstream_dropdown() {
        assert_eq!(serde_json::to_string(&FilterMode::All).unwrap(), "\"all\"");
        assert_eq!(serde_json::to_string(&FilterMode::In).unwrap(), "\"in\"");
        assert_eq!(
            serde_json::from_str::<FilterMode>("\"out\"").unwrap(),
            FilterMode::Out
        );
    }
}
