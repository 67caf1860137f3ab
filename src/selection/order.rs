//! Strike ordering for selected rows.

use crate::types::Row;

/// Sorts rows ascending by strike.
///
/// The sort is stable: rows with equal strikes keep their relative order, so
/// duplicate strikes come out in original dataset order.
pub fn sort_by_strike(rows: &mut [Row]) {
    rows.sort_by(|a, b| a.strike.total_cmp(&b.strike));
}

#[cfg(test)]
mod tests {
    use super::sort_by_strike;
    use crate::types::Row;

    #[test]
    fn sorts_ascending_by_strike() {
        let mut rows = vec![
            Row::new(220.0, 2.7),
            Row::new(200.0, -6.7),
            Row::new(215.0, 0.3),
        ];
        sort_by_strike(&mut rows);
        let strikes: Vec<f64> = rows.iter().map(|r| r.strike).collect();
        assert_eq!(strikes, vec![200.0, 215.0, 220.0]);
    }

    #[test]
    fn equal_strikes_keep_original_order() {
        // Distinguish duplicates by moneyness.
        let mut rows = vec![
            Row::new(215.0, 1.0),
            Row::new(210.0, -1.0),
            Row::new(215.0, 2.0),
            Row::new(215.0, 3.0),
        ];
        sort_by_strike(&mut rows);
        assert_eq!(rows[0].strike, 210.0);
        let dup_moneyness: Vec<f64> = rows[1..].iter().map(|r| r.moneyness).collect();
        assert_eq!(dup_moneyness, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_and_single_row_are_fine() {
        let mut empty: Vec<Row> = vec![];
        sort_by_strike(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![Row::new(200.0, 0.0)];
        sort_by_strike(&mut single);
        assert_eq!(single[0].strike, 200.0);
    }
}
