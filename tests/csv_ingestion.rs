use option_chain_window::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use option_chain_window::types::ChainSchema;
use option_chain_window::ChainError;

fn reader_from(data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes())
}

#[test]
fn ingest_csv_from_path_happy_path() {
    let schema = ChainSchema::default();
    let chain = ingest_csv_from_path("tests/fixtures/chain.csv", &schema).unwrap();

    assert_eq!(chain.row_count(), 5);
    assert_eq!(chain.rows[0].strike, 200.0);
    assert_eq!(chain.rows[0].moneyness, -6.67);
    assert_eq!(chain.rows[2].strike, 214.29);
    assert_eq!(chain.rows[0].extras["delta"], 0.91);
    assert_eq!(chain.rows[4].extras["opt_mid_price"], 3.2);
}

#[test]
fn ingest_csv_allows_reordered_columns() {
    let data = "delta,percent_in_out_money,strike\n0.71,-2.0,210.0\n0.49,0.33,215.0\n";
    let chain = ingest_csv_from_reader(&mut reader_from(data), &ChainSchema::default()).unwrap();

    assert_eq!(chain.row_count(), 2);
    assert_eq!(chain.rows[0].strike, 210.0);
    assert_eq!(chain.rows[0].moneyness, -2.0);
    assert_eq!(chain.rows[0].extras["delta"], 0.71);
}

#[test]
fn ingest_csv_errors_on_missing_required_column() {
    let data = "strike,delta\n210.0,0.71\n";
    let err = ingest_csv_from_reader(&mut reader_from(data), &ChainSchema::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("percent_in_out_money"));
}

#[test]
fn ingest_csv_rejects_empty_cells() {
    let data = "strike,percent_in_out_money,delta\n210.0,-2.0,0.71\n215.0,,0.49\n";
    let err = ingest_csv_from_reader(&mut reader_from(data), &ChainSchema::default()).unwrap_err();
    match err {
        ChainError::MalformedRow { row, column, .. } => {
            // Header is row 1.
            assert_eq!(row, 3);
            assert_eq!(column, "percent_in_out_money");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn ingest_csv_rejects_unparsable_and_non_finite_cells() {
    let data = "strike,percent_in_out_money\nabc,-2.0\n";
    let err = ingest_csv_from_reader(&mut reader_from(data), &ChainSchema::default()).unwrap_err();
    assert!(matches!(
        err,
        ChainError::MalformedRow { row: 2, .. }
    ));

    let data = "strike,percent_in_out_money\n210.0,NaN\n";
    let err = ingest_csv_from_reader(&mut reader_from(data), &ChainSchema::default()).unwrap_err();
    match err {
        ChainError::MalformedRow { column, message, .. } => {
            assert_eq!(column, "percent_in_out_money");
            assert!(message.contains("finite"));
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn ingest_csv_missing_file_is_a_csv_wrapped_io_error() {
    let err = ingest_csv_from_path("tests/fixtures/nope.csv", &ChainSchema::default()).unwrap_err();
    match err {
        ChainError::Csv(e) => assert!(matches!(e.kind(), csv::ErrorKind::Io(_))),
        other => panic!("expected Csv error, got {other:?}"),
    }
}

#[test]
fn ingest_csv_header_only_file_yields_empty_chain() {
    let data = "strike,percent_in_out_money\n";
    let chain = ingest_csv_from_reader(&mut reader_from(data), &ChainSchema::default()).unwrap();
    assert_eq!(chain.row_count(), 0);
}
