//! Integration tests for single-column summaries.

use std::fs;

use looksee::catalog::TypeTag;
use looksee::engine::Session;
use looksee::error::ProfileError;
use looksee::ingest::Ingestor;
use looksee::profile::{summarize_column, NumericValue};

fn session_with_csv(contents: &str) -> Session {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, contents).unwrap();

    let session = Session::open().unwrap();
    Ingestor::default().ingest(&session, &path, "dataset").unwrap();
    session
}

fn session_with_table(ddl: &str) -> Session {
    let session = Session::open().unwrap();
    session.execute(ddl, []).unwrap();
    session
}

#[test]
fn test_integer_column_summary() {
    let session = session_with_csv("id,name\n1,a\n2,b\n3,\n");

    let summary = summarize_column(&session, "dataset", "id").unwrap();
    assert_eq!(summary.name, "id");
    assert_eq!(summary.declared_type, TypeTag::Integer);
    assert_eq!(summary.row_count, 3);
    assert_eq!(summary.null_count, 0);
    assert_eq!(summary.distinct_count, 3);
    assert_eq!(summary.min, Some(NumericValue::Integer(1)));
    assert_eq!(summary.max, Some(NumericValue::Integer(3)));
    assert_eq!(summary.mean, Some(2.0));
    assert_eq!(summary.stddev, Some(1.0));
}

#[test]
fn test_string_column_has_counts_only() {
    let session = session_with_csv("id,name\n1,a\n2,b\n3,\n");

    let summary = summarize_column(&session, "dataset", "name").unwrap();
    assert_eq!(summary.declared_type, TypeTag::String);
    assert_eq!(summary.row_count, 3);
    assert_eq!(summary.null_count, 1);
    assert_eq!(summary.distinct_count, 2);
    assert_eq!(summary.non_null_count(), 2);
    assert!(summary.min.is_none());
    assert!(summary.max.is_none());
    assert!(summary.mean.is_none());
    assert!(summary.stddev.is_none());
}

#[test]
fn test_unknown_column() {
    let session = session_with_csv("id,name\n1,a\n");

    let err = summarize_column(&session, "dataset", "missing").unwrap_err();
    match err {
        ProfileError::UnknownColumn { table, column } => {
            assert_eq!(table, "dataset");
            assert_eq!(column, "missing");
        }
        other => panic!("expected UnknownColumn, got {:?}", other),
    }
}

#[test]
fn test_column_lookup_is_case_sensitive() {
    let session = session_with_csv("id,name\n1,a\n");

    let err = summarize_column(&session, "dataset", "ID").unwrap_err();
    assert!(matches!(err, ProfileError::UnknownColumn { .. }));
}

#[test]
fn test_all_null_numeric_column() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT CAST(NULL AS INTEGER) AS x FROM range(3)",
    );

    let summary = summarize_column(&session, "dataset", "x").unwrap();
    assert_eq!(summary.declared_type, TypeTag::Integer);
    assert_eq!(summary.row_count, 3);
    assert_eq!(summary.null_count, 3);
    assert_eq!(summary.distinct_count, 0);
    assert!(summary.min.is_none());
    assert!(summary.max.is_none());
    assert!(summary.mean.is_none());
    assert!(summary.stddev.is_none());
}

#[test]
fn test_single_row_has_no_stddev() {
    let session = session_with_table("CREATE TABLE dataset AS SELECT 42 AS x");

    let summary = summarize_column(&session, "dataset", "x").unwrap();
    assert_eq!(summary.min, Some(NumericValue::Integer(42)));
    assert_eq!(summary.max, Some(NumericValue::Integer(42)));
    assert_eq!(summary.mean, Some(42.0));
    assert!(summary.stddev.is_none());
}

#[test]
fn test_float_column_summary() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT * FROM (VALUES (1.5::DOUBLE), (2.5::DOUBLE), (NULL)) t(price)",
    );

    let summary = summarize_column(&session, "dataset", "price").unwrap();
    assert_eq!(summary.declared_type, TypeTag::Float);
    assert_eq!(summary.null_count, 1);
    assert_eq!(summary.min, Some(NumericValue::Float(1.5)));
    assert_eq!(summary.max, Some(NumericValue::Float(2.5)));
    assert_eq!(summary.mean, Some(2.0));

    let stddev = summary.stddev.unwrap();
    assert!((stddev - 0.5_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_decimal_column_reads_as_float() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT * FROM (VALUES (CAST(10.25 AS DECIMAL(10,2))), (CAST(20.75 AS DECIMAL(10,2)))) t(amount)",
    );

    let summary = summarize_column(&session, "dataset", "amount").unwrap();
    assert_eq!(summary.declared_type, TypeTag::Float);
    assert_eq!(summary.min, Some(NumericValue::Float(10.25)));
    assert_eq!(summary.max, Some(NumericValue::Float(20.75)));
    assert_eq!(summary.mean, Some(15.5));
}

#[test]
fn test_mean_lies_between_extremes() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT (range * 7) % 13 - 4 AS v FROM range(40)",
    );

    let summary = summarize_column(&session, "dataset", "v").unwrap();
    let min = summary.min.unwrap().as_f64();
    let max = summary.max.unwrap().as_f64();
    let mean = summary.mean.unwrap();
    assert!(min <= mean && mean <= max, "{} <= {} <= {}", min, mean, max);
    assert!(summary.stddev.unwrap() >= 0.0);
}

#[test]
fn test_boolean_and_temporal_columns_have_counts_only() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT range % 2 = 0 AS flag, DATE '2024-01-01' + CAST(range AS INTEGER) AS day FROM range(4)",
    );

    let flag = summarize_column(&session, "dataset", "flag").unwrap();
    assert_eq!(flag.declared_type, TypeTag::Boolean);
    assert_eq!(flag.distinct_count, 2);
    assert!(flag.min.is_none() && flag.mean.is_none());

    let day = summarize_column(&session, "dataset", "day").unwrap();
    assert_eq!(day.declared_type, TypeTag::Temporal);
    assert_eq!(day.distinct_count, 4);
    assert!(day.max.is_none() && day.stddev.is_none());
}

#[test]
fn test_summary_matches_metadata_counts() {
    let session = session_with_csv("id,name\n1,a\n2,b\n3,\n");

    let metadata = looksee::profile::extract_metadata(&session, "dataset").unwrap();
    for column in &metadata.columns {
        let summary = summarize_column(&session, "dataset", &column.name).unwrap();
        assert_eq!(summary.row_count, metadata.row_count);
        assert_eq!(summary.null_count, column.null_count);
        assert_eq!(summary.distinct_count, column.distinct_count);
    }
}

#[test]
fn test_missing_table_is_a_query_error() {
    let session = Session::open().unwrap();

    let err = summarize_column(&session, "nowhere", "id").unwrap_err();
    assert!(matches!(err, ProfileError::Query { .. }), "got {:?}", err);
}

#[test]
fn test_summary_json_omits_absent_statistics() {
    let session = session_with_csv("id,name\n1,a\n2,b\n3,\n");

    let name = serde_json::to_value(summarize_column(&session, "dataset", "name").unwrap()).unwrap();
    assert!(name.get("min").is_none());
    assert!(name.get("mean").is_none());

    let id = serde_json::to_value(summarize_column(&session, "dataset", "id").unwrap()).unwrap();
    assert_eq!(id["min"], 1);
    assert_eq!(id["mean"], 2.0);
}

#[test]
fn test_ubigint_extremes_beyond_i64() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT * FROM (VALUES (1::UBIGINT), (18446744073709551615::UBIGINT)) t(u)",
    );

    let summary = summarize_column(&session, "dataset", "u").unwrap();
    assert_eq!(summary.declared_type, TypeTag::Integer);
    assert_eq!(summary.row_count, 2);
    assert_eq!(summary.distinct_count, 2);
    assert_eq!(summary.min, Some(NumericValue::Integer(1)));
    assert_eq!(
        summary.max,
        Some(NumericValue::Integer(u64::MAX as i128))
    );

    let mean = summary.mean.unwrap();
    assert!((mean - u64::MAX as f64 / 2.0).abs() / mean < 1e-9, "mean {}", mean);
    assert!(summary.stddev.unwrap() > 0.0);
}

#[test]
fn test_hugeint_extremes_and_mean() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT * FROM (VALUES \
         (CAST(1 AS HUGEINT)), \
         (CAST('170141183460469231731687303715884105727' AS HUGEINT))) t(h)",
    );

    let summary = summarize_column(&session, "dataset", "h").unwrap();
    assert_eq!(summary.min, Some(NumericValue::Integer(1)));
    assert_eq!(summary.max, Some(NumericValue::Integer(i128::MAX)));

    let mean = summary.mean.unwrap();
    assert!((mean - i128::MAX as f64 / 2.0).abs() / mean < 1e-9, "mean {}", mean);
    assert!(summary.stddev.is_some());
}

#[test]
fn test_uhugeint_extremes_stay_unsigned() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT * FROM (VALUES \
         (CAST(0 AS UHUGEINT)), \
         (CAST('340282366920938463463374607431768211455' AS UHUGEINT))) t(w)",
    );

    let summary = summarize_column(&session, "dataset", "w").unwrap();
    assert_eq!(summary.min, Some(NumericValue::Unsigned(0)));
    assert_eq!(summary.max, Some(NumericValue::Unsigned(u128::MAX)));
    assert!(summary.mean.unwrap() > 0.0);
}

#[test]
fn test_infinity_keeps_counts_and_extremes() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT * FROM (VALUES (1.0::DOUBLE), ('inf'::DOUBLE), (NULL)) t(x)",
    );

    let summary = summarize_column(&session, "dataset", "x").unwrap();
    assert_eq!(summary.row_count, 3);
    assert_eq!(summary.null_count, 1);
    assert_eq!(summary.distinct_count, 2);
    assert_eq!(summary.min, Some(NumericValue::Float(1.0)));
    assert_eq!(summary.max, Some(NumericValue::Float(f64::INFINITY)));
    assert_eq!(summary.mean, Some(f64::INFINITY));
    assert!(summary.stddev.unwrap().is_nan());
}

#[test]
fn test_negative_infinity_mean() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT * FROM (VALUES ('-inf'::DOUBLE), (2.0::DOUBLE), (3.0::DOUBLE)) t(x)",
    );

    let summary = summarize_column(&session, "dataset", "x").unwrap();
    assert_eq!(summary.min, Some(NumericValue::Float(f64::NEG_INFINITY)));
    assert_eq!(summary.mean, Some(f64::NEG_INFINITY));
}

#[test]
fn test_opposite_infinities_and_nan_give_nan_mean() {
    let session = session_with_table(
        "CREATE TABLE dataset AS SELECT * FROM (VALUES \
         ('-inf'::DOUBLE, 1.0::DOUBLE), \
         ('inf'::DOUBLE, 'nan'::DOUBLE), \
         (0.0::DOUBLE, 2.0::DOUBLE)) t(both_signs, with_nan)",
    );

    let both = summarize_column(&session, "dataset", "both_signs").unwrap();
    assert_eq!(both.row_count, 3);
    assert!(both.mean.unwrap().is_nan());
    assert!(both.stddev.unwrap().is_nan());

    let nan = summarize_column(&session, "dataset", "with_nan").unwrap();
    assert_eq!(nan.null_count, 0);
    assert!(nan.mean.unwrap().is_nan());
}
