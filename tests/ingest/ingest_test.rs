//! Integration tests for loading files into a session.

use std::fs;
use std::path::{Path, PathBuf};

use looksee::catalog::describe;
use looksee::engine::Session;
use looksee::error::ProfileError;
use looksee::ingest::{FormatResolver, Ingestor};

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn row_count(session: &Session, table: &str) -> i64 {
    session
        .query_row(&format!("SELECT COUNT(*) FROM \"{}\"", table), [], |row| {
            row.get(0)
        })
        .unwrap()
}

// ============================================================================
// Supported Formats
// ============================================================================

#[test]
fn test_ingest_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "people.csv", "id,name\n1,a\n2,b\n3,\n");

    let session = Session::open().unwrap();
    let relation = Ingestor::default().ingest(&session, &path, "dataset").unwrap();

    assert_eq!(relation.table_name, "dataset");
    assert_eq!(relation.source_path, path);
    assert_eq!(relation.strategy.extension, "csv");
    assert_eq!(row_count(&session, "dataset"), 3);
}

#[test]
fn test_ingest_parquet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbers.parquet");

    let session = Session::open().unwrap();
    session
        .execute(
            &format!(
                "COPY (SELECT range AS n FROM range(5)) TO '{}' (FORMAT PARQUET)",
                path.display()
            ),
            [],
        )
        .unwrap();

    let relation = Ingestor::default().ingest(&session, &path, "numbers").unwrap();
    assert_eq!(relation.strategy.read_function, "read_parquet");
    assert_eq!(row_count(&session, "numbers"), 5);
}

#[test]
fn test_ingest_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "events.json",
        "{\"id\": 1, \"kind\": \"click\"}\n{\"id\": 2, \"kind\": \"view\"}\n",
    );

    let session = Session::open().unwrap();
    let relation = Ingestor::default().ingest(&session, &path, "events").unwrap();
    assert_eq!(relation.strategy.read_function, "read_json_auto");
    assert_eq!(row_count(&session, "events"), 2);

    let columns = describe(&session, "events").unwrap();
    let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "kind"]);
}

#[test]
fn test_upper_case_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "LOUD.CSV", "x\n1\n");

    let session = Session::open().unwrap();
    let relation = Ingestor::default().ingest(&session, &path, "dataset").unwrap();
    assert_eq!(relation.strategy.extension, "csv");
    assert_eq!(row_count(&session, "dataset"), 1);
}

#[test]
fn test_path_with_single_quote() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "o'brien.csv", "x\n1\n2\n");

    let session = Session::open().unwrap();
    Ingestor::default().ingest(&session, &path, "dataset").unwrap();
    assert_eq!(row_count(&session, "dataset"), 2);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unsupported_extension_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "book.xlsx", "not really a spreadsheet");

    let session = Session::open().unwrap();
    let err = Ingestor::default()
        .ingest(&session, &path, "dataset")
        .unwrap_err();

    match err {
        ProfileError::UnsupportedFormat { extension, path: err_path } => {
            assert_eq!(extension, "xlsx");
            assert_eq!(err_path, Some(path));
        }
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }

    // No relation was created.
    assert!(describe(&session, "dataset").is_err());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let session = Session::open().unwrap();
    let err = Ingestor::default()
        .ingest(&session, &path, "dataset")
        .unwrap_err();

    assert!(
        matches!(err, ProfileError::Ingestion { ref path, .. } if path.ends_with("absent.csv")),
        "got {:?}",
        err
    );
}

#[test]
fn test_malformed_parquet_is_an_ingestion_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "broken.parquet", "this is not parquet");

    let session = Session::open().unwrap();
    let err = Ingestor::default()
        .ingest(&session, &path, "dataset")
        .unwrap_err();

    match err {
        ProfileError::Ingestion { message, .. } => assert!(!message.is_empty()),
        other => panic!("expected Ingestion, got {:?}", other),
    }
}

// ============================================================================
// Replacement and Configuration
// ============================================================================

#[test]
fn test_reingest_replaces_relation() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_file(dir.path(), "first.csv", "a,b\n1,2\n3,4\n5,6\n");
    let second = write_file(dir.path(), "second.csv", "c\nx\n");

    let session = Session::open().unwrap();
    let ingestor = Ingestor::default();

    ingestor.ingest(&session, &first, "dataset").unwrap();
    assert_eq!(row_count(&session, "dataset"), 3);

    ingestor.ingest(&session, &second, "dataset").unwrap();
    assert_eq!(row_count(&session, "dataset"), 1);

    let columns = describe(&session, "dataset").unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].name, "c");
}

#[test]
fn test_failed_engine_read_keeps_existing_relation() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file(dir.path(), "good.csv", "a,b\n1,2\n3,4\n");
    let broken = write_file(dir.path(), "broken.parquet", "this is not parquet");

    let session = Session::open().unwrap();
    let ingestor = Ingestor::default();

    ingestor.ingest(&session, &good, "dataset").unwrap();
    assert_eq!(row_count(&session, "dataset"), 2);

    let err = ingestor.ingest(&session, &broken, "dataset").unwrap_err();
    assert!(matches!(err, ProfileError::Ingestion { .. }), "got {:?}", err);

    assert_eq!(row_count(&session, "dataset"), 2);
    let columns = describe(&session, "dataset").unwrap();
    let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_custom_read_function_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "data.tsv", "k\tv\n1\tone\n2\ttwo\n");

    let mut mapping = looksee::config::default_read_functions();
    mapping.insert("tsv".to_string(), "read_csv_auto".to_string());
    let ingestor = Ingestor::new(FormatResolver::new(mapping));

    let session = Session::open().unwrap();
    ingestor.ingest(&session, &path, "dataset").unwrap();
    assert_eq!(row_count(&session, "dataset"), 2);
    assert_eq!(describe(&session, "dataset").unwrap().len(), 2);
}
