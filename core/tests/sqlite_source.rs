use salesdash_core::dataset::{generate_mock_data, MockConfig};
use salesdash_core::enrich::join_and_derive;
use salesdash_core::filter::FilterSpec;
use salesdash_core::pipeline::summarize;
use salesdash_core::store::SalesStore;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// A dataset written to SQLite reads back identically: same rows, same
/// order, dates round-tripped through ISO-8601 text.
#[test]
fn dataset_round_trips_through_sqlite() {
    init_logging();
    let original = generate_mock_data(42, &MockConfig::default()).unwrap();

    let mut store = SalesStore::in_memory().unwrap();
    store.init_schema().unwrap();
    store.insert_dataset(&original).unwrap();

    let loaded = store.load_dataset().unwrap();
    assert_eq!(loaded, original);
}

/// The external-data mode is substitutable: feeding the pipeline from
/// SQLite produces exactly the aggregates the mock-fed pipeline produces.
#[test]
fn sqlite_fed_pipeline_matches_mock_fed_pipeline() {
    init_logging();
    let mock = generate_mock_data(7, &MockConfig::default()).unwrap();

    let mut store = SalesStore::in_memory().unwrap();
    store.init_schema().unwrap();
    store.insert_dataset(&mock).unwrap();
    let from_db = store.load_dataset().unwrap();

    let mock_rows = join_and_derive(&mock);
    let db_rows = join_and_derive(&from_db);
    assert_eq!(mock_rows, db_rows);

    let spec = FilterSpec::all_from(&mock_rows);
    assert_eq!(
        summarize(&spec.apply(&mock_rows)),
        summarize(&spec.apply(&db_rows))
    );
}

/// Inserting twice replaces rather than appends: the store holds exactly
/// one dataset at a time.
#[test]
fn insert_replaces_previous_dataset() {
    init_logging();
    let first = generate_mock_data(1, &MockConfig::default()).unwrap();
    let second = generate_mock_data(2, &MockConfig::default()).unwrap();

    let mut store = SalesStore::in_memory().unwrap();
    store.init_schema().unwrap();
    store.insert_dataset(&first).unwrap();
    store.insert_dataset(&second).unwrap();

    let loaded = store.load_dataset().unwrap();
    assert_eq!(loaded, second);
    assert_eq!(loaded.sales.len(), 1000);
}
