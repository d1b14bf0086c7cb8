use salesdash_core::dataset::{generate_mock_data, MockConfig};
use salesdash_core::enrich::{join_and_derive, EnrichedSale};
use salesdash_core::filter::FilterSpec;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn joined(seed: u64) -> Vec<EnrichedSale> {
    let ds = generate_mock_data(seed, &MockConfig::default()).unwrap();
    join_and_derive(&ds)
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Selecting the full universe on every dimension is the identity filter.
#[test]
fn full_universe_filter_is_identity() {
    let rows = joined(42);
    let spec = FilterSpec::all_from(&rows);
    assert_eq!(spec.apply(&rows), rows);
}

/// An empty set on any one dimension means no rows pass, even when the
/// other two dimensions select everything.
#[test]
fn empty_dimension_passes_nothing() {
    let rows = joined(42);

    let mut no_periods = FilterSpec::all_from(&rows);
    no_periods.periods.clear();
    assert!(no_periods.apply(&rows).is_empty());

    let mut no_cities = FilterSpec::all_from(&rows);
    no_cities.cities.clear();
    assert!(no_cities.apply(&rows).is_empty());

    let mut no_sellers = FilterSpec::all_from(&rows);
    no_sellers.sellers.clear();
    assert!(no_sellers.apply(&rows).is_empty());
}

/// Re-applying a spec to its own output changes nothing.
#[test]
fn filtering_is_idempotent() {
    let rows = joined(42);
    let mut spec = FilterSpec::all_from(&rows);
    spec.cities.retain(|c| c == "Lisboa" || c == "Porto");
    spec.periods.retain(|p| p.as_str() < "2024-07");

    let once = spec.apply(&rows);
    let twice = spec.apply(&once);
    assert_eq!(once, twice);
}

/// apply() never mutates its input table.
#[test]
fn filtering_never_mutates_the_joined_table() {
    let rows = joined(42);
    let before = rows.clone();

    let mut spec = FilterSpec::all_from(&rows);
    spec.sellers.retain(|s| s == "Maria");
    let _ = spec.apply(&rows);

    assert_eq!(rows, before);
}

/// Every surviving row satisfies all three dimensions conjunctively.
#[test]
fn filter_is_conjunctive() {
    let rows = joined(42);
    let mut spec = FilterSpec::all_from(&rows);
    spec.cities.retain(|c| c == "Faro");
    spec.sellers.retain(|s| s == "Maria" || s == "Sofia");
    spec.periods.retain(|p| p == "2024-05");

    let filtered = spec.apply(&rows);
    for row in &filtered {
        assert_eq!(row.city_label(), "Faro");
        assert!(row.seller_label() == "Maria" || row.seller_label() == "Sofia");
        assert_eq!(row.period_key, "2024-05");
    }
}

/// The universe extracted from the joined table contains exactly the
/// values the mock catalog can produce.
#[test]
fn universe_reflects_the_data() {
    let rows = joined(42);
    let spec = FilterSpec::all_from(&rows);

    // 1000 draws across 12 months and 5 cities make every value near-certain.
    assert_eq!(spec.periods.len(), 12);
    assert_eq!(spec.cities.len(), 5);
    assert_eq!(spec.sellers.len(), 5);
    assert!(spec.periods.contains("2024-01"));
    assert!(spec.periods.contains("2024-12"));
    assert!(spec.cities.contains("Lisboa"));
    assert!(spec.sellers.contains("Inês"));
}
