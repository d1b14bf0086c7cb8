use salesdash_core::dataset::{generate_mock_data, MockConfig};
use salesdash_core::error::DashError;
use std::collections::HashSet;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn build(seed: u64) -> salesdash_core::dataset::Dataset {
    generate_mock_data(seed, &MockConfig::default()).unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// The default configuration produces exactly 1000 sales over the fixed
/// 10/10/5 catalog.
#[test]
fn default_config_produces_expected_shape() {
    let ds = build(42);
    assert_eq!(ds.sales.len(), 1000);
    assert_eq!(ds.products.len(), 10);
    assert_eq!(ds.clients.len(), 10);
    assert_eq!(ds.sellers.len(), 5);
}

/// Every generated sale references a catalog row and respects the
/// configured value ranges: dates in 2024 (end date inclusive),
/// quantity in 1..=4.
#[test]
fn generated_rows_satisfy_invariants() {
    let ds = build(42);
    let config = MockConfig::default();

    let product_ids: HashSet<_> = ds.products.iter().map(|p| p.id).collect();
    let client_ids: HashSet<_> = ds.clients.iter().map(|c| c.id).collect();
    let seller_ids: HashSet<_> = ds.sellers.iter().map(|s| s.id).collect();

    for sale in &ds.sales {
        assert!(sale.sale_date >= config.start_date, "{:?}", sale.sale_date);
        assert!(sale.sale_date <= config.end_date, "{:?}", sale.sale_date);
        assert!(product_ids.contains(&sale.product_id));
        assert!(client_ids.contains(&sale.client_id));
        assert!(seller_ids.contains(&sale.seller_id));
        assert!((1..=4).contains(&sale.quantity), "{}", sale.quantity);
    }
}

/// Same seed, same dataset — the builder uses no platform RNG.
#[test]
fn generation_is_deterministic_by_seed() {
    assert_eq!(build(7), build(7));
}

/// Different seeds should not reproduce the same sales table.
#[test]
fn different_seeds_diverge() {
    assert_ne!(build(7).sales, build(8).sales);
}

/// The heavily weighted products (15% each) must appear more often than
/// the lightly weighted ones (5% each) in a 1000-row draw.
#[test]
fn product_weights_shape_the_draw() {
    let ds = build(42);
    let count = |id: u32| ds.sales.iter().filter(|s| s.product_id == id).count();
    // 0.15-weight products vs 0.05-weight products.
    assert!(count(101) > count(105), "101={} 105={}", count(101), count(105));
    assert!(count(110) > count(109), "110={} 109={}", count(110), count(109));
}

/// A weight vector with the wrong length is a configuration-time fatal
/// error; no rows are drawn.
#[test]
fn weight_length_mismatch_is_fatal() {
    let config = MockConfig {
        product_weights: vec![0.5, 0.5],
        ..MockConfig::default()
    };
    let err = generate_mock_data(1, &config).unwrap_err();
    assert!(matches!(err, DashError::WeightLengthMismatch { name, .. } if name == "product_weights"));
}

/// A weight vector that does not sum to 1.0 is equally fatal.
#[test]
fn weight_sum_violation_is_fatal() {
    let config = MockConfig {
        seller_weights: vec![0.3, 0.2, 0.2, 0.15, 0.05],
        ..MockConfig::default()
    };
    let err = generate_mock_data(1, &config).unwrap_err();
    assert!(matches!(err, DashError::WeightSumInvalid { name, .. } if name == "seller_weights"));
}
