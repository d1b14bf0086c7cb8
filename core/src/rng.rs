//! Deterministic random number generation for the mock dataset.
//!
//! RULE: Nothing in the dataset builder may call any platform RNG.
//! All randomness flows through ColumnRng instances derived from the
//! single master seed passed to the MockSource.
//!
//! Each generated column gets its own RNG stream, seeded deterministically
//! from (master_seed XOR column_slot). This means:
//!   - Adding a new column never changes existing columns' streams.
//!   - Each column's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single generated column.
pub struct ColumnRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl ColumnRng {
    /// Create a column RNG from the master seed and a stable column slot.
    pub fn new(master_seed: u64, slot: ColumnSlot) -> Self {
        let derived_seed =
            master_seed ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name: slot.name(),
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Draw an index from a categorical distribution.
    /// Weights must be validated upstream (length > 0, sum ≈ 1.0).
    pub fn pick_weighted(&mut self, weights: &[f64]) -> usize {
        let roll = self.next_f64();
        let mut cumulative = 0.0;
        for (i, w) in weights.iter().enumerate() {
            cumulative += w;
            if roll < cumulative {
                return i;
            }
        }
        weights.len() - 1
    }
}

/// Stable column slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every column's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum ColumnSlot {
    SaleDate = 0,
    Product = 1,
    Client = 2,
    Seller = 3,
    Quantity = 4,
    // Add new generated columns here — append only.
}

impl ColumnSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SaleDate => "sale_date",
            Self::Product => "product",
            Self::Client => "client",
            Self::Seller => "seller",
            Self::Quantity => "quantity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = ColumnRng::new(42, ColumnSlot::Product);
        let mut b = ColumnRng::new(42, ColumnSlot::Product);
        for _ in 0..100 {
            assert_eq!(a.next_u64_below(1000), b.next_u64_below(1000));
        }
    }

    #[test]
    fn slots_yield_distinct_streams() {
        let mut a = ColumnRng::new(42, ColumnSlot::Product);
        let mut b = ColumnRng::new(42, ColumnSlot::Seller);
        let same = (0..32).all(|_| a.next_u64_below(1 << 32) == b.next_u64_below(1 << 32));
        assert!(!same, "distinct slots must not produce identical streams");
    }

    #[test]
    fn pick_weighted_respects_degenerate_weights() {
        let mut rng = ColumnRng::new(7, ColumnSlot::Client);
        for _ in 0..50 {
            assert_eq!(rng.pick_weighted(&[0.0, 1.0, 0.0]), 1);
        }
    }
}
