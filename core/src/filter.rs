//! Filter specification: three string sets applied conjunctively.
//!
//! An empty set for any dimension means no row can pass that dimension.
//! The default on first load is "everything available", obtained from
//! [`FilterSpec::all_from`].

use crate::enrich::EnrichedSale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub periods: BTreeSet<String>,
    pub cities: BTreeSet<String>,
    pub sellers: BTreeSet<String>,
}

impl FilterSpec {
    /// The full universe: every period, city, and seller present in the
    /// joined table. Applying this spec is the identity filter.
    pub fn all_from(rows: &[EnrichedSale]) -> Self {
        let mut spec = FilterSpec::default();
        for row in rows {
            spec.periods.insert(row.period_key.clone());
            spec.cities.insert(row.city_label().to_string());
            spec.sellers.insert(row.seller_label().to_string());
        }
        spec
    }

    /// True when `row` passes all three dimensions.
    pub fn matches(&self, row: &EnrichedSale) -> bool {
        self.periods.contains(&row.period_key)
            && self.cities.contains(row.city_label())
            && self.sellers.contains(row.seller_label())
    }

    /// Retain the matching rows. Never mutates the input; applying the same
    /// spec to its own output returns the output unchanged.
    pub fn apply(&self, rows: &[EnrichedSale]) -> Vec<EnrichedSale> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
