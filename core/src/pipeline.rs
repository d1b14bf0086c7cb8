//! Pipeline orchestration: owns the memoized joined table and answers
//! filter queries as a pure function of (table, spec).
//!
//! RULES:
//!   - The joined table is built once per source load and never mutated.
//!   - Filter changes never invalidate the cache; only reload() does,
//!     minting a fresh dataset version.
//!   - An empty filter result short-circuits before any aggregation runs.

use crate::{
    aggregate::{self, CountByLabel, QuantityByLabel, RevenueByLabel, Totals},
    enrich::{join_and_derive, EnrichedSale},
    error::DashResult,
    filter::FilterSpec,
    source::DataSource,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one loaded dataset. A new version means the upstream data
/// changed and any cached presentation state is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetVersion(pub Uuid);

impl DatasetVersion {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Everything one interaction cycle displays: the KPI totals plus the five
/// chart tables, each a small ordered list of (label, value) rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub totals: Totals,
    pub monthly_revenue: Vec<RevenueByLabel>,
    pub top_products_by_revenue: Vec<RevenueByLabel>,
    pub top_sellers_by_revenue: Vec<RevenueByLabel>,
    pub top_clients_by_quantity: Vec<QuantityByLabel>,
    pub purchases_by_city: Vec<CountByLabel>,
}

/// Result of one filter query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// At least one row passed the filter; aggregates are populated.
    Summary(DashboardSummary),
    /// Nothing matched. No aggregation was computed.
    NoMatchingData,
}

pub struct Dashboard {
    version: DatasetVersion,
    joined: Vec<EnrichedSale>,
}

impl Dashboard {
    /// Load the raw tables from `source`, join and derive once, and cache
    /// the fact table for the lifetime of this value.
    pub fn load(source: &dyn DataSource) -> DashResult<Self> {
        let dataset = source.load()?;
        let joined = join_and_derive(&dataset);
        let version = DatasetVersion::mint();
        log::info!(
            "dashboard ready: source={}, rows={}, version={}",
            source.describe(),
            joined.len(),
            version.0
        );
        Ok(Self { version, joined })
    }

    /// Re-load from (a possibly different) source. The only operation that
    /// replaces the cached join; mints a new dataset version.
    pub fn reload(&mut self, source: &dyn DataSource) -> DashResult<()> {
        let fresh = Dashboard::load(source)?;
        *self = fresh;
        Ok(())
    }

    pub fn version(&self) -> DatasetVersion {
        self.version
    }

    /// The cached joined table. Read-only.
    pub fn joined(&self) -> &[EnrichedSale] {
        &self.joined
    }

    /// The full universe of selectable periods, cities, and sellers —
    /// the presentation layer's default selection on first load.
    pub fn available_filters(&self) -> FilterSpec {
        FilterSpec::all_from(&self.joined)
    }

    /// One interaction cycle: filter, detect the empty result, aggregate.
    /// Pure with respect to self — calling it never changes the cache.
    pub fn query(&self, spec: &FilterSpec) -> QueryOutcome {
        let filtered = spec.apply(&self.joined);
        log::debug!(
            "filter pass: {} of {} rows match",
            filtered.len(),
            self.joined.len()
        );
        if filtered.is_empty() {
            return QueryOutcome::NoMatchingData;
        }
        QueryOutcome::Summary(summarize(&filtered))
    }
}

/// Aggregate an already-filtered fact table. Callers must have handled the
/// empty case; an empty slice still yields an all-empty summary, not a panic.
pub fn summarize(filtered: &[EnrichedSale]) -> DashboardSummary {
    DashboardSummary {
        totals: aggregate::totals(filtered),
        monthly_revenue: aggregate::monthly_revenue(filtered),
        top_products_by_revenue: aggregate::top_products_by_revenue(filtered),
        top_sellers_by_revenue: aggregate::top_sellers_by_revenue(filtered),
        top_clients_by_quantity: aggregate::top_clients_by_quantity(filtered),
        purchases_by_city: aggregate::purchases_by_city(filtered),
    }
}
