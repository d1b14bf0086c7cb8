//! Data source seam.
//!
//! Any implementation that produces schema-conforming tables is
//! substitutable with no change to the analytics pipeline. The mock
//! generator and the SQLite loader are the two shipped implementations.

use crate::{
    dataset::{generate_mock_data, Dataset, MockConfig},
    error::DashResult,
    store::SalesStore,
};

/// The contract every upstream data source must fulfill.
pub trait DataSource {
    /// Human-readable description, used in logs only.
    fn describe(&self) -> String;

    /// Produce the four raw tables. Must satisfy the dataset invariants:
    /// unique ids per table, non-negative prices, positive quantities.
    fn load(&self) -> DashResult<Dataset>;
}

/// Synthetic data source: the fixed catalog plus seeded random sales.
pub struct MockSource {
    seed: u64,
    config: MockConfig,
}

impl MockSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            config: MockConfig::default(),
        }
    }

    pub fn with_config(seed: u64, config: MockConfig) -> Self {
        Self { seed, config }
    }
}

impl DataSource for MockSource {
    fn describe(&self) -> String {
        format!("mock(seed={})", self.seed)
    }

    fn load(&self) -> DashResult<Dataset> {
        generate_mock_data(self.seed, &self.config)
    }
}

/// External data source backed by a SQLite database file.
pub struct SqliteSource {
    path: String,
}

impl SqliteSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for SqliteSource {
    fn describe(&self) -> String {
        format!("sqlite({})", self.path)
    }

    fn load(&self) -> DashResult<Dataset> {
        let store = SalesStore::open(&self.path)?;
        store.load_dataset()
    }
}
