//! The four raw tables and the mock dataset builder.
//!
//! RULE: Raw tables are immutable once built. Everything downstream
//! (join, filter, aggregation) reads them and never writes back.

use crate::{
    error::{DashError, DashResult},
    rng::{ColumnRng, ColumnSlot},
    types::{ClientId, ProductId, SellerId},
};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sale_price: f64,
    pub cost_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleRecord {
    pub sale_date: NaiveDate,
    pub product_id: ProductId,
    pub client_id: ClientId,
    pub seller_id: SellerId,
    pub quantity: u32,
}

/// The four raw tables a data source must supply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Dataset {
    pub sales: Vec<SaleRecord>,
    pub products: Vec<Product>,
    pub clients: Vec<Client>,
    pub sellers: Vec<Seller>,
}

/// Tolerance for the sum-to-one check on weight vectors.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Configuration for the synthetic sale generator.
///
/// Weight vectors are positional against the catalog tables, so a length
/// mismatch or a sum away from 1.0 is a configuration error caught by
/// [`MockConfig::validate`] before any row is drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    pub sale_count: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_quantity: u32,
    pub product_weights: Vec<f64>,
    pub seller_weights: Vec<f64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            sale_count: 1000,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            max_quantity: 4,
            product_weights: vec![
                0.15, 0.10, 0.10, 0.10, 0.05, 0.10, 0.10, 0.10, 0.05, 0.15,
            ],
            seller_weights: vec![0.3, 0.2, 0.2, 0.15, 0.15],
        }
    }
}

impl MockConfig {
    /// Validate the weight vectors against the catalog tables.
    pub fn validate(&self, products: &[Product], sellers: &[Seller]) -> DashResult<()> {
        check_weights("product_weights", &self.product_weights, products.len())?;
        check_weights("seller_weights", &self.seller_weights, sellers.len())?;
        Ok(())
    }
}

fn check_weights(name: &'static str, weights: &[f64], expected: usize) -> DashResult<()> {
    if weights.len() != expected {
        return Err(DashError::WeightLengthMismatch {
            name,
            len: weights.len(),
            expected,
        });
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        return Err(DashError::WeightSumInvalid { name, sum });
    }
    Ok(())
}

/// Build the mock dataset: the fixed catalog plus `sale_count` random
/// sale records. Same seed, same config — identical dataset.
pub fn generate_mock_data(seed: u64, config: &MockConfig) -> DashResult<Dataset> {
    let products = crate::catalog::products();
    let clients = crate::catalog::clients();
    let sellers = crate::catalog::sellers();
    config.validate(&products, &sellers)?;

    let day_span = config
        .end_date
        .signed_duration_since(config.start_date)
        .num_days() as u64
        + 1; // end date inclusive

    let mut date_rng = ColumnRng::new(seed, ColumnSlot::SaleDate);
    let mut product_rng = ColumnRng::new(seed, ColumnSlot::Product);
    let mut client_rng = ColumnRng::new(seed, ColumnSlot::Client);
    let mut seller_rng = ColumnRng::new(seed, ColumnSlot::Seller);
    let mut quantity_rng = ColumnRng::new(seed, ColumnSlot::Quantity);

    let mut sales = Vec::with_capacity(config.sale_count);
    for _ in 0..config.sale_count {
        let offset = date_rng.next_u64_below(day_span);
        // Offset stays within the configured range, so this cannot overflow.
        let sale_date = config
            .start_date
            .checked_add_days(Days::new(offset))
            .expect("date offset within configured range");

        let product_id = products[product_rng.pick_weighted(&config.product_weights)].id;
        let client_id =
            clients[client_rng.next_u64_below(clients.len() as u64) as usize].id;
        let seller_id = sellers[seller_rng.pick_weighted(&config.seller_weights)].id;
        let quantity = 1 + quantity_rng.next_u64_below(config.max_quantity as u64) as u32;

        sales.push(SaleRecord {
            sale_date,
            product_id,
            client_id,
            seller_id,
            quantity,
        });
    }

    log::info!(
        "generated mock dataset: {} sales over {} products / {} clients / {} sellers",
        sales.len(),
        products.len(),
        clients.len(),
        sellers.len()
    );

    Ok(Dataset {
        sales,
        products,
        clients,
        sellers,
    })
}
