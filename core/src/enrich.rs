//! Join + derive: sales left-joined against the three lookup tables,
//! plus the computed revenue, profit, and month period key.

use crate::{
    dataset::{Dataset, SaleRecord},
    types::{ClientId, PeriodKey, ProductId, SellerId, ABSENT_LABEL},
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the denormalized fact table.
///
/// Joined attributes are `Option`s: a sale whose foreign key matched nothing
/// keeps its row with absent fields (left-join semantics). `revenue` and
/// `profit` are absent exactly when the product join missed; `period_key`
/// is always present since it derives from the sale date alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedSale {
    pub sale_date: NaiveDate,
    pub product_id: ProductId,
    pub client_id: ClientId,
    pub seller_id: SellerId,
    pub quantity: u32,

    pub product_name: Option<String>,
    pub sale_price: Option<f64>,
    pub cost_price: Option<f64>,
    pub client_name: Option<String>,
    pub city: Option<String>,
    pub seller_name: Option<String>,

    pub revenue: Option<f64>,
    pub profit: Option<f64>,
    pub period_key: PeriodKey,
}

impl EnrichedSale {
    /// City label for grouping and filtering; absent joins get their own group.
    pub fn city_label(&self) -> &str {
        self.city.as_deref().unwrap_or(ABSENT_LABEL)
    }

    pub fn seller_label(&self) -> &str {
        self.seller_name.as_deref().unwrap_or(ABSENT_LABEL)
    }

    pub fn product_label(&self) -> &str {
        self.product_name.as_deref().unwrap_or(ABSENT_LABEL)
    }

    pub fn client_label(&self) -> &str {
        self.client_name.as_deref().unwrap_or(ABSENT_LABEL)
    }
}

/// Truncate a date to its calendar month: `YYYY-MM`.
pub fn period_key_for(date: NaiveDate) -> PeriodKey {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Left-join every sale against the product, client, and seller tables and
/// compute the derived columns. Row order follows the input sales table;
/// no row is ever dropped.
pub fn join_and_derive(dataset: &Dataset) -> Vec<EnrichedSale> {
    let products: HashMap<ProductId, _> =
        dataset.products.iter().map(|p| (p.id, p)).collect();
    let clients: HashMap<ClientId, _> =
        dataset.clients.iter().map(|c| (c.id, c)).collect();
    let sellers: HashMap<SellerId, _> =
        dataset.sellers.iter().map(|s| (s.id, s)).collect();

    let mut rows = Vec::with_capacity(dataset.sales.len());
    let mut unmatched = 0usize;

    for sale in &dataset.sales {
        let row = enrich_one(sale, &products, &clients, &sellers);
        if row.product_name.is_none() || row.client_name.is_none() || row.seller_name.is_none() {
            unmatched += 1;
        }
        rows.push(row);
    }

    if unmatched > 0 {
        log::warn!("{unmatched} sale rows have at least one unmatched foreign key");
    }
    log::info!("joined fact table: {} rows", rows.len());

    rows
}

fn enrich_one(
    sale: &SaleRecord,
    products: &HashMap<ProductId, &crate::dataset::Product>,
    clients: &HashMap<ClientId, &crate::dataset::Client>,
    sellers: &HashMap<SellerId, &crate::dataset::Seller>,
) -> EnrichedSale {
    let product = products.get(&sale.product_id);
    let client = clients.get(&sale.client_id);
    let seller = sellers.get(&sale.seller_id);

    let sale_price = product.map(|p| p.sale_price);
    let cost_price = product.map(|p| p.cost_price);
    let quantity = f64::from(sale.quantity);

    EnrichedSale {
        sale_date: sale.sale_date,
        product_id: sale.product_id,
        client_id: sale.client_id,
        seller_id: sale.seller_id,
        quantity: sale.quantity,
        product_name: product.map(|p| p.name.clone()),
        sale_price,
        cost_price,
        client_name: client.map(|c| c.name.clone()),
        city: client.map(|c| c.city.clone()),
        seller_name: seller.map(|s| s.name.clone()),
        revenue: sale_price.map(|price| quantity * price),
        profit: sale_price
            .zip(cost_price)
            .map(|(price, cost)| quantity * (price - cost)),
        period_key: period_key_for(sale.sale_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_key_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(period_key_for(d), "2024-03");
    }
}
