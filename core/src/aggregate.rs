//! The aggregation queries behind the dashboard's KPI block and charts.
//!
//! Every function here is a pure function over the filtered fact table and
//! returns an empty result on empty input. Group order before any sort is
//! first-seen input order, so equal values resolve by input row order
//! (Rust's sort is stable).

use crate::enrich::EnrichedSale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// How many groups a "top N" chart shows.
pub const TOP_N: usize = 5;

/// The three KPI scalars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Totals {
    pub revenue: f64,
    pub profit: f64,
    pub units: u64,
}

/// One (label, summed revenue) chart row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueByLabel {
    pub label: String,
    pub revenue: f64,
}

/// One (label, summed quantity) chart row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuantityByLabel {
    pub label: String,
    pub quantity: u64,
}

/// One (label, row count) chart row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountByLabel {
    pub label: String,
    pub count: u64,
}

pub fn totals(rows: &[EnrichedSale]) -> Totals {
    let mut t = Totals::default();
    for row in rows {
        // Absent revenue/profit (missed product join) adds nothing,
        // matching null-skipping sums in relational tools.
        t.revenue += row.revenue.unwrap_or(0.0);
        t.profit += row.profit.unwrap_or(0.0);
        t.units += u64::from(row.quantity);
    }
    t
}

/// Revenue per calendar month, ascending by period key.
pub fn monthly_revenue(rows: &[EnrichedSale]) -> Vec<RevenueByLabel> {
    let mut groups = sum_by_label(rows, |r| r.period_key.as_str(), |r| r.revenue);
    groups.sort_by(|a, b| a.label.cmp(&b.label));
    groups
}

/// Top 5 products by summed revenue, descending.
pub fn top_products_by_revenue(rows: &[EnrichedSale]) -> Vec<RevenueByLabel> {
    top_revenue(sum_by_label(rows, |r| r.product_label(), |r| r.revenue))
}

/// Top 5 sellers by summed revenue, descending. The presentation layer
/// renders this one as a proportion-of-whole chart.
pub fn top_sellers_by_revenue(rows: &[EnrichedSale]) -> Vec<RevenueByLabel> {
    top_revenue(sum_by_label(rows, |r| r.seller_label(), |r| r.revenue))
}

/// Top 5 clients by summed purchase quantity, descending.
pub fn top_clients_by_quantity(rows: &[EnrichedSale]) -> Vec<QuantityByLabel> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<QuantityByLabel> = Vec::new();
    for row in rows {
        let label = row.client_label();
        match index.get(label) {
            Some(&i) => groups[i].quantity += u64::from(row.quantity),
            None => {
                index.insert(label.to_string(), groups.len());
                groups.push(QuantityByLabel {
                    label: label.to_string(),
                    quantity: u64::from(row.quantity),
                });
            }
        }
    }
    groups.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    groups.truncate(TOP_N);
    groups
}

/// Row count per city, descending, every city in the filtered data included.
pub fn purchases_by_city(rows: &[EnrichedSale]) -> Vec<CountByLabel> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CountByLabel> = Vec::new();
    for row in rows {
        let label = row.city_label();
        match index.get(label) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(label.to_string(), groups.len());
                groups.push(CountByLabel {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

fn top_revenue(mut groups: Vec<RevenueByLabel>) -> Vec<RevenueByLabel> {
    groups.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(Ordering::Equal)
    });
    groups.truncate(TOP_N);
    groups
}

fn sum_by_label<'a>(
    rows: &'a [EnrichedSale],
    label_of: impl Fn(&'a EnrichedSale) -> &'a str,
    value_of: impl Fn(&EnrichedSale) -> Option<f64>,
) -> Vec<RevenueByLabel> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<RevenueByLabel> = Vec::new();
    for row in rows {
        let label = label_of(row);
        let value = value_of(row).unwrap_or(0.0);
        match index.get(label) {
            Some(&i) => groups[i].revenue += value,
            None => {
                index.insert(label, groups.len());
                groups.push(RevenueByLabel {
                    label: label.to_string(),
                    revenue: value,
                });
            }
        }
    }
    groups
}
