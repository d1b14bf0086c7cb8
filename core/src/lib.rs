//! salesdash-core — the data side of the sales analytics dashboard.
//!
//! The crate is a straight pipeline:
//!   1. A [`source::DataSource`] produces the four raw tables
//!      (sales, products, clients, sellers).
//!   2. [`enrich::join_and_derive`] left-joins them into one denormalized
//!      fact table and computes revenue, profit, and the month period key.
//!   3. [`pipeline::Dashboard`] memoizes that joined table and answers
//!      filter queries as a pure function of (table, filter spec).
//!
//! Presentation (widgets, charts) lives outside this crate; the `dash-runner`
//! tool is the reference consumer.

pub mod aggregate;
pub mod catalog;
pub mod dataset;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod rng;
pub mod source;
pub mod store;
pub mod types;
