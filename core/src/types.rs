//! Shared primitive types used across the pipeline.

/// Primary key of a product row.
pub type ProductId = u32;

/// Primary key of a client row.
pub type ClientId = u32;

/// Primary key of a seller row.
pub type SellerId = u32;

/// Calendar-month bucket of a sale date, formatted `YYYY-MM`.
pub type PeriodKey = String;

/// Label under which rows with a missing joined attribute filter and group.
/// A sale whose foreign key matched nothing still counts; it just counts here.
pub const ABSENT_LABEL: &str = "(unknown)";
