use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Weight vector '{name}' has {len} entries, catalog has {expected}")]
    WeightLengthMismatch {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("Weight vector '{name}' sums to {sum}, expected 1.0")]
    WeightSumInvalid { name: &'static str, sum: f64 },

    #[error("Unparseable sale date '{value}' in external data")]
    InvalidDate { value: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DashResult<T> = Result<T, DashError>;
