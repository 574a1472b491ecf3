//! Error type shared by the statistics kernels, the feature builder and the
//! I/O collaborators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    /// A statistic needs at least one contig.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Zero denominator (empty mean, zero genome size, zero bases, N50 of 0).
    #[error("division by zero: {0}")]
    Division(String),

    /// The cumulative threshold of an N-statistic was never reached.
    #[error("undefined statistic: {0}")]
    UndefinedStatistic(String),

    /// Non-nucleotide character found while strict alphabet checking is on.
    #[error("malformed sequence '{id}': invalid character '{found}' at position {position}")]
    MalformedSequence {
        id: String,
        position: usize,
        found: char,
    },

    /// Bad arguments or configuration values.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeatureError>;
