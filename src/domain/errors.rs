// src/domain/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] DashboardError),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures of the aggregation core. All of them point at bad upstream data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Unknown transaction status: {0:?}")]
    UnknownStatus(String),

    #[error("Transaction {transaction_id} is missing {field}")]
    MissingField {
        transaction_id: String,
        field: &'static str,
    },

    #[error("Malformed {field} on {record}: {value}")]
    MalformedNumber {
        record: String,
        field: &'static str,
        value: String,
    },

    #[error("{field} overflowed while summing transaction {transaction_id}")]
    Overflow {
        transaction_id: String,
        field: &'static str,
    },
}

pub type AppResult<T> = Result<T, AppError>;
pub type DashboardResult<T> = Result<T, DashboardError>;
