// src/domain/mod.rs
pub mod errors;
pub mod models;
pub mod repository;
pub mod status;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, DashboardError, DashboardResult};
pub use models::{Bid, Produce, ProduceId, Transaction, TransactionId, TransactionStatus};
pub use repository::{DashboardSnapshot, SnapshotSource};
pub use status::{categorize, categorize_raw, display, DisplayCategory, StatusDisplay, StatusIcon, Tint};
