// src/domain/repository/mod.rs
// Repository interfaces for dashboard inputs

use async_trait::async_trait;

use crate::domain::errors::AppResult;
use crate::domain::models::{Produce, Transaction};

/// One consistent read of both dashboard inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub available_produce: Vec<Produce>,
    pub my_transactions: Vec<Transaction>,
}

/// Source of dashboard snapshots (API client, file, fixture...)
#[async_trait]
pub trait SnapshotSource {
    async fn fetch_snapshot(&self) -> AppResult<DashboardSnapshot>;
}
