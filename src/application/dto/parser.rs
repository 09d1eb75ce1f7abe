// src/application/dto/parser.rs
// Parsers from wire records into domain models

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::{BidRecord, ProduceRecord, SnapshotRecord, TransactionRecord};
use crate::domain::errors::{AppResult, DashboardError, DashboardResult};
use crate::domain::models::{Bid, Produce, ProduceId, Transaction, TransactionId};
use crate::domain::repository::DashboardSnapshot;

/// Parse a JSON document into a validated snapshot
pub fn parse_snapshot(json: &str) -> AppResult<DashboardSnapshot> {
    let record: SnapshotRecord = serde_json::from_str(json)?;
    Ok(record.into_snapshot()?)
}

fn to_decimal(value: f64, record: &str, field: &'static str) -> DashboardResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| DashboardError::MalformedNumber {
        record: record.to_string(),
        field,
        value: value.to_string(),
    })
}

impl SnapshotRecord {
    pub fn into_snapshot(self) -> DashboardResult<DashboardSnapshot> {
        let available_produce = self
            .available_produce
            .into_iter()
            .map(ProduceRecord::into_produce)
            .collect::<DashboardResult<Vec<_>>>()?;

        let my_transactions = self
            .my_transactions
            .into_iter()
            .map(TransactionRecord::into_transaction)
            .collect::<DashboardResult<Vec<_>>>()?;

        Ok(DashboardSnapshot {
            available_produce,
            my_transactions,
        })
    }
}

impl ProduceRecord {
    pub fn into_produce(self) -> DashboardResult<Produce> {
        let record = format!("produce {}", self.id);
        Ok(Produce {
            quantity: to_decimal(self.quantity, &record, "quantity")?,
            current_price: to_decimal(self.current_price, &record, "current_price")?,
            id: ProduceId(self.id),
            name: self.name,
            location: self.location,
            unit: self.unit,
            images: self.images,
            bids: self.bids.into_iter().map(BidRecord::into_bid).collect(),
        })
    }
}

impl BidRecord {
    pub fn into_bid(self) -> Bid {
        Bid { id: self.id }
    }
}

impl TransactionRecord {
    /// Missing numbers are kept as `None`; non-finite or out-of-range ones are rejected.
    pub fn into_transaction(self) -> DashboardResult<Transaction> {
        let record = format!("transaction {}", self.id);
        let amount = self
            .amount
            .map(|v| to_decimal(v, &record, "amount"))
            .transpose()?;
        let quantity = self
            .quantity
            .map(|v| to_decimal(v, &record, "quantity"))
            .transpose()?;

        Ok(Transaction {
            id: TransactionId(self.id),
            amount,
            quantity,
            status: self.status.parse()?,
        })
    }
}
