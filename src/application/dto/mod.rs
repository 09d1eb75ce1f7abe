// src/application/dto/mod.rs
// Wire shapes of upstream dashboard data

pub mod parser;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(default, alias = "availableProduce")]
    pub available_produce: Vec<ProduceRecord>,
    #[serde(default, alias = "myTransactions")]
    pub my_transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduceRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub unit: String,
    pub quantity: f64,
    #[serde(alias = "currentPrice")]
    pub current_price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub bids: Vec<BidRecord>,
}

/// Extra bid fields from the feed are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidRecord {
    #[serde(default)]
    pub id: String,
}

/// Status stays a plain string here so unknown values can be reported
/// instead of failing inside serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    pub status: String,
}
