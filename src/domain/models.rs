// src/domain/models.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DashboardError;

/// Stable identifier of a produce listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProduceId(pub String);

impl fmt::Display for ProduceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    /// Leading characters of the id, used as a human-facing reference.
    pub fn short(&self, len: usize) -> &str {
        match self.0.char_indices().nth(len) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bid placed on a listing. The dashboard only ever counts these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
}

/// Marketplace listing of a quantity of goods open for bidding.
#[derive(Debug, Clone, PartialEq)]
pub struct Produce {
    pub id: ProduceId,
    pub name: String,
    pub location: String,
    pub unit: String,
    pub quantity: Decimal,
    /// Price per `unit`.
    pub current_price: Decimal,
    pub images: Vec<String>,
    pub bids: Vec<Bid>,
}

impl Produce {
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Closed status taxonomy of a transaction. Lifecycle order is
/// pending -> deal_accepted -> payment_initiated -> completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    DealAccepted,
    PaymentInitiated,
    Completed,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 4] = [
        TransactionStatus::Pending,
        TransactionStatus::DealAccepted,
        TransactionStatus::PaymentInitiated,
        TransactionStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::DealAccepted => "deal_accepted",
            TransactionStatus::PaymentInitiated => "payment_initiated",
            TransactionStatus::Completed => "completed",
        }
    }

    /// Position in the lifecycle, starting at 0 for `Pending`.
    pub fn stage(&self) -> u8 {
        match self {
            TransactionStatus::Pending => 0,
            TransactionStatus::DealAccepted => 1,
            TransactionStatus::PaymentInitiated => 2,
            TransactionStatus::Completed => 3,
        }
    }

    /// Still in the bidding phase: counted as an active bid.
    pub fn is_active_bid(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Pending | TransactionStatus::DealAccepted
        )
    }

    /// Anything past `Pending` has committed money.
    pub fn is_committed(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TransactionStatus::Pending),
            "deal_accepted" => Ok(TransactionStatus::DealAccepted),
            "payment_initiated" => Ok(TransactionStatus::PaymentInitiated),
            "completed" => Ok(TransactionStatus::Completed),
            other => Err(DashboardError::UnknownStatus(other.to_string())),
        }
    }
}

/// A deal between the participant and the marketplace.
///
/// `amount` and `quantity` are optional because upstream feeds may omit them;
/// how a missing value is treated is decided at aggregation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new(id: &str, amount: Decimal, quantity: Decimal, status: TransactionStatus) -> Self {
        Self {
            id: TransactionId(id.to_string()),
            amount: Some(amount),
            quantity: Some(quantity),
            status,
        }
    }
}
