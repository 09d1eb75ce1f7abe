// src/application/usecase/dashboard_usecase.rs
// Assembles the trader dashboard view-model

use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregates_usecase::{
    attention_summary, compute_aggregates, Aggregates, AttentionSummary, NumericPolicy,
};
use super::preview_usecase::{select_preview, DEFAULT_PREVIEW_LIMIT};
use crate::domain::errors::DashboardResult;
use crate::domain::models::{Produce, Transaction, TransactionStatus};
use crate::domain::repository::DashboardSnapshot;
use crate::domain::status::{display, StatusDisplay};

/// Length of the id prefix shown as a transaction reference
const REFERENCE_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    pub preview_limit: usize,
    pub numeric_policy: NumericPolicy,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            numeric_policy: NumericPolicy::Strict,
        }
    }
}

/// Produce row in the market opportunities panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducePreview {
    pub id: String,
    pub name: String,
    pub location: String,
    pub quantity: Decimal,
    pub unit: String,
    pub current_price: Decimal,
    /// `None` means the renderer substitutes its fallback image
    pub primary_image: Option<String>,
    pub bid_count: usize,
    pub has_bids: bool,
}

impl From<&Produce> for ProducePreview {
    fn from(produce: &Produce) -> Self {
        Self {
            id: produce.id.to_string(),
            name: produce.name.clone(),
            location: produce.location.clone(),
            quantity: produce.quantity,
            unit: produce.unit.clone(),
            current_price: produce.current_price,
            primary_image: produce.primary_image().map(str::to_string),
            bid_count: produce.bid_count(),
            has_bids: produce.bid_count() > 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    pub id: String,
    pub reference: String,
    pub amount: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub status: TransactionStatus,
    pub display: StatusDisplay,
}

impl From<&Transaction> for TransactionView {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            reference: tx.id.short(REFERENCE_LEN).to_string(),
            amount: tx.amount,
            quantity: tx.quantity,
            status: tx.status,
            display: display(tx.status),
        }
    }
}

/// Everything the renderer needs for one dashboard pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub aggregates: Aggregates,
    pub attention: AttentionSummary,
    pub transactions: Vec<TransactionView>,
    pub opportunities: Vec<ProducePreview>,
    pub recent_transactions: Vec<TransactionView>,
    pub has_transactions: bool,
}

pub trait DashboardUseCase {
    fn build_view(
        &self,
        produce: &[Produce],
        transactions: &[Transaction],
    ) -> DashboardResult<DashboardView>;

    fn build_from_snapshot(&self, snapshot: &DashboardSnapshot) -> DashboardResult<DashboardView> {
        self.build_view(&snapshot.available_produce, &snapshot.my_transactions)
    }
}

/// Stateless apart from its settings; one instance can serve any number of callers.
#[derive(Debug, Clone, Default)]
pub struct DashboardAggregator {
    settings: DashboardSettings,
}

impl DashboardAggregator {
    pub fn new(settings: DashboardSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }
}

impl DashboardUseCase for DashboardAggregator {
    fn build_view(
        &self,
        produce: &[Produce],
        transactions: &[Transaction],
    ) -> DashboardResult<DashboardView> {
        let aggregates = compute_aggregates(produce, transactions, self.settings.numeric_policy)?;
        let attention = attention_summary(&aggregates);

        let transaction_views: Vec<TransactionView> =
            transactions.iter().map(TransactionView::from).collect();

        let opportunities = select_preview(produce, self.settings.preview_limit)
            .iter()
            .map(ProducePreview::from)
            .collect();

        let recent_transactions =
            select_preview(&transaction_views, self.settings.preview_limit).to_vec();

        Ok(DashboardView {
            aggregates,
            attention,
            has_transactions: !transaction_views.is_empty(),
            transactions: transaction_views,
            opportunities,
            recent_transactions,
        })
    }
}
