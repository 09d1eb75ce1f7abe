// src/application/usecase/aggregates_usecase.rs
// Scalar aggregates over a dashboard snapshot

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DashboardError, DashboardResult};
use crate::domain::models::{Produce, Transaction, TransactionStatus};

/// How missing transaction numbers are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// A missing amount or quantity fails the computation
    #[default]
    Strict,
    /// A missing amount or quantity counts as zero
    Lenient,
}

impl std::str::FromStr for NumericPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(NumericPolicy::Strict),
            "lenient" => Ok(NumericPolicy::Lenient),
            other => Err(format!("Unknown numeric policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub active_bids_count: usize,
    pub completed_deals_count: usize,
    pub total_produce_count: usize,
    pub pending_payments_count: usize,
    pub total_investment: Decimal,
}

/// Banner state derived from the aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttentionSummary {
    pub needs_attention: bool,
    /// Number shown on the notification badge, only when attention is needed.
    pub badge_count: Option<usize>,
    pub show_payment_alert: bool,
}

fn resolve(
    value: Option<Decimal>,
    tx: &Transaction,
    field: &'static str,
    policy: NumericPolicy,
) -> DashboardResult<Decimal> {
    match (value, policy) {
        (Some(v), _) => Ok(v),
        (None, NumericPolicy::Lenient) => {
            log::warn!("Transaction {} has no {}, counting it as zero", tx.id, field);
            Ok(Decimal::ZERO)
        }
        (None, NumericPolicy::Strict) => Err(DashboardError::MissingField {
            transaction_id: tx.id.to_string(),
            field,
        }),
    }
}

pub fn compute_aggregates(
    produce: &[Produce],
    transactions: &[Transaction],
    policy: NumericPolicy,
) -> DashboardResult<Aggregates> {
    let mut aggregates = Aggregates {
        total_produce_count: produce.len(),
        ..Aggregates::default()
    };

    for tx in transactions {
        let amount = resolve(tx.amount, tx, "amount", policy)?;
        resolve(tx.quantity, tx, "quantity", policy)?;

        match tx.status {
            TransactionStatus::Pending | TransactionStatus::DealAccepted => {
                aggregates.active_bids_count += 1
            }
            TransactionStatus::PaymentInitiated => aggregates.pending_payments_count += 1,
            TransactionStatus::Completed => aggregates.completed_deals_count += 1,
        }

        if tx.status.is_committed() {
            aggregates.total_investment = aggregates
                .total_investment
                .checked_add(amount)
                .ok_or_else(|| DashboardError::Overflow {
                    transaction_id: tx.id.to_string(),
                    field: "total_investment",
                })?;
        }
    }

    log::debug!(
        "Aggregated {} produce / {} transactions: active={} completed={} payments={} invested={}",
        produce.len(),
        transactions.len(),
        aggregates.active_bids_count,
        aggregates.completed_deals_count,
        aggregates.pending_payments_count,
        aggregates.total_investment
    );

    Ok(aggregates)
}

pub fn needs_attention(aggregates: &Aggregates) -> bool {
    aggregates.active_bids_count > 0 || aggregates.pending_payments_count > 0
}

pub fn attention_summary(aggregates: &Aggregates) -> AttentionSummary {
    let needs_attention = needs_attention(aggregates);
    AttentionSummary {
        needs_attention,
        badge_count: needs_attention
            .then(|| aggregates.active_bids_count + aggregates.pending_payments_count),
        show_payment_alert: aggregates.pending_payments_count > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tx(id: &str, amount: Decimal, status: TransactionStatus) -> Transaction {
        Transaction::new(id, amount, dec!(1), status)
    }

    #[test]
    fn test_empty_inputs_yield_zeroes() {
        let aggregates = compute_aggregates(&[], &[], NumericPolicy::Strict).unwrap();
        assert_eq!(aggregates, Aggregates::default());
        assert_eq!(aggregates.total_investment, Decimal::ZERO);
        assert!(!needs_attention(&aggregates));
    }

    #[test]
    fn test_mixed_statuses() {
        let transactions = vec![
            tx("a", dec!(1000), TransactionStatus::Pending),
            tx("b", dec!(2000), TransactionStatus::DealAccepted),
            tx("c", dec!(500), TransactionStatus::Completed),
        ];
        let aggregates = compute_aggregates(&[], &transactions, NumericPolicy::Strict).unwrap();

        assert_eq!(aggregates.active_bids_count, 2);
        assert_eq!(aggregates.completed_deals_count, 1);
        assert_eq!(aggregates.pending_payments_count, 0);
        assert_eq!(aggregates.total_investment, dec!(2500));
    }

    #[test]
    fn test_payment_initiated_counts_as_pending_payment_and_investment() {
        let transactions = vec![tx("a", dec!(750.25), TransactionStatus::PaymentInitiated)];
        let aggregates = compute_aggregates(&[], &transactions, NumericPolicy::Strict).unwrap();

        assert_eq!(aggregates.pending_payments_count, 1);
        assert_eq!(aggregates.active_bids_count, 0);
        assert_eq!(aggregates.total_investment, dec!(750.25));
    }

    #[test]
    fn test_strict_policy_rejects_missing_amount() {
        let mut missing = tx("t-42", dec!(0), TransactionStatus::Completed);
        missing.amount = None;

        let err = compute_aggregates(&[], &[missing], NumericPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            DashboardError::MissingField {
                transaction_id: "t-42".to_string(),
                field: "amount",
            }
        );
    }

    #[test]
    fn test_strict_policy_rejects_missing_quantity_even_when_pending() {
        let mut missing = tx("t-7", dec!(10), TransactionStatus::Pending);
        missing.quantity = None;

        let err = compute_aggregates(&[], &[missing], NumericPolicy::Strict).unwrap_err();
        assert!(matches!(err, DashboardError::MissingField { field: "quantity", .. }));
    }

    #[test]
    fn test_lenient_policy_treats_missing_as_zero() {
        let mut missing = tx("a", dec!(0), TransactionStatus::Completed);
        missing.amount = None;
        missing.quantity = None;
        let transactions = vec![missing, tx("b", dec!(300), TransactionStatus::Completed)];

        let aggregates = compute_aggregates(&[], &transactions, NumericPolicy::Lenient).unwrap();
        assert_eq!(aggregates.completed_deals_count, 2);
        assert_eq!(aggregates.total_investment, dec!(300));
    }

    #[test]
    fn test_investment_overflow_is_an_error() {
        let huge = Decimal::from_i128_with_scale(7 * 10i128.pow(28), 0);
        let transactions = vec![
            tx("a", huge, TransactionStatus::Completed),
            tx("b", huge, TransactionStatus::DealAccepted),
        ];

        let err = compute_aggregates(&[], &transactions, NumericPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            DashboardError::Overflow {
                transaction_id: "b".to_string(),
                field: "total_investment",
            }
        );
    }

    #[test]
    fn test_pending_amounts_never_overflow_investment() {
        let huge = Decimal::from_i128_with_scale(7 * 10i128.pow(28), 0);
        let transactions = vec![
            tx("a", huge, TransactionStatus::Pending),
            tx("b", huge, TransactionStatus::Completed),
        ];

        let aggregates = compute_aggregates(&[], &transactions, NumericPolicy::Strict).unwrap();
        assert_eq!(aggregates.total_investment, huge);
    }

    #[test]
    fn test_attention_summary() {
        let quiet = Aggregates::default();
        let summary = attention_summary(&quiet);
        assert!(!summary.needs_attention);
        assert_eq!(summary.badge_count, None);
        assert!(!summary.show_payment_alert);

        let busy = Aggregates {
            active_bids_count: 2,
            pending_payments_count: 3,
            ..Aggregates::default()
        };
        let summary = attention_summary(&busy);
        assert!(summary.needs_attention);
        assert_eq!(summary.badge_count, Some(5));
        assert!(summary.show_payment_alert);

        let bids_only = Aggregates {
            active_bids_count: 1,
            ..Aggregates::default()
        };
        let summary = attention_summary(&bids_only);
        assert!(summary.needs_attention);
        assert!(!summary.show_payment_alert);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Lenient".parse::<NumericPolicy>(), Ok(NumericPolicy::Lenient));
        assert_eq!("strict".parse::<NumericPolicy>(), Ok(NumericPolicy::Strict));
        assert!("loose".parse::<NumericPolicy>().is_err());
    }
}
