// src/domain/status.rs
// Display table for transaction statuses

use serde::Serialize;

use crate::domain::errors::DashboardResult;
use crate::domain::models::TransactionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayCategory {
    Success,
    InProgress,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    Check,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Green,
    Blue,
    Orange,
}

/// Everything a renderer needs to badge a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub category: DisplayCategory,
    pub icon: StatusIcon,
    pub tint: Tint,
    pub label: &'static str,
}

pub fn categorize(status: TransactionStatus) -> DisplayCategory {
    display(status).category
}

pub fn display(status: TransactionStatus) -> StatusDisplay {
    match status {
        TransactionStatus::Completed => StatusDisplay {
            category: DisplayCategory::Success,
            icon: StatusIcon::Check,
            tint: Tint::Green,
            label: "Completed",
        },
        TransactionStatus::PaymentInitiated => StatusDisplay {
            category: DisplayCategory::InProgress,
            icon: StatusIcon::Clock,
            tint: Tint::Blue,
            label: "Payment in progress",
        },
        TransactionStatus::DealAccepted => StatusDisplay {
            category: DisplayCategory::Pending,
            icon: StatusIcon::Clock,
            tint: Tint::Orange,
            label: "Accepted",
        },
        TransactionStatus::Pending => StatusDisplay {
            category: DisplayCategory::Pending,
            icon: StatusIcon::Clock,
            tint: Tint::Orange,
            label: "Pending",
        },
    }
}

/// Categorize a status string straight from an upstream feed.
/// Values outside the closed set are an error, never a default.
pub fn categorize_raw(status: &str) -> DashboardResult<DisplayCategory> {
    let status: TransactionStatus = status.parse()?;
    Ok(categorize(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DashboardError;

    #[test]
    fn test_display_table() {
        let completed = display(TransactionStatus::Completed);
        assert_eq!(completed.category, DisplayCategory::Success);
        assert_eq!(completed.icon, StatusIcon::Check);
        assert_eq!(completed.label, "Completed");

        let paying = display(TransactionStatus::PaymentInitiated);
        assert_eq!(paying.category, DisplayCategory::InProgress);
        assert_eq!(paying.icon, StatusIcon::Clock);
        assert_eq!(paying.label, "Payment in progress");

        let accepted = display(TransactionStatus::DealAccepted);
        assert_eq!(accepted.category, DisplayCategory::Pending);
        assert_eq!(accepted.label, "Accepted");

        let pending = display(TransactionStatus::Pending);
        assert_eq!(pending.category, DisplayCategory::Pending);
        assert_eq!(pending.label, "Pending");
    }

    #[test]
    fn test_payment_tint_differs_from_other_clocks() {
        let paying = display(TransactionStatus::PaymentInitiated);
        let pending = display(TransactionStatus::Pending);
        assert_eq!(paying.icon, pending.icon);
        assert_ne!(paying.tint, pending.tint);
    }

    #[test]
    fn test_categorize_is_deterministic() {
        for status in TransactionStatus::ALL {
            assert_eq!(categorize(status), categorize(status));
            assert_eq!(display(status), display(status));
        }
    }

    #[test]
    fn test_categorize_raw_rejects_unknown() {
        assert_eq!(categorize_raw("completed"), Ok(DisplayCategory::Success));
        assert_eq!(
            categorize_raw("refunded"),
            Err(DashboardError::UnknownStatus("refunded".to_string()))
        );
    }
}
