use crate::domain::a001_booking::BookingId;
use crate::domain::common::aggregate_id::prefixed_id;
use crate::domain::common::Money;
use crate::enums::Tone;
use crate::shared::list_query::{contains_ci, Coded, SearchTerm, Searchable, Sortable};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

prefixed_id!(
    /// Internal transaction number, e.g. `TXN001`
    TransactionId,
    "TXN",
    "transaction"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
    Refunded,
    Pending,
}

impl Coded for PaymentStatus {
    fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Pending => "pending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "Success",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Pending => "Pending",
        }
    }

    fn all() -> &'static [Self] {
        &[
            PaymentStatus::Success,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
            PaymentStatus::Pending,
        ]
    }
}

impl PaymentStatus {
    pub fn tone(&self) -> Tone {
        match self {
            PaymentStatus::Success => Tone::Success,
            PaymentStatus::Failed => Tone::Danger,
            PaymentStatus::Refunded => Tone::Info,
            PaymentStatus::Pending => Tone::Warning,
        }
    }

    /// Icon name understood by the frontend icon set
    pub fn icon(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "check-circle",
            PaymentStatus::Failed => "x-circle",
            PaymentStatus::Refunded => "refresh",
            PaymentStatus::Pending => "alert-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Upi,
    Card,
    #[serde(rename = "netbanking")]
    NetBanking,
    Wallet,
    Cash,
}

impl Coded for PaymentMode {
    fn code(&self) -> &'static str {
        match self {
            PaymentMode::Upi => "upi",
            PaymentMode::Card => "card",
            PaymentMode::NetBanking => "netbanking",
            PaymentMode::Wallet => "wallet",
            PaymentMode::Cash => "cash",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Card",
            PaymentMode::NetBanking => "Net Banking",
            PaymentMode::Wallet => "Wallet",
            PaymentMode::Cash => "Cash",
        }
    }

    fn all() -> &'static [Self] {
        &[
            PaymentMode::Upi,
            PaymentMode::Card,
            PaymentMode::NetBanking,
            PaymentMode::Wallet,
            PaymentMode::Cash,
        ]
    }
}

impl PaymentMode {
    pub fn icon(&self) -> &'static str {
        match self {
            PaymentMode::Upi => "smartphone",
            PaymentMode::Card => "credit-card",
            PaymentMode::NetBanking => "globe",
            PaymentMode::Wallet => "wallet",
            PaymentMode::Cash => "banknote",
        }
    }
}

/// Customer payment as reported by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub customer_name: String,
    pub amount: Money,
    pub date: NaiveDateTime,
    pub status: PaymentStatus,
    pub mode: PaymentMode,
    pub booking_id: BookingId,
    /// Gateway payment id, e.g. `pay_MvNRzHvOjQT8Ab`
    pub transaction_id: String,
}

impl Transaction {
    pub fn date_display(&self) -> String {
        self.date.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl Searchable for Transaction {
    fn matches_term(&self, term: &SearchTerm<'_>) -> bool {
        contains_ci(&self.customer_name, &term.lower)
            || contains_ci(&self.transaction_id, &term.lower)
            || contains_ci(self.booking_id.as_str(), &term.lower)
    }
}

impl Sortable for Transaction {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "customer" => self
                .customer_name
                .to_lowercase()
                .cmp(&other.customer_name.to_lowercase()),
            "amount" => self.amount.cmp(&other.amount),
            "date" => self.date.cmp(&other.date),
            "status" => self.status.label().cmp(other.status.label()),
            "mode" => self.mode.label().cmp(other.mode.label()),
            _ => self.transaction_id.cmp(&other.transaction_id),
        }
    }
}

/// Statistic cards above the payment history (always over the full history)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentStats {
    pub successful_revenue: Money,
    pub success_count: usize,
    pub failed_count: usize,
    pub refunded_amount: Money,
}

impl PaymentStats {
    pub fn from_transactions(rows: &[Transaction]) -> Self {
        let with_status = |status: PaymentStatus| rows.iter().filter(move |t| t.status == status);
        Self {
            successful_revenue: with_status(PaymentStatus::Success).map(|t| t.amount).sum(),
            success_count: with_status(PaymentStatus::Success).count(),
            failed_count: with_status(PaymentStatus::Failed).count(),
            refunded_amount: with_status(PaymentStatus::Refunded).map(|t| t.amount).sum(),
        }
    }

    /// Footer total of the currently visible rows
    pub fn filtered_total(rows: &[Transaction]) -> Money {
        rows.iter().map(|t| t.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_payment::sample_transactions;

    #[test]
    fn test_stats_over_sample() {
        let stats = PaymentStats::from_transactions(&sample_transactions());
        assert_eq!(stats.successful_revenue, Money(8500 + 6200 + 4500 + 9800));
        assert_eq!(stats.success_count, 4);
        assert_eq!(stats.failed_count, 1);
        assert_eq!(stats.refunded_amount, Money(3200));
    }

    #[test]
    fn test_filtered_total() {
        let rows = sample_transactions();
        assert_eq!(PaymentStats::filtered_total(&rows[..2]), Money(14700));
        assert_eq!(PaymentStats::filtered_total(&[]), Money::ZERO);
    }

    #[test]
    fn test_mode_serde_code() {
        let json = serde_json::to_string(&PaymentMode::NetBanking).unwrap();
        assert_eq!(json, "\"netbanking\"");
        assert_eq!(PaymentMode::from_code("netbanking"), Some(PaymentMode::NetBanking));
    }

    #[test]
    fn test_date_display() {
        assert_eq!(sample_transactions()[0].date_display(), "2024-01-25 14:30");
    }
}
