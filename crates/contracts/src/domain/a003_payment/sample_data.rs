use super::aggregate::{PaymentMode, PaymentStatus, Transaction, TransactionId};
use crate::domain::a001_booking::BookingId;
use crate::domain::common::Money;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static TRANSACTIONS: Lazy<Vec<Transaction>> = Lazy::new(|| {
    vec![
        transaction("TXN001", "Rajesh Kumar", 8500, (2024, 1, 25, 14, 30), PaymentStatus::Success, PaymentMode::Upi, "BK001", "pay_MvNRzHvOjQT8Ab"),
        transaction("TXN002", "Priya Sharma", 6200, (2024, 1, 24, 11, 45), PaymentStatus::Success, PaymentMode::Card, "BK002", "pay_MvNRzHvOjQT8Ac"),
        transaction("TXN003", "Amit Patel", 7800, (2024, 1, 23, 9, 20), PaymentStatus::Failed, PaymentMode::NetBanking, "BK003", "pay_MvNRzHvOjQT8Ad"),
        transaction("TXN004", "Sunita Gupta", 4500, (2024, 1, 22, 16, 15), PaymentStatus::Success, PaymentMode::Wallet, "BK004", "pay_MvNRzHvOjQT8Ae"),
        transaction("TXN005", "Ravi Singh", 3200, (2024, 1, 21, 13, 30), PaymentStatus::Refunded, PaymentMode::Upi, "BK005", "pay_MvNRzHvOjQT8Af"),
        transaction("TXN006", "Meera Joshi", 9800, (2024, 1, 20, 10, 45), PaymentStatus::Success, PaymentMode::Card, "BK006", "pay_MvNRzHvOjQT8Ag"),
        transaction("TXN007", "Deepak Verma", 5600, (2024, 1, 19, 15, 20), PaymentStatus::Pending, PaymentMode::NetBanking, "BK007", "pay_MvNRzHvOjQT8Ah"),
    ]
});

/// Seed payment history
pub fn sample_transactions() -> Vec<Transaction> {
    TRANSACTIONS.clone()
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: &str,
    customer_name: &str,
    amount: i64,
    (y, m, d, h, min): (i32, u32, u32, u32, u32),
    status: PaymentStatus,
    mode: PaymentMode,
    booking_id: &str,
    transaction_id: &str,
) -> Transaction {
    Transaction {
        id: TransactionId::new(id),
        customer_name: customer_name.to_string(),
        amount: Money::rupees(amount),
        date: NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap_or_default(),
        status,
        mode,
        booking_id: BookingId::new(booking_id),
        transaction_id: transaction_id.to_string(),
    }
}
