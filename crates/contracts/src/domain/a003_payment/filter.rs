use super::aggregate::{PaymentMode, PaymentStatus, Transaction};
use crate::shared::list_query::{filter_by_term, Coded, SelectFilter};
use chrono::{Duration, NaiveDateTime};

/// "Date range" select on the payment history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateWindow {
    #[default]
    All,
    Last7Days,
    Last30Days,
    Last90Days,
}

impl Coded for DateWindow {
    fn code(&self) -> &'static str {
        match self {
            DateWindow::All => "all",
            DateWindow::Last7Days => "7days",
            DateWindow::Last30Days => "30days",
            DateWindow::Last90Days => "90days",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DateWindow::All => "All Time",
            DateWindow::Last7Days => "Last 7 days",
            DateWindow::Last30Days => "Last 30 days",
            DateWindow::Last90Days => "Last 3 months",
        }
    }

    fn all() -> &'static [Self] {
        &[
            DateWindow::All,
            DateWindow::Last7Days,
            DateWindow::Last30Days,
            DateWindow::Last90Days,
        ]
    }
}

impl DateWindow {
    /// Earliest instant still inside the window, `None` for all time.
    pub fn cutoff(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let days = match self {
            DateWindow::All => return None,
            DateWindow::Last7Days => 7,
            DateWindow::Last30Days => 30,
            DateWindow::Last90Days => 90,
        };
        Some(now - Duration::days(days))
    }

    pub fn contains(&self, date: NaiveDateTime, now: NaiveDateTime) -> bool {
        self.cutoff(now).map_or(true, |cutoff| date >= cutoff)
    }
}

/// Search, status, mode and date-window filters of the payment history
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub search: String,
    pub status: SelectFilter<PaymentStatus>,
    pub mode: SelectFilter<PaymentMode>,
    pub window: DateWindow,
}

impl TransactionFilter {
    /// `now` anchors the date window; pass the current local time from the UI.
    pub fn apply(&self, rows: &[Transaction], now: NaiveDateTime) -> Vec<Transaction> {
        let mut filtered = filter_by_term(rows, &self.search);
        filtered.retain(|t| {
            self.status.accepts(&t.status)
                && self.mode.accepts(&t.mode)
                && self.window.contains(t.date, now)
        });
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_payment::sample_transactions;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn ids(rows: &[Transaction]) -> Vec<&str> {
        rows.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_search_by_gateway_id_and_booking() {
        let rows = sample_transactions();
        let now = at(2024, 1, 26, 0, 0);
        let by_gateway = TransactionFilter {
            search: "T8AD".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_gateway.apply(&rows, now)), vec!["TXN003"]);

        let by_booking = TransactionFilter {
            search: "bk007".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_booking.apply(&rows, now)), vec!["TXN007"]);
    }

    #[test]
    fn test_status_and_mode() {
        let filter = TransactionFilter {
            status: SelectFilter::Only(PaymentStatus::Success),
            mode: SelectFilter::Only(PaymentMode::Card),
            ..Default::default()
        };
        let result = filter.apply(&sample_transactions(), at(2024, 1, 26, 0, 0));
        assert_eq!(ids(&result), vec!["TXN002", "TXN006"]);
    }

    #[test]
    fn test_window_cutoff_is_inclusive() {
        let now = at(2024, 1, 26, 14, 30);
        let cutoff = DateWindow::Last7Days.cutoff(now).unwrap();
        assert_eq!(cutoff, at(2024, 1, 19, 14, 30));
        assert!(DateWindow::Last7Days.contains(cutoff, now));
        assert!(!DateWindow::Last7Days.contains(at(2024, 1, 19, 14, 29), now));
        assert_eq!(DateWindow::All.cutoff(now), None);
    }

    #[test]
    fn test_window_filter_over_sample() {
        let now = at(2024, 1, 27, 12, 0);
        let filter = TransactionFilter {
            window: DateWindow::Last7Days,
            ..Default::default()
        };
        // cutoff 2024-01-20 12:00 keeps TXN001..TXN005
        assert_eq!(
            ids(&filter.apply(&sample_transactions(), now)),
            vec!["TXN001", "TXN002", "TXN003", "TXN004", "TXN005"]
        );

        let far_future = at(2025, 1, 1, 0, 0);
        let filter = TransactionFilter {
            window: DateWindow::Last90Days,
            ..Default::default()
        };
        assert!(filter.apply(&sample_transactions(), far_future).is_empty());
    }

    #[test]
    fn test_window_codes() {
        assert_eq!(DateWindow::from_code("30days"), Some(DateWindow::Last30Days));
        assert_eq!(DateWindow::from_code("1year"), None);
    }
}
