use chrono::NaiveDateTime;
use contracts::domain::a003_payment::{
    sample_transactions, PaymentStats, Transaction, TransactionFilter,
};
use contracts::domain::common::Money;
use contracts::shared::list_query::sort_list;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PaymentListState {
    pub all: Vec<Transaction>,
    pub items: Vec<Transaction>,
    pub filter: TransactionFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
    /// Reference instant for the date-window filter
    pub now: NaiveDateTime,
}

impl PaymentListState {
    pub fn new(now: NaiveDateTime) -> Self {
        let mut state = Self {
            all: sample_transactions(),
            items: Vec::new(),
            filter: TransactionFilter::default(),
            sort_field: "date".to_string(),
            sort_ascending: false,
            now,
        };
        state.refresh_view();
        state
    }

    pub fn refresh_view(&mut self) {
        let mut rows = self.filter.apply(&self.all, self.now);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        self.items = rows;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        self.refresh_view();
    }

    pub fn stats(&self) -> PaymentStats {
        PaymentStats::from_transactions(&self.all)
    }

    pub fn visible_total(&self) -> Money {
        PaymentStats::filtered_total(&self.items)
    }

    /// "Showing N of M transactions"
    pub fn showing_caption(&self) -> String {
        format!("Showing {} of {} transactions", self.items.len(), self.all.len())
    }
}

pub fn create_state() -> RwSignal<PaymentListState> {
    RwSignal::new(PaymentListState::new(chrono::Local::now().naive_local()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a003_payment::{DateWindow, PaymentStatus};
    use contracts::shared::list_query::SelectFilter;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn newest_first_by_default() {
        let state = PaymentListState::new(at(2024, 1, 26));
        assert_eq!(state.items.len(), 7);
        assert_eq!(state.items[0].id.to_string(), "TXN001");
        assert_eq!(state.showing_caption(), "Showing 7 of 7 transactions");
    }

    #[test]
    fn footer_total_follows_the_filter_but_stats_do_not() {
        let mut state = PaymentListState::new(at(2024, 1, 26));
        let stats_before = state.stats();
        state.filter.status = SelectFilter::Only(PaymentStatus::Failed);
        state.refresh_view();

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.visible_total(), Money::rupees(7800));
        assert_eq!(state.stats(), stats_before);
        assert_eq!(state.showing_caption(), "Showing 1 of 7 transactions");
    }

    #[test]
    fn date_window_uses_the_reference_instant() {
        let mut state = PaymentListState::new(at(2024, 1, 27));
        state.filter.window = DateWindow::Last7Days;
        state.refresh_view();
        // cutoff 20 Jan 12:00 drops TXN006 and TXN007
        assert_eq!(state.items.len(), 5);
        assert!(state.items.iter().all(|t| t.date >= at(2024, 1, 20)));

        state.now = at(2025, 1, 1);
        state.refresh_view();
        assert!(state.items.is_empty());
    }
}
