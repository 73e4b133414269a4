use contracts::domain::a001_booking::{sample_bookings, Booking, BookingFilter};
use contracts::shared::list_query::sort_list;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct BookingListState {
    /// Full dataset; the view is always recomputed from it
    pub all: Vec<Booking>,
    pub items: Vec<Booking>,
    pub filter: BookingFilter,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for BookingListState {
    fn default() -> Self {
        let mut state = Self {
            all: sample_bookings(),
            items: Vec::new(),
            filter: BookingFilter::default(),
            sort_field: "id".to_string(),
            sort_ascending: true,
        };
        state.refresh_view();
        state
    }
}

impl BookingListState {
    pub fn refresh_view(&mut self) {
        let mut rows = self.filter.apply(&self.all);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        self.items = rows;
    }

    /// Same column flips direction, a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        self.refresh_view();
    }
}

pub fn create_state() -> RwSignal<BookingListState> {
    RwSignal::new(BookingListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_booking::BookingStatus;
    use contracts::shared::list_query::SelectFilter;

    fn ids(state: &BookingListState) -> Vec<String> {
        state.items.iter().map(|b| b.id.to_string()).collect()
    }

    #[test]
    fn starts_with_every_booking_in_id_order() {
        let state = BookingListState::default();
        assert_eq!(state.items.len(), state.all.len());
        assert_eq!(ids(&state).first().map(String::as_str), Some("BK001"));
    }

    #[test]
    fn filter_change_recomputes_from_full_dataset() {
        let mut state = BookingListState::default();
        state.filter.status = SelectFilter::Only(BookingStatus::Completed);
        state.refresh_view();
        assert!(state
            .items
            .iter()
            .all(|b| b.status == BookingStatus::Completed));

        state.filter.status = SelectFilter::All;
        state.refresh_view();
        assert_eq!(state.items.len(), state.all.len());
    }

    #[test]
    fn toggling_the_same_column_reverses_order() {
        let mut state = BookingListState::default();
        state.toggle_sort("amount");
        let ascending = ids(&state);
        state.toggle_sort("amount");
        let descending = ids(&state);
        assert!(state.sort_field == "amount" && !state.sort_ascending);
        assert_eq!(descending, ascending.into_iter().rev().collect::<Vec<_>>());
        assert_eq!(
            state.items.first().map(|b| b.amount),
            state.all.iter().map(|b| b.amount).max()
        );
        assert_eq!(
            state.items.last().map(|b| b.amount),
            state.all.iter().map(|b| b.amount).min()
        );
    }
}
