use contracts::domain::a004_review::{sample_reviews, Review, ReviewFilter, ReviewId, ReviewStats};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ReviewListState {
    pub all: Vec<Review>,
    pub items: Vec<Review>,
    /// Sort order lives in the filter; the grid has no column headers
    pub filter: ReviewFilter,
}

impl Default for ReviewListState {
    fn default() -> Self {
        let mut state = Self {
            all: sample_reviews(),
            items: Vec::new(),
            filter: ReviewFilter::default(),
        };
        state.refresh_view();
        state
    }
}

impl ReviewListState {
    pub fn refresh_view(&mut self) {
        self.items = self.filter.apply(&self.all);
    }

    pub fn stats(&self) -> ReviewStats {
        ReviewStats::from_reviews(&self.all)
    }

    /// Counts one more helpful vote; returns the new total.
    pub fn mark_helpful(&mut self, id: &ReviewId) -> Option<u32> {
        let review = self.all.iter_mut().find(|r| &r.id == id)?;
        review.helpful += 1;
        let votes = review.helpful;
        self.refresh_view();
        Some(votes)
    }
}

pub fn create_state() -> RwSignal<ReviewListState> {
    RwSignal::new(ReviewListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_review::{Rating, ReviewSort};
    use contracts::shared::list_query::SelectFilter;

    #[test]
    fn newest_first_on_open() {
        let state = ReviewListState::default();
        assert_eq!(state.items.len(), 8);
        assert_eq!(state.items[0].id.as_str(), "RV001");
    }

    #[test]
    fn rating_filter_keeps_stats_on_full_set() {
        let mut state = ReviewListState::default();
        state.filter.rating = Rating::new(5).map(SelectFilter::Only).unwrap_or_default();
        state.refresh_view();
        assert!(state.items.iter().all(|r| r.rating.value() == 5));
        assert_eq!(state.stats().total, 8);
    }

    #[test]
    fn helpful_vote_reorders_most_helpful() {
        let mut state = ReviewListState::default();
        state.filter.sort = ReviewSort::MostHelpful;
        state.refresh_view();
        let leader = state.items[0].helpful;
        let last_id = state.items[state.items.len() - 1].id.clone();

        for _ in 0..=leader {
            state.mark_helpful(&last_id);
        }
        assert_eq!(state.items[0].id, last_id);
        assert_eq!(state.mark_helpful(&ReviewId::new("RV999")), None);
    }
}
