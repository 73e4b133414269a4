use super::aggregate::{Rating, Review};
use crate::shared::list_query::{filter_by_term, Coded, SelectFilter};

/// Sort options of the review grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewSort {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
    MostHelpful,
}

impl Coded for ReviewSort {
    fn code(&self) -> &'static str {
        match self {
            ReviewSort::Newest => "newest",
            ReviewSort::Oldest => "oldest",
            ReviewSort::Highest => "highest",
            ReviewSort::Lowest => "lowest",
            ReviewSort::MostHelpful => "helpful",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReviewSort::Newest => "Newest First",
            ReviewSort::Oldest => "Oldest First",
            ReviewSort::Highest => "Highest Rating",
            ReviewSort::Lowest => "Lowest Rating",
            ReviewSort::MostHelpful => "Most Helpful",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ReviewSort::Newest,
            ReviewSort::Oldest,
            ReviewSort::Highest,
            ReviewSort::Lowest,
            ReviewSort::MostHelpful,
        ]
    }
}

impl ReviewSort {
    /// Stable: equal keys keep their input order.
    pub fn sort(&self, rows: &mut [Review]) {
        match self {
            ReviewSort::Newest => rows.sort_by(|a, b| b.date.cmp(&a.date)),
            ReviewSort::Oldest => rows.sort_by(|a, b| a.date.cmp(&b.date)),
            ReviewSort::Highest => rows.sort_by(|a, b| b.rating.cmp(&a.rating)),
            ReviewSort::Lowest => rows.sort_by(|a, b| a.rating.cmp(&b.rating)),
            ReviewSort::MostHelpful => rows.sort_by(|a, b| b.helpful.cmp(&a.helpful)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub search: String,
    pub rating: SelectFilter<Rating>,
    pub sort: ReviewSort,
}

impl ReviewFilter {
    pub fn apply(&self, rows: &[Review]) -> Vec<Review> {
        let mut filtered = filter_by_term(rows, &self.search);
        filtered.retain(|r| self.rating.accepts(&r.rating));
        self.sort.sort(&mut filtered);
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_review::sample_reviews;

    fn ids(rows: &[Review]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_text_and_route() {
        let rows = sample_reviews();
        let by_text = ReviewFilter {
            search: "TRACKING".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_text.apply(&rows)), vec!["RV006"]);

        let by_route = ReviewFilter {
            search: "hyderabad".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_route.apply(&rows)), vec!["RV003", "RV008"]);
    }

    #[test]
    fn test_rating_filter_returns_exact_matches() {
        let rows = sample_reviews();
        for rating in Rating::all() {
            let filter = ReviewFilter {
                rating: SelectFilter::Only(*rating),
                ..Default::default()
            };
            let result = filter.apply(&rows);
            let expected = rows.iter().filter(|r| r.rating == *rating).count();
            assert_eq!(result.len(), expected);
            assert!(result.iter().all(|r| r.rating == *rating));
        }
    }

    #[test]
    fn test_sort_orders() {
        let rows = sample_reviews();
        let apply = |sort| {
            ReviewFilter {
                sort,
                ..Default::default()
            }
            .apply(&rows)
        };

        assert_eq!(ids(&apply(ReviewSort::Oldest))[0], "RV008");
        assert_eq!(ids(&apply(ReviewSort::Newest))[0], "RV001");
        assert_eq!(
            ids(&apply(ReviewSort::MostHelpful))[..3],
            ["RV008", "RV005", "RV003"]
        );
        // ties keep seed order
        assert_eq!(
            ids(&apply(ReviewSort::Highest)),
            vec!["RV001", "RV003", "RV005", "RV008", "RV002", "RV006", "RV004", "RV007"]
        );
        assert_eq!(ids(&apply(ReviewSort::Lowest))[..2], ["RV007", "RV004"]);
    }

    #[test]
    fn test_sort_codes() {
        assert_eq!(ReviewSort::from_code("helpful"), Some(ReviewSort::MostHelpful));
        assert_eq!(ReviewSort::default().code(), "newest");
    }
}
